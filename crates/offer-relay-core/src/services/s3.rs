/// S3 object retrieval
use crate::error::RelayError;
use crate::models::ObjectLocator;
use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Retrieves the full body of the object at `locator`. Single attempt.
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, RelayError>;
}

/// S3-backed object store. A client is built per fetch so each event is
/// read from the region it names.
pub struct S3ObjectStore {
    sdk_config: aws_config::SdkConfig,
}

impl S3ObjectStore {
    pub fn new(sdk_config: aws_config::SdkConfig) -> Self {
        Self { sdk_config }
    }

    fn client_for(&self, region: &str) -> aws_sdk_s3::Client {
        let mut builder = aws_sdk_s3::config::Builder::from(&self.sdk_config);
        if !region.is_empty() {
            builder = builder.region(Region::new(region.to_string()));
        }
        aws_sdk_s3::Client::from_conf(builder.build())
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, RelayError> {
        let response = self
            .client_for(&locator.region)
            .get_object()
            .bucket(&locator.bucket)
            .key(&locator.key)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    RelayError::Fetch(format!("object {} not found", locator))
                } else {
                    RelayError::Fetch(format!(
                        "S3 get_object failed for {}: {}",
                        locator,
                        DisplayErrorContext(&service_error)
                    ))
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| RelayError::Fetch(format!("Failed to read S3 object body: {}", e)))?
            .into_bytes()
            .to_vec();

        tracing::info!("Downloaded {} ({} bytes)", locator, data.len());
        Ok(data)
    }
}
