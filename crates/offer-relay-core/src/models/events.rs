/// Storage event envelope types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// "Object Created" notification delivered through EventBridge.
///
/// Only `region`, `detail.bucket.name` and `detail.object.key` are
/// interpreted; the remaining fields are carried for logging.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectCreatedEvent {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "detail-type", default)]
    pub detail_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
    pub region: String,
    #[serde(default)]
    pub resources: Vec<String>,
    pub detail: ObjectCreatedDetail,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObjectCreatedDetail {
    #[serde(default)]
    pub version: Option<String>,
    pub bucket: EventBucket,
    pub object: EventObject,
    #[serde(rename = "request-id", default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub requester: Option<String>,
    #[serde(rename = "source-ip-address", default)]
    pub source_ip_address: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventBucket {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventObject {
    pub key: String,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub sequencer: Option<String>,
}

/// (region, bucket, key) triple identifying a stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocator {
    pub region: String,
    pub bucket: String,
    pub key: String,
}

impl ObjectCreatedEvent {
    pub fn locator(&self) -> ObjectLocator {
        ObjectLocator {
            region: self.region.clone(),
            bucket: self.detail.bucket.name.clone(),
            key: self.detail.object.key.clone(),
        }
    }
}

impl std::fmt::Display for ObjectLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{} ({})", self.bucket, self.key, self.region)
    }
}
