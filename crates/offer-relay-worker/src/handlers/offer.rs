/// Offer handler - wires collaborators for one invocation
use offer_relay_core::error::RelayError;
use offer_relay_core::models::{DeliveryReceipt, RelayConfig};
use offer_relay_core::pipeline::OfferPipeline;
use offer_relay_core::services::load_config;
use offer_relay_core::services::s3::{ObjectStore, S3ObjectStore};
use offer_relay_core::services::sendgrid::{MailTransport, SendGridTransport};
use serde_json::Value;
use std::sync::Arc;

/// Per-invocation context. Nothing is shared between invocations.
pub struct OfferContext {
    pub pipeline: OfferPipeline,
}

impl OfferContext {
    pub fn new(config: &RelayConfig, store: Arc<dyn ObjectStore>) -> Self {
        let transport: Arc<dyn MailTransport> = Arc::new(SendGridTransport::new(config));
        Self::with_transport(config, store, transport)
    }

    pub fn with_transport(
        config: &RelayConfig,
        store: Arc<dyn ObjectStore>,
        transport: Arc<dyn MailTransport>,
    ) -> Self {
        Self {
            pipeline: OfferPipeline::new(store, transport, config.composition_mode),
        }
    }
}

/// Handles one invocation against the process environment and AWS
pub async fn handle(payload: Value) -> Result<DeliveryReceipt, RelayError> {
    let aws_config = aws_config::load_from_env().await;
    let store = Arc::new(S3ObjectStore::new(aws_config));

    process_event(|key| std::env::var(key).ok(), store, payload).await
}

/// Handles one invocation with configuration read through `lookup`.
///
/// Configuration is re-read and checked before anything else, so a missing
/// API key fails without touching the object store.
pub async fn process_event<F>(
    lookup: F,
    store: Arc<dyn ObjectStore>,
    payload: Value,
) -> Result<DeliveryReceipt, RelayError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config(lookup).inspect_err(|e| {
        tracing::error!(error_kind = e.kind(), error = %e, "Invocation rejected");
    })?;

    let ctx = OfferContext::new(&config, store);
    ctx.pipeline.run(payload).await
}
