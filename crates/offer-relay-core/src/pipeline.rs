/// Offer notification pipeline
///
/// Runs one event through fetch, decode, validate, compose and send. Any
/// stage failure aborts the run and is returned unchanged; nothing is
/// retried.
use crate::email::OfferComposer;
use crate::error::RelayError;
use crate::models::{CompositionMode, DeliveryReceipt, ObjectCreatedEvent};
use crate::offer::{decode_offer, validate_offer};
use crate::services::{MailTransport, ObjectStore};
use crate::utils::logging::{offer_log_context, redact_document};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Start,
    Fetched,
    Decoded,
    Validated,
    Sent,
    Failed,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Fetched => "fetched",
            Self::Decoded => "decoded",
            Self::Validated => "validated",
            Self::Sent => "sent",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

pub struct OfferPipeline {
    store: Arc<dyn ObjectStore>,
    transport: Arc<dyn MailTransport>,
    composer: OfferComposer,
}

impl OfferPipeline {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        transport: Arc<dyn MailTransport>,
        mode: CompositionMode,
    ) -> Self {
        Self {
            store,
            transport,
            composer: OfferComposer::new(mode),
        }
    }

    #[tracing::instrument(name = "offer.pipeline", skip_all)]
    pub async fn run(&self, payload: Value) -> Result<DeliveryReceipt, RelayError> {
        let result = self.execute(payload).await;

        match &result {
            Ok(receipt) => {
                debug!(stage = %PipelineStage::Sent, "Pipeline finished");
                info!(
                    status_code = receipt.status_code,
                    body = %receipt.body,
                    "Email Response: send responded with {}",
                    receipt.status_code
                );
            }
            Err(e) => {
                error!(
                    stage = %PipelineStage::Failed,
                    failed_after = %e.failed_after(),
                    error_kind = e.kind(),
                    error = %e,
                    "Offer pipeline failed"
                );
            }
        }

        result
    }

    async fn execute(&self, payload: Value) -> Result<DeliveryReceipt, RelayError> {
        let event = parse_event(payload)?;
        let locator = event.locator();

        let raw = self.store.fetch(&locator).await?;
        debug!(stage = %PipelineStage::Fetched, locator = %locator, "Pipeline advanced");
        info!(document = %redact_document(&raw), "Fetched offer document");

        let offer = decode_offer(&raw)?;
        debug!(stage = %PipelineStage::Decoded, "Pipeline advanced");
        info!(offer = %offer_log_context(&offer), "Decoded offer");

        validate_offer(&offer)?;
        debug!(stage = %PipelineStage::Validated, offer_id = offer.id, "Pipeline advanced");

        let message = self.composer.compose(&offer);
        self.transport.send(&message).await
    }
}

/// Decodes the invocation payload into an object-created envelope
pub fn parse_event(payload: Value) -> Result<ObjectCreatedEvent, RelayError> {
    if payload.is_null() {
        return Err(RelayError::EmptyEvent);
    }

    info!(event = %payload, "Received offer event");

    serde_json::from_value(payload)
        .map_err(|e| RelayError::EventParse(format!("Invalid object event: {}", e)))
}
