/// Offer Relay Core - offer validation and notification pipeline
///
/// This crate contains the offer model, the decode/validate/compose stages,
/// the pipeline orchestrator and the object store / mail transport
/// collaborators used by the offer relay Lambda.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod offer;
pub mod pipeline;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{OfferViolation, RelayError};
pub use pipeline::{OfferPipeline, PipelineStage};
