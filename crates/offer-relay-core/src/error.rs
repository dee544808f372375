/// Error types for the offer relay
use crate::pipeline::PipelineStage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Empty event: invocation received no payload")]
    EmptyEvent,

    #[error("Event parse error: {0}")]
    EventParse(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(#[from] OfferViolation),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Business rule violated by an offer. Only the first violation is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferViolation {
    #[error("invalid buyer email address")]
    InvalidBuyerEmail,

    #[error("invalid seller email address")]
    InvalidSellerEmail,

    #[error("offer amount must be greater than zero")]
    NonPositiveAmount,
}

impl RelayError {
    /// Stable tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::EmptyEvent => "empty_event",
            Self::EventParse(_) => "event_parse",
            Self::Fetch(_) => "fetch",
            Self::Decode(_) => "decode",
            Self::Validation(_) => "validation",
            Self::Transport(_) => "transport",
        }
    }

    /// Last pipeline stage reached before this error moved the run to `Failed`
    pub fn failed_after(&self) -> PipelineStage {
        match self {
            Self::Config(_) | Self::EmptyEvent | Self::EventParse(_) | Self::Fetch(_) => {
                PipelineStage::Start
            }
            Self::Decode(_) => PipelineStage::Fetched,
            Self::Validation(_) => PipelineStage::Decoded,
            Self::Transport(_) => PipelineStage::Validated,
        }
    }
}
