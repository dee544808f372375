/// Offer Relay Worker - offer notification Lambda
///
/// This module contains the invocation handler that wires the object store
/// and mail transport into the offer pipeline.
pub mod handlers;

// Re-export commonly used items
pub use handlers::{handler, process_event};
pub use offer_relay_core::*;
