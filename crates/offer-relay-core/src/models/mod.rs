/// Data models for the offer relay
pub mod config;
pub mod events;
pub mod message;
pub mod offer;

// Re-export commonly used types
pub use config::*;
pub use events::*;
pub use message::*;
pub use offer::*;
