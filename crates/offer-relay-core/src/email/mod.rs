/// Notification composition
pub mod composer;

pub use composer::OfferComposer;
