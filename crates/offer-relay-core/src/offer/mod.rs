/// Offer decoding and business rules
pub mod decoder;
pub mod validator;

pub use decoder::decode_offer;
pub use validator::validate_offer;
