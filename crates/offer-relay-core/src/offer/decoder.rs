/// Offer document decoder
use crate::error::RelayError;
use crate::models::Offer;

/// Parses a stored offer document.
///
/// Unknown fields are ignored and absent fields take their zero value.
/// Malformed JSON or a field of the wrong type is a decode error.
pub fn decode_offer(raw: &[u8]) -> Result<Offer, RelayError> {
    serde_json::from_slice(raw)
        .map_err(|e| RelayError::Decode(format!("Invalid offer document: {}", e)))
}
