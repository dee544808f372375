/// Offer domain model
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A buyer's proposed price for a seller's listing.
///
/// Absent and `null` fields decode to their zero value; presence checks are
/// the validator's job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Offer {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(rename = "sender", deserialize_with = "null_as_default")]
    pub sender_email: String,
    #[serde(rename = "seller", deserialize_with = "null_as_default")]
    pub seller_email: String,
    #[serde(rename = "buyer", deserialize_with = "null_as_default")]
    pub buyer_email: String,
    #[serde(rename = "offerAmount", deserialize_with = "finite_f32")]
    pub offer_amount: f32,
    /// Informational only, never validated
    #[serde(rename = "requestAmount", deserialize_with = "finite_f32")]
    pub request_amount: f32,
    #[serde(deserialize_with = "null_as_default")]
    pub status: OfferStatus,
}

/// Offer status. Carried through untouched: values outside the known set
/// are kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OfferStatus {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Offered,
    Agreed,
    Declined,
    #[serde(untagged)]
    Other(String),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Amounts must fit a 32-bit float; an overflowing number is a decode error
/// rather than infinity.
fn finite_f32<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    let narrowed = value as f32;
    if narrowed.is_finite() {
        Ok(narrowed)
    } else {
        Err(D::Error::custom(format!(
            "amount {} is out of range for a 32-bit float",
            value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_deserialization() {
        let json = r#"{
            "id": 42,
            "sender": "noreply@redspur.example",
            "seller": "seller@example.com",
            "buyer": "buyer@example.com",
            "offerAmount": 120.5,
            "requestAmount": 150,
            "status": "OFFERED"
        }"#;

        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.id, 42);
        assert_eq!(offer.sender_email, "noreply@redspur.example");
        assert_eq!(offer.seller_email, "seller@example.com");
        assert_eq!(offer.buyer_email, "buyer@example.com");
        assert_eq!(offer.offer_amount, 120.5);
        assert_eq!(offer.request_amount, 150.0);
        assert_eq!(offer.status, OfferStatus::Offered);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let offer: Offer = serde_json::from_str(r#"{"buyer": null, "offerAmount": null}"#).unwrap();
        assert_eq!(offer, Offer::default());
        assert_eq!(offer.status, OfferStatus::Unspecified);
    }

    #[test]
    fn test_status_values() {
        for (raw, status) in [
            ("\"\"", OfferStatus::Unspecified),
            ("\"OFFERED\"", OfferStatus::Offered),
            ("\"AGREED\"", OfferStatus::Agreed),
            ("\"DECLINED\"", OfferStatus::Declined),
            ("\"PENDING\"", OfferStatus::Other("PENDING".to_string())),
            ("\"offered\"", OfferStatus::Other("offered".to_string())),
        ] {
            let parsed: OfferStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, status);
        }

        assert!(serde_json::from_str::<OfferStatus>("7").is_err());
    }

    #[test]
    fn test_unknown_status_round_trips_verbatim() {
        let json = serde_json::to_string(&OfferStatus::Other("PENDING".to_string())).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }

    #[test]
    fn test_overflowing_amounts_rejected() {
        for json in [
            r#"{"offerAmount": 1e39}"#,
            r#"{"offerAmount": -1e39}"#,
            r#"{"requestAmount": 1e39}"#,
        ] {
            assert!(serde_json::from_str::<Offer>(json).is_err(), "accepted {}", json);
        }

        let offer: Offer = serde_json::from_str(r#"{"offerAmount": 3.4e38}"#).unwrap();
        assert!(offer.offer_amount.is_finite());
    }
}
