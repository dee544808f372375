/// Test data builders
use serde_json::{Value, json};

pub const BUCKET: &str = "redspur-offers";
pub const KEY: &str = "offers/1.json";
pub const REGION: &str = "us-west-2";

/// Minimal object-created envelope for `bucket`/`key`
pub fn object_created_event(bucket: &str, key: &str) -> Value {
    json!({
        "version": "0",
        "id": "evt-test",
        "detail-type": "Object Created",
        "source": "aws.s3",
        "account": "123456789012",
        "time": "2025-11-28T22:12:01Z",
        "region": REGION,
        "resources": [format!("arn:aws:s3:::{}", bucket)],
        "detail": {
            "bucket": {"name": bucket},
            "object": {"key": key}
        }
    })
}

/// Offer document with the given parties and amount
pub fn offer_document(id: i32, buyer: &str, seller: &str, amount: f64) -> Vec<u8> {
    json!({
        "id": id,
        "sender": "offers@redspur.example",
        "seller": seller,
        "buyer": buyer,
        "offerAmount": amount,
        "requestAmount": amount * 1.2,
        "status": "OFFERED"
    })
    .to_string()
    .into_bytes()
}
