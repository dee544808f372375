/// Lambda event handlers
pub mod offer;

pub use offer::process_event;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Main Lambda handler - runs one object-created event through the offer
/// pipeline
pub async fn handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    info!(request_id = %event.context.request_id, "Received Lambda event");

    let receipt = offer::handle(event.payload).await?;

    Ok(serde_json::json!({
        "statusCode": receipt.status_code,
        "body": receipt.body
    }))
}
