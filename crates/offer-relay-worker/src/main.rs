use lambda_runtime::{Error, run, service_fn};
use offer_relay_worker::handler;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Structured JSON logs, filtered by RUST_LOG (default: info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();

    info!("Starting offer relay Lambda function");

    run(service_fn(handler)).await
}
