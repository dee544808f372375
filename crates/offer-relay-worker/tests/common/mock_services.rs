/// In-memory collaborators for integration testing
use async_trait::async_trait;
use offer_relay_core::error::RelayError;
use offer_relay_core::models::{DeliveryReceipt, Message, ObjectLocator};
use offer_relay_core::services::{MailTransport, ObjectStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock object store keyed by `bucket/key`
#[derive(Clone, Default)]
pub struct MockObjectStore {
    pub objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    pub fetches: Arc<Mutex<Vec<ObjectLocator>>>,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_object(&self, bucket: &str, key: &str, data: Vec<u8>) {
        self.objects
            .lock()
            .unwrap()
            .insert(format!("{}/{}", bucket, key), data);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    pub fn fetched(&self) -> Vec<ObjectLocator> {
        self.fetches.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn fetch(&self, locator: &ObjectLocator) -> Result<Vec<u8>, RelayError> {
        self.fetches.lock().unwrap().push(locator.clone());

        self.objects
            .lock()
            .unwrap()
            .get(&format!("{}/{}", locator.bucket, locator.key))
            .cloned()
            .ok_or_else(|| RelayError::Fetch(format!("object {} not found", locator)))
    }
}

/// Mock transport that records every message and answers with a fixed
/// status
#[derive(Clone)]
pub struct RecordingTransport {
    pub sent: Arc<Mutex<Vec<Message>>>,
    status_code: u16,
    body: String,
}

impl RecordingTransport {
    pub fn accepting() -> Self {
        Self::responding(202, "")
    }

    pub fn responding(status_code: u16, body: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            status_code,
            body: body.to_string(),
        }
    }

    pub fn sent_messages(&self) -> Vec<Message> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, message: &Message) -> Result<DeliveryReceipt, RelayError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(DeliveryReceipt {
            status_code: self.status_code,
            body: self.body.clone(),
        })
    }
}

/// Mock transport whose call never completes
pub struct FailingTransport;

#[async_trait]
impl MailTransport for FailingTransport {
    async fn send(&self, _message: &Message) -> Result<DeliveryReceipt, RelayError> {
        Err(RelayError::Transport("connection reset by peer".to_string()))
    }
}
