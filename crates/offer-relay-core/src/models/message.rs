/// Outbound notification models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub address: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn named(name: &str, address: &str) -> Self {
        Self {
            address: address.to_string(),
            name: Some(name.to_string()),
        }
    }
}

/// Composed, ready-to-send notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub from: EmailAddress,
    pub to: EmailAddress,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Outcome reported by the mail transport. Any status code counts as a
/// completed call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub status_code: u16,
    pub body: String,
}

impl DeliveryReceipt {
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
