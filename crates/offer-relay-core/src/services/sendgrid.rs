/// SendGrid mail transport
use crate::constants::SENDGRID_SEND_PATH;
use crate::error::RelayError;
use crate::models::{DeliveryReceipt, EmailAddress, Message, RelayConfig};
use async_trait::async_trait;
use serde::Serialize;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Makes one send attempt. Only a failure to complete the call is an
    /// error; the provider's status code is returned as-is.
    async fn send(&self, message: &Message) -> Result<DeliveryReceipt, RelayError>;
}

pub struct SendGridTransport {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SendGridTransport {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.sendgrid_api_key.clone(),
            endpoint: format!(
                "{}{}",
                config.sendgrid_api_url.trim_end_matches('/'),
                SENDGRID_SEND_PATH
            ),
        }
    }
}

// v3 mail/send request document
#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: MailAddress<'a>,
    subject: &'a str,
    content: Vec<MailContent<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<MailAddress<'a>>,
}

#[derive(Serialize)]
struct MailAddress<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct MailContent<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

impl<'a> From<&'a EmailAddress> for MailAddress<'a> {
    fn from(addr: &'a EmailAddress) -> Self {
        Self {
            email: &addr.address,
            name: addr.name.as_deref(),
        }
    }
}

impl<'a> From<&'a Message> for MailSendRequest<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            personalizations: vec![Personalization {
                to: vec![(&message.to).into()],
            }],
            from: (&message.from).into(),
            subject: &message.subject,
            // text/plain must precede text/html
            content: vec![
                MailContent {
                    content_type: "text/plain",
                    value: &message.text_body,
                },
                MailContent {
                    content_type: "text/html",
                    value: &message.html_body,
                },
            ],
        }
    }
}

#[async_trait]
impl MailTransport for SendGridTransport {
    async fn send(&self, message: &Message) -> Result<DeliveryReceipt, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&MailSendRequest::from(message))
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("SendGrid request failed: {}", e)))?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            RelayError::Transport(format!("Failed to read SendGrid response: {}", e))
        })?;

        tracing::debug!(status_code, "SendGrid call completed");
        Ok(DeliveryReceipt { status_code, body })
    }
}
