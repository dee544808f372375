/// Configuration models
use crate::constants::DEFAULT_SENDGRID_API_URL;
use std::str::FromStr;

/// Relay configuration, resolved once per invocation
#[derive(Clone)]
pub struct RelayConfig {
    pub sendgrid_api_key: String,
    pub sendgrid_api_url: String,
    pub composition_mode: CompositionMode,
}

impl RelayConfig {
    pub fn new(sendgrid_api_key: impl Into<String>) -> Self {
        Self {
            sendgrid_api_key: sendgrid_api_key.into(),
            sendgrid_api_url: default_sendgrid_api_url(),
            composition_mode: CompositionMode::default(),
        }
    }

    /// Validates configuration is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.sendgrid_api_key.trim().is_empty() {
            return Err("SendGrid API key is empty".to_string());
        }

        if !self.sendgrid_api_url.starts_with("http://")
            && !self.sendgrid_api_url.starts_with("https://")
        {
            return Err(format!(
                "Invalid SendGrid API URL: {}",
                self.sendgrid_api_url
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("sendgrid_api_key", &"***")
            .field("sendgrid_api_url", &self.sendgrid_api_url)
            .field("composition_mode", &self.composition_mode)
            .finish()
    }
}

fn default_sendgrid_api_url() -> String {
    DEFAULT_SENDGRID_API_URL.to_string()
}

/// Which party's email address the notification subject and body name.
///
/// The seller is always the recipient; the modes only differ in the
/// counterparty shown in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositionMode {
    /// "New offer from <buyer>"
    #[default]
    Buyer,
    /// "New offer from <seller>"
    Seller,
}

impl FromStr for CompositionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buyer" => Ok(Self::Buyer),
            "seller" => Ok(Self::Seller),
            other => Err(format!(
                "Unknown composition mode '{}', expected 'buyer' or 'seller'",
                other
            )),
        }
    }
}
