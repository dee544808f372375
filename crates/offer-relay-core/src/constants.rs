/// Application constants
///
/// Hardcoded values used by the offer relay, grouped by concern.
// ============================================================================
// Notification Constants
// ============================================================================
/// Display name paired with the sender address
pub const SENDER_DISPLAY_NAME: &str = "RedSpur";

/// Display name paired with the seller (recipient) address
pub const RECIPIENT_DISPLAY_NAME: &str = "RedSpur Seller";

/// Prefix of every notification subject line
pub const SUBJECT_PREFIX: &str = "New offer from";

// ============================================================================
// Configuration Keys
// ============================================================================

/// Environment variable holding the SendGrid API key (required)
pub const SENDGRID_API_KEY_VAR: &str = "SENDGRID_API_KEY";

/// Environment variable overriding the SendGrid API base URL
pub const SENDGRID_API_URL_VAR: &str = "SENDGRID_API_URL";

/// Environment variable selecting the composition mode (`buyer` or `seller`)
pub const COMPOSITION_MODE_VAR: &str = "OFFER_COMPOSITION_MODE";

// ============================================================================
// SendGrid
// ============================================================================

/// Default SendGrid API base URL
pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com";

/// Path of the SendGrid v3 send endpoint
pub const SENDGRID_SEND_PATH: &str = "/v3/mail/send";
