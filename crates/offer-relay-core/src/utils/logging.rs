/// Logging utilities for PII redaction
///
/// Offer documents carry buyer, seller and sender addresses. These helpers
/// keep the domain part visible for debugging while hiding the mailbox.
use crate::models::Offer;
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use offer_relay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("buyer@example.com"), "***@example.com");
/// assert_eq!(
///     redact_email(r#"{"seller":"s@acme.com"}"#),
///     r#"{"seller":"***@acme.com"}"#
/// );
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts a fetched object body for logging
pub fn redact_document(raw: &[u8]) -> String {
    redact_email(&String::from_utf8_lossy(raw))
}

/// Creates safe log context for a decoded offer
pub fn offer_log_context(offer: &Offer) -> serde_json::Value {
    serde_json::json!({
        "id": offer.id,
        "sender": redact_email(&offer.sender_email),
        "seller": redact_email(&offer.seller_email),
        "buyer": redact_email(&offer.buyer_email),
        "offerAmount": offer.offer_amount,
        "requestAmount": offer.request_amount,
        "status": offer.status,
    })
}
