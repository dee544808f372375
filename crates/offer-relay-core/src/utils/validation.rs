/// Input validation utilities
use lettre::message::Mailbox;
use std::str::FromStr;

/// Checks RFC 5322 mailbox syntax (`addr@domain` or `Name <addr@domain>`).
/// Deliverability is not checked.
pub fn is_valid_email_address(email: &str) -> bool {
    Mailbox::from_str(email).is_ok()
}
