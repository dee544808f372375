//! HTML sanitization utilities

/// Escapes characters with markup meaning so values can be embedded in an
/// HTML body.
///
/// # Examples
/// ```
/// use offer_relay_core::utils::sanitization::escape_html;
///
/// assert_eq!(escape_html("Bob <bob@x.com>"), "Bob &lt;bob@x.com&gt;");
/// assert_eq!(escape_html("buyer@x.com"), "buyer@x.com");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
