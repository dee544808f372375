/// Offer notification composer
use crate::constants::{RECIPIENT_DISPLAY_NAME, SENDER_DISPLAY_NAME, SUBJECT_PREFIX};
use crate::models::{CompositionMode, EmailAddress, Message, Offer};
use crate::utils::sanitization::escape_html;

/// Renders a validated offer into the seller notification.
///
/// Composition is a pure function of the offer and the mode: the same input
/// always yields the same message.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferComposer {
    mode: CompositionMode,
}

impl OfferComposer {
    pub fn new(mode: CompositionMode) -> Self {
        Self { mode }
    }

    pub fn compose(&self, offer: &Offer) -> Message {
        let party = self.counterparty(offer);
        let amount = format_amount(offer.offer_amount);

        Message {
            from: EmailAddress::named(SENDER_DISPLAY_NAME, &offer.sender_email),
            to: EmailAddress::named(RECIPIENT_DISPLAY_NAME, &offer.seller_email),
            subject: format!("{} {}", SUBJECT_PREFIX, party),
            text_body: format!("Transaction {}: {} offers {}!", offer.id, party, amount),
            html_body: format!(
                "Transaction <strong>{}</strong>: <strong>{}</strong> offers <mark>{}</mark>!",
                offer.id,
                escape_html(party),
                amount
            ),
        }
    }

    fn counterparty<'a>(&self, offer: &'a Offer) -> &'a str {
        match self.mode {
            CompositionMode::Buyer => &offer.buyer_email,
            CompositionMode::Seller => &offer.seller_email,
        }
    }
}

/// Fixed-point rendering with six decimals, no currency symbol
fn format_amount(amount: f32) -> String {
    format!("{:.6}", amount)
}
