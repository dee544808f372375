/// Offer business rules
use crate::error::OfferViolation;
use crate::models::Offer;
use crate::utils::validation::is_valid_email_address;

/// Checks an offer against the business rules, in order: buyer email, seller
/// email, positive amount. The first violation wins.
pub fn validate_offer(offer: &Offer) -> Result<(), OfferViolation> {
    if !is_valid_email_address(&offer.buyer_email) {
        return Err(OfferViolation::InvalidBuyerEmail);
    }

    if !is_valid_email_address(&offer.seller_email) {
        return Err(OfferViolation::InvalidSellerEmail);
    }

    if offer.offer_amount.is_nan() || offer.offer_amount <= 0.0 {
        return Err(OfferViolation::NonPositiveAmount);
    }

    Ok(())
}
