//! Payment input validation.
//!
//! Runs before any authorization attempt; a rejection here has no side
//! effects. Cash needs no validation at all.

use jiff::civil::Date;

use crate::domain::payments::{
    errors::PaymentValidationError,
    models::{CardDetails, PaymentDetails, UpiDetails},
};

/// Validates method-specific details against today's date (needed for card
/// expiry).
///
/// # Errors
///
/// Returns the first [`PaymentValidationError`] encountered.
pub fn validate(details: &PaymentDetails, today: Date) -> Result<(), PaymentValidationError> {
    match details {
        PaymentDetails::Card(card) => validate_card(card, today),
        PaymentDetails::Upi(upi) => validate_upi(upi),
        PaymentDetails::Cash => Ok(()),
    }
}

fn validate_card(card: &CardDetails, today: Date) -> Result<(), PaymentValidationError> {
    let digits: Vec<char> = card
        .number
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    if digits.len() < 16 || !digits.iter().all(char::is_ascii_digit) {
        return Err(PaymentValidationError::CardNumber);
    }

    let (month, year) = parse_expiry(&card.expiry)?;

    // A card is valid through the end of its expiry month.
    if (year, month) < (today.year(), today.month()) {
        return Err(PaymentValidationError::CardExpired);
    }

    if !(3..=4).contains(&card.cvv.len()) || !card.cvv.chars().all(|c| c.is_ascii_digit()) {
        return Err(PaymentValidationError::Cvv);
    }

    Ok(())
}

/// Parses `MM/YY` into a month and a four-digit year.
fn parse_expiry(expiry: &str) -> Result<(i8, i16), PaymentValidationError> {
    let (month_raw, year_raw) = expiry
        .split_once('/')
        .ok_or(PaymentValidationError::CardExpiryFormat)?;

    if month_raw.len() != 2 || year_raw.len() != 2 {
        return Err(PaymentValidationError::CardExpiryFormat);
    }

    let month: i8 = month_raw
        .parse()
        .map_err(|_unparsed| PaymentValidationError::CardExpiryFormat)?;
    let year: i16 = year_raw
        .parse()
        .map_err(|_unparsed| PaymentValidationError::CardExpiryFormat)?;

    if !(1..=12).contains(&month) {
        return Err(PaymentValidationError::CardExpiryFormat);
    }

    Ok((month, 2000 + year))
}

fn validate_upi(upi: &UpiDetails) -> Result<(), PaymentValidationError> {
    let (local, handle) = upi
        .id
        .split_once('@')
        .ok_or(PaymentValidationError::UpiId)?;

    if local.is_empty() || handle.len() < 3 || !handle.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(PaymentValidationError::UpiId);
    }

    if upi.display_name.trim().chars().count() < 2 {
        return Err(PaymentValidationError::UpiDisplayName);
    }

    Ok(())
}
