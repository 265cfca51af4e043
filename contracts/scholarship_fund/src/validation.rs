//! Amount validation for donations and awards.

use scholarship_errors::FundError;

/// Reject zero and negative donations.
///
/// # Errors
/// * `InvalidAmount` if `amount <= 0`
pub fn require_positive_amount(amount: i128) -> Result<(), FundError> {
    if amount <= 0 {
        return Err(FundError::InvalidAmount);
    }
    Ok(())
}

/// Reject negative amounts. Zero is a valid award.
///
/// # Errors
/// * `InvalidAmount` if `amount < 0`
pub fn require_non_negative_amount(amount: i128) -> Result<(), FundError> {
    if amount < 0 {
        return Err(FundError::InvalidAmount);
    }
    Ok(())
}
