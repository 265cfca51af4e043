//! Overflow-safe arithmetic for fund balances.
//!
//! Returns `FundError` rather than panicking so callers can propagate with
//! `?` and leave storage untouched.

use scholarship_errors::FundError;

/// Checked `i128` addition.
#[inline]
pub fn add_amount(a: i128, b: i128) -> Result<i128, FundError> {
    a.checked_add(b).ok_or(FundError::Overflow)
}
