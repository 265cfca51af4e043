#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups fund errors by domain for monitoring and off-chain display.
/// @dev    Consumers should switch on this value first, then on the specific
///         `FundError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Donation and award amount errors (codes 200-299).
    Funds,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  FundError
/// @notice Error enum returned by every fallible scholarship fund operation.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Funds
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundError {
    // --- Initialization (1-99) ---
    /// No owner has been stored yet.
    NotInitialized = 1,

    /// `initialize` was already called; the owner cannot be replaced.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the fund owner.
    Unauthorized = 100,

    // --- Funds (200-299) ---
    /// Amount argument must be strictly positive (> 0).
    InvalidAmount = 200,

    /// Requested award exceeds the pooled total.
    InsufficientFunds = 201,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every FundError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for FundError {
    fn category(&self) -> ErrorCategory {
        match self {
            FundError::NotInitialized | FundError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            FundError::Unauthorized => ErrorCategory::Authorization,
            FundError::InvalidAmount | FundError::InsufficientFunds => ErrorCategory::Funds,
            FundError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            FundError::NotInitialized => "Fund has not been initialized",
            FundError::AlreadyInitialized => "Fund has already been initialized",
            FundError::Unauthorized => "Owner only",
            FundError::InvalidAmount => "Invalid amount",
            FundError::InsufficientFunds => "Insufficient funds",
            FundError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}

#[cfg(test)]
mod test_errors;
