#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{ErrorCategory, ErrorExt, FundError};
    use std::vec::Vec;

    fn all_variants() -> Vec<FundError> {
        std::vec![
            FundError::NotInitialized,
            FundError::AlreadyInitialized,
            FundError::Unauthorized,
            FundError::InvalidAmount,
            FundError::InsufficientFunds,
            FundError::Overflow,
        ]
    }

    // --- Wire code tests ---

    #[test]
    fn test_codes_initialization() {
        assert_eq!(FundError::NotInitialized as u32, 1);
        assert_eq!(FundError::AlreadyInitialized as u32, 2);
    }

    #[test]
    fn test_codes_authorization() {
        assert_eq!(FundError::Unauthorized as u32, 100);
    }

    #[test]
    fn test_codes_funds() {
        assert_eq!(FundError::InvalidAmount as u32, 200);
        assert_eq!(FundError::InsufficientFunds as u32, 201);
    }

    #[test]
    fn test_codes_arithmetic() {
        assert_eq!(FundError::Overflow as u32, 700);
    }

    #[test]
    fn test_codes_are_unique() {
        let variants = all_variants();
        for (i, a) in variants.iter().enumerate() {
            for b in variants.iter().skip(i + 1) {
                assert_ne!(*a as u32, *b as u32, "duplicate code for {:?}", a);
            }
        }
    }

    // --- Category mapping tests ---

    #[test]
    fn test_category_initialization() {
        assert_eq!(
            FundError::NotInitialized.category(),
            ErrorCategory::Initialization
        );
        assert_eq!(
            FundError::AlreadyInitialized.category(),
            ErrorCategory::Initialization
        );
    }

    #[test]
    fn test_category_authorization() {
        assert_eq!(
            FundError::Unauthorized.category(),
            ErrorCategory::Authorization
        );
    }

    #[test]
    fn test_category_funds() {
        assert_eq!(FundError::InvalidAmount.category(), ErrorCategory::Funds);
        assert_eq!(
            FundError::InsufficientFunds.category(),
            ErrorCategory::Funds
        );
    }

    #[test]
    fn test_category_arithmetic() {
        assert_eq!(FundError::Overflow.category(), ErrorCategory::Arithmetic);
    }

    #[test]
    fn test_category_matches_code_range() {
        for err in all_variants() {
            let code = err as u32;
            let expected = match code {
                1..=99 => ErrorCategory::Initialization,
                100..=199 => ErrorCategory::Authorization,
                200..=299 => ErrorCategory::Funds,
                700..=799 => ErrorCategory::Arithmetic,
                _ => panic!("code {} outside any category block", code),
            };
            assert_eq!(err.category(), expected);
        }
    }

    // --- Description tests ---

    #[test]
    fn test_descriptions_of_caller_facing_errors() {
        assert_eq!(FundError::InvalidAmount.description(), "Invalid amount");
        assert_eq!(FundError::Unauthorized.description(), "Owner only");
        assert_eq!(
            FundError::InsufficientFunds.description(),
            "Insufficient funds"
        );
    }

    #[test]
    fn test_descriptions_non_empty() {
        for err in all_variants() {
            assert!(!err.description().is_empty(), "{:?}", err);
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(FundError::Unauthorized, FundError::Unauthorized);
        assert_ne!(FundError::Unauthorized, FundError::InsufficientFunds);
    }

    // --- Result integration tests (mirrors real contract call sites) ---

    fn mock_award(is_owner: bool, amount: i128, total: i128) -> Result<i128, FundError> {
        if !is_owner {
            return Err(FundError::Unauthorized);
        }
        if amount > total {
            return Err(FundError::InsufficientFunds);
        }
        Ok(amount)
    }

    #[test]
    fn test_unauthorized_checked_before_funds() {
        assert_eq!(mock_award(false, 500, 100), Err(FundError::Unauthorized));
        assert_eq!(mock_award(true, 500, 100), Err(FundError::InsufficientFunds));
        assert_eq!(mock_award(true, 100, 100), Ok(100));
    }

    #[test]
    fn test_overflow() {
        let result: Result<i128, FundError> = i128::MAX.checked_add(1).ok_or(FundError::Overflow);
        assert_eq!(result, Err(FundError::Overflow));
    }

    #[test]
    fn test_error_category_equality() {
        assert_eq!(ErrorCategory::Funds, ErrorCategory::Funds);
        assert_ne!(ErrorCategory::Funds, ErrorCategory::Arithmetic);
    }
}
