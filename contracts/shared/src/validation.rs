//! Validation helper utilities for the corporation contracts
//!
//! Range checks return `OutOfBounds`; arithmetic helpers never wrap.

use crate::constants::{BPS_DENOMINATOR, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_QUORUM_BPS};
use crate::errors::ContractError;

// ===== Amount Validation =====

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Validate that an amount is non-negative
pub fn validate_non_negative_amount(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::OutOfBounds);
    }
    Ok(())
}

/// Validate that the attached value is exactly what the operation charges.
/// Both under- and overpayment are rejected.
pub fn validate_exact_amount(expected: i128, provided: i128) -> Result<(), ContractError> {
    if provided != expected {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

// ===== Governance Validation =====

/// Validate a basis-point value in `[1, 10000]`
pub fn validate_bps(bps: u32) -> Result<(), ContractError> {
    if bps < MIN_QUORUM_BPS || bps > BPS_DENOMINATOR {
        return Err(ContractError::OutOfBounds);
    }
    Ok(())
}

/// Validate a quorum threshold
pub fn validate_quorum_bps(bps: u32) -> Result<(), ContractError> {
    validate_bps(bps)
}

/// Validate a voting period against the configured `[min, max]` window
pub fn validate_voting_period(seconds: u64, min: u64, max: u64) -> Result<(), ContractError> {
    if seconds < min || seconds > max {
        return Err(ContractError::OutOfBounds);
    }
    Ok(())
}

// ===== State Validation =====

/// Validate that contract is not paused
pub fn validate_not_paused(is_paused: bool) -> Result<(), ContractError> {
    if is_paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

// ===== Arithmetic =====

/// Safely add two amounts, returning error on overflow
pub fn safe_add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Subtract, refusing to go below zero
pub fn safe_sub(a: i128, b: i128) -> Result<i128, ContractError> {
    match a.checked_sub(b) {
        Some(result) if result >= 0 => Ok(result),
        _ => Err(ContractError::InsufficientFunds),
    }
}

/// `amount * bps / 10000`, rounded down
pub fn bps_of(amount: i128, bps: u32) -> Result<i128, ContractError> {
    amount
        .checked_mul(bps as i128)
        .ok_or(ContractError::Overflow)?
        .checked_div(BPS_DENOMINATOR as i128)
        .ok_or(ContractError::Overflow)
}

// ===== Pagination =====

/// Zero means "use the default"; anything above the maximum is clamped
pub fn clamp_page_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        limit.min(MAX_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bps_bounds() {
        assert_eq!(validate_bps(0), Err(ContractError::OutOfBounds));
        assert_eq!(validate_bps(1), Ok(()));
        assert_eq!(validate_bps(10_000), Ok(()));
        assert_eq!(validate_bps(10_001), Err(ContractError::OutOfBounds));
    }

    #[test]
    fn test_validate_voting_period_window() {
        assert_eq!(validate_voting_period(3_599, 3_600, 7_200), Err(ContractError::OutOfBounds));
        assert_eq!(validate_voting_period(3_600, 3_600, 7_200), Ok(()));
        assert_eq!(validate_voting_period(7_200, 3_600, 7_200), Ok(()));
        assert_eq!(validate_voting_period(7_201, 3_600, 7_200), Err(ContractError::OutOfBounds));
    }

    #[test]
    fn test_exact_amount_rejects_over_and_under() {
        assert_eq!(validate_exact_amount(1_000, 999), Err(ContractError::InvalidAmount));
        assert_eq!(validate_exact_amount(1_000, 1_001), Err(ContractError::InvalidAmount));
        assert_eq!(validate_exact_amount(1_000, 1_000), Ok(()));
    }

    #[test]
    fn test_bps_of_rounds_down() {
        assert_eq!(bps_of(1_000, 2_500), Ok(250));
        assert_eq!(bps_of(101, 2_500), Ok(25));
        assert_eq!(bps_of(0, 2_500), Ok(0));
        assert_eq!(bps_of(i128::MAX, 2), Err(ContractError::Overflow));
    }

    #[test]
    fn test_safe_sub_never_goes_negative() {
        assert_eq!(safe_sub(10, 4), Ok(6));
        assert_eq!(safe_sub(10, 10), Ok(0));
        assert_eq!(safe_sub(10, 11), Err(ContractError::InsufficientFunds));
    }

    #[test]
    fn test_clamp_page_limit() {
        assert_eq!(clamp_page_limit(0), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_limit(5), 5);
        assert_eq!(clamp_page_limit(10_000), MAX_PAGE_SIZE);
    }
}
