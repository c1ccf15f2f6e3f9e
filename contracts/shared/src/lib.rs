#![no_std]
//! # Shared Corporation DAO Library
//!
//! Reusable errors, constants and validation helpers for the corporation
//! governance contracts.
//!
//! ## Modules
//!
//! - `errors` - The error type returned by every contract entry point
//! - `constants` - Governance defaults, bounds and storage lifetimes
//! - `validation` - Range checks and checked basis-point arithmetic
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::validation::{validate_quorum_bps, bps_of};
//! use shared::constants::BPS_DENOMINATOR;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::ContractError;
pub use validation::{
    bps_of, clamp_page_limit, safe_add, safe_sub, validate_bps, validate_exact_amount,
    validate_non_negative_amount, validate_not_paused, validate_positive_amount,
    validate_quorum_bps, validate_voting_period,
};
