//! Common error type for the corporation contracts
//!
//! Every entry point returns this enum so that a rejected message is always
//! reported with a specific, stable code.

use soroban_sdk::contracterror;

/// Error codes are grouped by category:
/// - 1-19: General/Authorization errors
/// - 20-39: Membership and lifecycle errors
/// - 40-59: Governance errors
/// - 60-79: Treasury and claim errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractError {
    // ===== General/Authorization Errors (1-19) =====
    /// Caller lacks the role the operation requires
    Unauthorized = 1,

    /// Contract is paused and operations are not allowed
    Paused = 2,

    /// Malformed input (empty name, zero address list, ...)
    InvalidInput = 3,

    /// Attached value does not match what the operation requires
    InvalidAmount = 4,

    /// Requested resource not found
    NotFound = 5,

    /// Resource already exists
    AlreadyExists = 6,

    /// Corporation or proposal status does not allow the request
    InvalidState = 7,

    /// Arithmetic overflow occurred
    Overflow = 8,

    /// Contract not initialized
    NotInitialized = 9,

    /// Contract already initialized
    AlreadyInitialized = 10,

    // ===== Membership and Lifecycle Errors (20-39) =====
    /// Configuration or settings value outside its allowed range
    OutOfBounds = 20,

    /// A second Founder would be created
    DuplicateFounder = 21,

    /// Invite or voting window has closed
    Expired = 22,

    // ===== Governance Errors (40-59) =====
    /// Voter joined at or after proposal creation
    NotEligible = 40,

    /// Address has already voted on this proposal
    AlreadyVoted = 41,

    // ===== Treasury and Claim Errors (60-79) =====
    /// Treasury or surplus cannot cover the amount
    InsufficientFunds = 60,

    /// Dissolution share was already paid out
    AlreadyClaimed = 61,
}

impl ContractError {
    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            ContractError::Unauthorized => "Caller is not authorized",
            ContractError::Paused => "Contract is paused",
            ContractError::InvalidInput => "Invalid input provided",
            ContractError::InvalidAmount => "Attached amount does not match",
            ContractError::NotFound => "Resource not found",
            ContractError::AlreadyExists => "Resource already exists",
            ContractError::InvalidState => "Invalid state for operation",
            ContractError::Overflow => "Arithmetic overflow",
            ContractError::NotInitialized => "Contract not initialized",
            ContractError::AlreadyInitialized => "Contract already initialized",

            ContractError::OutOfBounds => "Value outside allowed range",
            ContractError::DuplicateFounder => "Corporation already has a founder",
            ContractError::Expired => "Window has expired",

            ContractError::NotEligible => "Member joined after proposal creation",
            ContractError::AlreadyVoted => "Already voted on this proposal",

            ContractError::InsufficientFunds => "Insufficient funds",
            ContractError::AlreadyClaimed => "Share already claimed",
        }
    }
}
