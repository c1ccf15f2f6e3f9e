//! Authorization Module for the Corporation DAO
//!
//! Role-based access control for corporation members plus the contract-level
//! admin that manages configuration.
//!
//! ## Features
//! - Corporation roles (Founder, Officer, Member) with permission helpers
//! - A declared requirement per operation, checked through `authorize`
//! - Contract admin storage with a two-step handover

#![no_std]

use shared::ContractError;
use soroban_sdk::{contracttype, Address, Env, Symbol};

/// Role of a member inside one corporation
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Role {
    /// Creator of the corporation; exactly one while it has members
    Founder,
    /// Trusted member who may invite and propose
    Officer,
    /// Regular member with a vote
    Member,
}

/// Storage keys for contract-level roles
#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    /// Contract-level admin address
    ContractAdmin,
    /// Admin nominated by `propose_admin`, waiting for acceptance
    PendingAdmin,
}

/// Authorization errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AuthError {
    Unauthorized,
    NotMember,
    AdminNotSet,
    NoPendingAdmin,
}

impl From<AuthError> for ContractError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AdminNotSet => ContractError::NotInitialized,
            AuthError::NoPendingAdmin => ContractError::NotFound,
            AuthError::Unauthorized | AuthError::NotMember => ContractError::Unauthorized,
        }
    }
}

/// Permission matrix: defines what each role can do
impl Role {
    /// Founder-only shortcuts (description update)
    pub fn can_manage(&self) -> bool {
        matches!(self, Role::Founder)
    }

    /// Officers and the founder may open proposals and invite
    pub fn can_propose(&self) -> bool {
        matches!(self, Role::Founder | Role::Officer)
    }

    /// Every member votes
    pub fn can_vote(&self) -> bool {
        true
    }

    /// The founder may only leave as the last member
    pub fn can_leave_freely(&self) -> bool {
        !matches!(self, Role::Founder)
    }
}

/// Who may perform an operation
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Requirement {
    /// No role needed; the caller only authenticates
    Anyone,
    /// Caller must be a member of the corporation
    Member,
    /// Caller must be an Officer or the Founder
    OfficerOrFounder,
    /// Caller must be the Founder
    Founder,
}

/// Member-facing operations of the corporation contract
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    CreateCorporation,
    UpdateDescription,
    Join,
    Invite,
    AcceptInvite,
    Leave,
    CreateProposal,
    Vote,
    ExecuteProposal,
    Donate,
    ClaimDissolutionShare,
}

impl Operation {
    /// The predicate each operation is checked against
    pub fn requirement(&self) -> Requirement {
        match self {
            Operation::CreateCorporation
            | Operation::Join
            | Operation::AcceptInvite
            | Operation::ExecuteProposal
            | Operation::Donate
            | Operation::ClaimDissolutionShare => Requirement::Anyone,
            Operation::Leave | Operation::Vote => Requirement::Member,
            Operation::Invite | Operation::CreateProposal => Requirement::OfficerOrFounder,
            Operation::UpdateDescription => Requirement::Founder,
        }
    }
}

/// Check an operation against the caller's role in the corporation.
/// `role` is `None` when the caller is not a member.
pub fn authorize(operation: Operation, role: Option<Role>) -> Result<(), AuthError> {
    match (operation.requirement(), role) {
        (Requirement::Anyone, _) => Ok(()),
        (_, None) => Err(AuthError::NotMember),
        (Requirement::Member, Some(role)) if role.can_vote() => Ok(()),
        (Requirement::OfficerOrFounder, Some(role)) if role.can_propose() => Ok(()),
        (Requirement::Founder, Some(role)) if role.can_manage() => Ok(()),
        _ => Err(AuthError::Unauthorized),
    }
}

/// Core admin functions

/// Initialize contract admin (call once during contract initialization)
pub fn initialize_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&RoleKey::ContractAdmin, admin);
}

/// Get the contract admin address
pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::ContractAdmin)
}

/// Get the admin nominated by an unfinished handover
pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::PendingAdmin)
}

/// Require admin privileges
pub fn require_admin(env: &Env, address: &Address) -> Result<(), AuthError> {
    let admin = get_admin(env).ok_or(AuthError::AdminNotSet)?;
    if &admin == address {
        Ok(())
    } else {
        Err(AuthError::Unauthorized)
    }
}

/// Utility: Combine identity verification with the admin check
pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();
    require_admin(env, caller)
}

/// First step of the admin handover; replaces any earlier nomination
pub fn propose_admin(env: &Env, caller: &Address, new_admin: &Address) -> Result<(), AuthError> {
    verify_admin(env, caller)?;

    env.storage().instance().set(&RoleKey::PendingAdmin, new_admin);
    env.events().publish(
        (Symbol::new(env, "admin_proposed"), caller.clone()),
        new_admin.clone(),
    );

    Ok(())
}

/// Second step: the nominee takes over
pub fn accept_admin(env: &Env, caller: &Address) -> Result<(), AuthError> {
    caller.require_auth();

    let pending = get_pending_admin(env).ok_or(AuthError::NoPendingAdmin)?;
    if &pending != caller {
        return Err(AuthError::Unauthorized);
    }

    let previous = get_admin(env).ok_or(AuthError::AdminNotSet)?;
    env.storage().instance().set(&RoleKey::ContractAdmin, caller);
    env.storage().instance().remove(&RoleKey::PendingAdmin);
    env.events().publish(
        (Symbol::new(env, "admin_accepted"), caller.clone()),
        previous,
    );

    Ok(())
}

/// Drop an unfinished handover (current admin only)
pub fn cancel_admin_transfer(env: &Env, caller: &Address) -> Result<(), AuthError> {
    verify_admin(env, caller)?;

    if get_pending_admin(env).is_none() {
        return Err(AuthError::NoPendingAdmin);
    }
    env.storage().instance().remove(&RoleKey::PendingAdmin);
    env.events()
        .publish((Symbol::new(env, "admin_transfer_cancelled"),), caller.clone());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anyone_operations_need_no_membership() {
        assert_eq!(authorize(Operation::ExecuteProposal, None), Ok(()));
        assert_eq!(authorize(Operation::Donate, None), Ok(()));
        assert_eq!(authorize(Operation::Join, None), Ok(()));
    }

    #[test]
    fn test_member_operations_reject_outsiders() {
        assert_eq!(authorize(Operation::Vote, None), Err(AuthError::NotMember));
        assert_eq!(authorize(Operation::Vote, Some(Role::Member)), Ok(()));
        assert_eq!(authorize(Operation::Leave, Some(Role::Founder)), Ok(()));
    }

    #[test]
    fn test_proposals_need_officer_or_founder() {
        assert_eq!(
            authorize(Operation::CreateProposal, Some(Role::Member)),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(authorize(Operation::CreateProposal, Some(Role::Officer)), Ok(()));
        assert_eq!(authorize(Operation::Invite, Some(Role::Founder)), Ok(()));
    }

    #[test]
    fn test_description_update_is_founder_only() {
        assert_eq!(
            authorize(Operation::UpdateDescription, Some(Role::Officer)),
            Err(AuthError::Unauthorized)
        );
        assert_eq!(authorize(Operation::UpdateDescription, Some(Role::Founder)), Ok(()));
    }

    #[test]
    fn test_auth_error_maps_to_contract_error() {
        assert_eq!(ContractError::from(AuthError::NotMember), ContractError::Unauthorized);
        assert_eq!(ContractError::from(AuthError::AdminNotSet), ContractError::NotInitialized);
    }
}
