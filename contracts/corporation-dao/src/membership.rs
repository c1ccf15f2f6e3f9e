use authorization::{authorize, Operation, Role};
use shared::{clamp_page_limit, validate_not_paused, ContractError};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{Corporation, CorporationStatus, Invite, JoinPolicy, Member};
use crate::{events, storage, transfer, treasury};

/// Role of `address` in the corporation, `None` for outsiders
pub fn role_of(env: &Env, corp_id: u64, address: &Address) -> Option<Role> {
    storage::get_member(env, corp_id, address).map(|m| m.role)
}

fn require_active(corp: &Corporation) -> Result<(), ContractError> {
    if corp.status != CorporationStatus::Active {
        return Err(ContractError::InvalidState);
    }
    Ok(())
}

fn require_not_member(env: &Env, corp_id: u64, address: &Address) -> Result<(), ContractError> {
    if storage::get_member(env, corp_id, address).is_some() {
        return Err(ContractError::AlreadyExists);
    }
    Ok(())
}

fn require_capacity(corp: &Corporation) -> Result<(), ContractError> {
    if corp.member_count >= corp.max_members {
        return Err(ContractError::OutOfBounds);
    }
    Ok(())
}

/// Add a member and bump the count; callers save the corporation
pub fn admit(env: &Env, corp: &mut Corporation, address: &Address, role: Role) -> Result<(), ContractError> {
    corp.member_count = corp
        .member_count
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    let member = Member {
        corp_id: corp.id,
        address: address.clone(),
        role,
        joined_at: env.ledger().timestamp(),
    };
    storage::add_member(env, &member);
    events::member_joined(env, corp.id, address, role);
    Ok(())
}

/// Remove a member and drop the count; callers save the corporation
pub fn expel(env: &Env, corp: &mut Corporation, address: &Address) -> Result<(), ContractError> {
    corp.member_count = corp
        .member_count
        .checked_sub(1)
        .ok_or(ContractError::InvalidState)?;
    storage::remove_member(env, corp.id, address);
    Ok(())
}

pub fn join(env: &Env, member: Address, corp_id: u64) -> Result<(), ContractError> {
    member.require_auth();
    validate_not_paused(storage::is_paused(env))?;
    authorize(Operation::Join, None)?;

    let mut corp = storage::get_corporation(env, corp_id)?;
    require_active(&corp)?;
    if corp.join_policy != JoinPolicy::Open {
        return Err(ContractError::Unauthorized);
    }
    require_not_member(env, corp_id, &member)?;
    require_capacity(&corp)?;

    admit(env, &mut corp, &member, Role::Member)?;
    storage::save_corporation(env, &corp);
    Ok(())
}

pub fn invite(env: &Env, inviter: Address, corp_id: u64, invitee: Address) -> Result<u64, ContractError> {
    inviter.require_auth();
    let config = storage::get_config(env)?;
    validate_not_paused(storage::is_paused(env))?;

    let corp = storage::get_corporation(env, corp_id)?;
    require_active(&corp)?;
    authorize(Operation::Invite, role_of(env, corp_id, &inviter))?;
    require_not_member(env, corp_id, &invitee)?;

    let expires_at = env
        .ledger()
        .timestamp()
        .checked_add(config.invite_ttl)
        .ok_or(ContractError::Overflow)?;

    let invite = Invite {
        corp_id,
        invitee: invitee.clone(),
        inviter: inviter.clone(),
        expires_at,
    };
    storage::save_invite(env, &invite);
    events::member_invited(env, corp_id, &invitee, &inviter, expires_at);

    Ok(expires_at)
}

pub fn accept_invite(env: &Env, invitee: Address, corp_id: u64) -> Result<(), ContractError> {
    invitee.require_auth();
    validate_not_paused(storage::is_paused(env))?;
    authorize(Operation::AcceptInvite, None)?;

    let mut corp = storage::get_corporation(env, corp_id)?;
    let invite = storage::get_invite(env, corp_id, &invitee).ok_or(ContractError::NotFound)?;
    if env.ledger().timestamp() >= invite.expires_at {
        return Err(ContractError::Expired);
    }
    require_active(&corp)?;
    require_not_member(env, corp_id, &invitee)?;
    require_capacity(&corp)?;

    storage::remove_invite(env, corp_id, &invitee);
    admit(env, &mut corp, &invitee, Role::Member)?;
    storage::save_corporation(env, &corp);
    Ok(())
}

/// Voluntary exit. Allowed while paused.
///
/// The founder can only leave as the last member. If that happens while the
/// corporation is still active it is dissolved on the spot and whatever is
/// left in the treasury goes back to the founder.
pub fn leave(env: &Env, member: Address, corp_id: u64) -> Result<(), ContractError> {
    member.require_auth();

    let mut corp = storage::get_corporation(env, corp_id)?;
    if corp.status == CorporationStatus::Dissolved {
        return Err(ContractError::InvalidState);
    }
    let role = role_of(env, corp_id, &member);
    authorize(Operation::Leave, role)?;

    let founder_exit = role.map_or(false, |r| !r.can_leave_freely());
    if founder_exit && corp.member_count > 1 {
        return Err(ContractError::InvalidState);
    }

    let mut payouts = Vec::new(env);
    expel(env, &mut corp, &member)?;
    events::member_left(env, corp_id, &member);

    if founder_exit && corp.status == CorporationStatus::Active {
        let remaining = corp.treasury_balance;
        treasury::debit(env, &mut corp, remaining)?;
        transfer::push(&mut payouts, &member, remaining)?;
        corp.status = CorporationStatus::Dissolved;
        events::corporation_dissolved(env, corp_id);
    }
    storage::save_corporation(env, &corp);

    transfer::dispatch(env, &payouts)
}

pub fn get_member(env: &Env, corp_id: u64, address: Address) -> Result<Member, ContractError> {
    storage::get_member(env, corp_id, &address).ok_or(ContractError::NotFound)
}

pub fn get_invite(env: &Env, corp_id: u64, invitee: Address) -> Result<Invite, ContractError> {
    storage::get_invite(env, corp_id, &invitee).ok_or(ContractError::NotFound)
}

/// Members in join order, starting at roster position `start`
pub fn list_members(env: &Env, corp_id: u64, start: u32, limit: u32) -> Result<Vec<Member>, ContractError> {
    storage::get_corporation(env, corp_id)?;

    let roster = storage::get_member_index(env, corp_id);
    let end = start.saturating_add(clamp_page_limit(limit)).min(roster.len());

    let mut page = Vec::new(env);
    for i in start..end {
        if let Some(address) = roster.get(i) {
            if let Some(member) = storage::get_member(env, corp_id, &address) {
                page.push_back(member);
            }
        }
    }
    Ok(page)
}
