use authorization::{authorize, Operation, Role};
use shared::{clamp_page_limit, validate_exact_amount, validate_not_paused, ContractError};
use soroban_sdk::{Address, Env, String, Vec};

use crate::membership::{admit, role_of};
use crate::types::{Corporation, CorporationStatus, JoinPolicy};
use crate::{events, storage, transfer, treasury};

/// Create a corporation with `founder` as its first member.
///
/// The fee must match the configured creation fee exactly and is credited
/// to the new treasury.
pub fn create_corporation(
    env: &Env,
    founder: Address,
    name: String,
    description: String,
    join_policy: JoinPolicy,
    fee: i128,
) -> Result<u64, ContractError> {
    founder.require_auth();
    let config = storage::get_config(env)?;
    validate_not_paused(storage::is_paused(env))?;
    authorize(Operation::CreateCorporation, None)?;

    if name.len() == 0 {
        return Err(ContractError::InvalidInput);
    }
    validate_exact_amount(config.creation_fee, fee)?;

    let id = storage::next_corporation_id(env)?;
    let mut corp = Corporation {
        id,
        name,
        description,
        founder: founder.clone(),
        join_policy,
        status: CorporationStatus::Active,
        quorum_bps: config.default_quorum_bps,
        voting_period: config.default_voting_period,
        max_members: config.default_max_members,
        member_count: 0,
        treasury_balance: 0,
        unclaimed_shares: 0,
        created_at: env.ledger().timestamp(),
    };

    admit(env, &mut corp, &founder, Role::Founder)?;
    treasury::credit(env, &mut corp, fee)?;
    storage::save_corporation(env, &corp);
    events::corporation_created(env, id, &founder, fee);

    transfer::collect(env, &founder, fee)?;
    Ok(id)
}

/// Founder-only edit that skips governance
pub fn update_description(
    env: &Env,
    founder: Address,
    corp_id: u64,
    description: String,
) -> Result<(), ContractError> {
    founder.require_auth();
    validate_not_paused(storage::is_paused(env))?;

    let mut corp = storage::get_corporation(env, corp_id)?;
    if corp.status != CorporationStatus::Active {
        return Err(ContractError::InvalidState);
    }
    authorize(Operation::UpdateDescription, role_of(env, corp_id, &founder))?;

    corp.description = description;
    storage::save_corporation(env, &corp);
    events::description_updated(env, corp_id);
    Ok(())
}

pub fn get_corporation(env: &Env, corp_id: u64) -> Result<Corporation, ContractError> {
    storage::get_corporation(env, corp_id)
}

/// Corporations in id order, strictly after `start_after`
pub fn list_corporations(env: &Env, start_after: Option<u64>, limit: u32) -> Vec<Corporation> {
    let count = storage::corporation_count(env);
    let mut page = Vec::new(env);
    let mut id = start_after.unwrap_or(0).saturating_add(1);

    while id <= count && page.len() < clamp_page_limit(limit) {
        if let Ok(corp) = storage::get_corporation(env, id) {
            page.push_back(corp);
        }
        id += 1;
    }
    page
}
