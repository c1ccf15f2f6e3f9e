use authorization::{authorize, Operation};
use shared::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{CorporationStatus, DissolutionClaim};
use crate::{events, storage, transfer, treasury};

/// Pay out a dissolution share. Allowed while paused.
///
/// The last claim moves the corporation to `Dissolved`.
pub fn claim_dissolution_share(env: &Env, claimant: Address, corp_id: u64) -> Result<i128, ContractError> {
    claimant.require_auth();
    authorize(Operation::ClaimDissolutionShare, None)?;

    let mut corp = storage::get_corporation(env, corp_id)?;
    let mut claim = storage::get_claim(env, corp_id, &claimant).ok_or(ContractError::NotFound)?;
    if claim.claimed {
        return Err(ContractError::AlreadyClaimed);
    }

    claim.claimed = true;
    storage::save_claim(env, corp_id, &claimant, &claim);
    treasury::settle_claim(env, claim.amount)?;

    corp.unclaimed_shares = corp
        .unclaimed_shares
        .checked_sub(1)
        .ok_or(ContractError::InvalidState)?;
    if corp.unclaimed_shares == 0 {
        corp.status = CorporationStatus::Dissolved;
        events::corporation_dissolved(env, corp_id);
    }
    storage::save_corporation(env, &corp);
    events::share_claimed(env, corp_id, &claimant, claim.amount);

    let mut payouts = Vec::new(env);
    transfer::push(&mut payouts, &claimant, claim.amount)?;
    transfer::dispatch(env, &payouts)?;
    Ok(claim.amount)
}

pub fn get_claim(env: &Env, corp_id: u64, member: Address) -> Result<DissolutionClaim, ContractError> {
    storage::get_claim(env, corp_id, &member).ok_or(ContractError::NotFound)
}
