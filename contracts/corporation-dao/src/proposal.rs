use authorization::{authorize, Operation, Role};
use shared::{
    clamp_page_limit, validate_exact_amount, validate_not_paused, validate_positive_amount,
    validate_quorum_bps, validate_voting_period, ContractError,
};
use soroban_sdk::{Address, Env, Vec};

use crate::membership::role_of;
use crate::types::{Config, Corporation, CorporationStatus, Proposal, ProposalKind, ProposalStatus, SettingsChange};
use crate::{events, storage, transfer, treasury};

/// Open a proposal; the exact deposit is escrowed until execution.
///
/// Thresholds and the member count are frozen here and never re-read.
pub fn create_proposal(
    env: &Env,
    proposer: Address,
    corp_id: u64,
    kind: ProposalKind,
    deposit: i128,
) -> Result<u64, ContractError> {
    proposer.require_auth();
    let config = storage::get_config(env)?;
    validate_not_paused(storage::is_paused(env))?;

    let corp = storage::get_corporation(env, corp_id)?;
    if corp.status != CorporationStatus::Active {
        return Err(ContractError::InvalidState);
    }
    authorize(Operation::CreateProposal, role_of(env, corp_id, &proposer))?;
    validate_exact_amount(config.proposal_deposit, deposit)?;
    validate_kind(env, &corp, &config, &kind)?;

    let now = env.ledger().timestamp();
    let voting_deadline = now
        .checked_add(corp.voting_period)
        .ok_or(ContractError::Overflow)?;

    let id = storage::next_proposal_id(env)?;
    let proposal = Proposal {
        id,
        corp_id,
        proposer: proposer.clone(),
        kind,
        deposit,
        created_at: now,
        voting_deadline,
        member_count_snapshot: corp.member_count,
        quorum_bps: corp.quorum_bps,
        dissolution_bps: config.dissolution_bps,
        yes_votes: 0,
        no_votes: 0,
        status: ProposalStatus::Active,
    };
    storage::add_proposal(env, &proposal);
    treasury::escrow_deposit(env, deposit)?;
    events::proposal_created(env, id, corp_id, &proposer, voting_deadline);

    transfer::collect(env, &proposer, deposit)?;
    Ok(id)
}

/// Payload checks shared by creation and execution. Execution runs them
/// again against the state at that time.
pub fn validate_kind(env: &Env, corp: &Corporation, config: &Config, kind: &ProposalKind) -> Result<(), ContractError> {
    match kind {
        ProposalKind::TreasurySpend(spend) => validate_positive_amount(spend.amount),
        ProposalKind::ChangeSettings(change) => validate_settings(corp, config, change),
        ProposalKind::KickMember(target) => require_non_founder_member(env, corp.id, target),
        ProposalKind::PromoteMember(promotion) => {
            if promotion.new_role == Role::Founder {
                return Err(ContractError::DuplicateFounder);
            }
            require_non_founder_member(env, corp.id, &promotion.member)
        }
        ProposalKind::Dissolution | ProposalKind::Custom(_) => Ok(()),
    }
}

/// Every supplied field must be in range; nothing is applied here
pub fn validate_settings(corp: &Corporation, config: &Config, change: &SettingsChange) -> Result<(), ContractError> {
    if let Some(name) = &change.name {
        if name.len() == 0 {
            return Err(ContractError::OutOfBounds);
        }
    }
    if let Some(quorum_bps) = change.quorum_bps {
        validate_quorum_bps(quorum_bps)?;
    }
    if let Some(voting_period) = change.voting_period {
        validate_voting_period(voting_period, config.min_voting_period, config.max_voting_period)?;
    }
    if let Some(max_members) = change.max_members {
        if max_members == 0 || max_members < corp.member_count {
            return Err(ContractError::OutOfBounds);
        }
    }
    Ok(())
}

fn require_non_founder_member(env: &Env, corp_id: u64, target: &Address) -> Result<(), ContractError> {
    match role_of(env, corp_id, target) {
        None => Err(ContractError::NotFound),
        Some(Role::Founder) => Err(ContractError::InvalidInput),
        Some(_) => Ok(()),
    }
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, ContractError> {
    storage::get_proposal(env, proposal_id)
}

/// Proposals of one corporation in creation order, strictly after
/// `start_after`
pub fn list_proposals(
    env: &Env,
    corp_id: u64,
    start_after: Option<u64>,
    limit: u32,
) -> Result<Vec<Proposal>, ContractError> {
    storage::get_corporation(env, corp_id)?;

    let limit = clamp_page_limit(limit);
    let mut page = Vec::new(env);
    for id in storage::get_proposal_index(env, corp_id).iter() {
        if page.len() >= limit {
            break;
        }
        if start_after.map_or(false, |after| id <= after) {
            continue;
        }
        page.push_back(storage::get_proposal(env, id)?);
    }
    Ok(page)
}
