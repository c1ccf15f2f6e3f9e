//! Permissionless proposal execution.
//!
//! Once the voting deadline has passed anyone may settle a proposal. The
//! effect of a passed proposal is re-validated against current state before
//! anything is written. A proposal whose target has left the corporation
//! expires with a refund; any other failing check aborts the call and the
//! proposal stays active.

use authorization::{authorize, Operation, Role};
use shared::{safe_add, validate_not_paused, ContractError};
use soroban_sdk::{Address, Env, Vec};

use crate::membership::{expel, role_of};
use crate::proposal::validate_kind;
use crate::transfer::TransferInstruction;
use crate::types::{
    Corporation, CorporationStatus, DissolutionClaim, PolicyChange, Proposal, ProposalKind, ProposalStatus,
};
use crate::{events, storage, tally, transfer, treasury};

pub fn execute_proposal(env: &Env, executor: Address, proposal_id: u64) -> Result<ProposalStatus, ContractError> {
    executor.require_auth();
    let config = storage::get_config(env)?;
    validate_not_paused(storage::is_paused(env))?;
    authorize(Operation::ExecuteProposal, None)?;

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    if proposal.status != ProposalStatus::Active {
        return Err(ContractError::InvalidState);
    }
    if env.ledger().timestamp() < proposal.voting_deadline {
        return Err(ContractError::InvalidState);
    }

    let mut corp = storage::get_corporation(env, proposal.corp_id)?;
    let mut payouts = Vec::new(env);

    let passed = tally::passes(&proposal);

    if corp.status != CorporationStatus::Active || (passed && target_departed(env, &proposal)) {
        treasury::release_escrow(env, proposal.deposit)?;
        transfer::push(&mut payouts, &proposal.proposer, proposal.deposit)?;
        proposal.status = ProposalStatus::Expired;
        events::proposal_expired(env, proposal_id);
    } else if passed {
        validate_kind(env, &corp, &config, &proposal.kind)?;
        if let ProposalKind::TreasurySpend(spend) = &proposal.kind {
            treasury::check_spend(&corp, &config, spend.amount)?;
        }

        treasury::release_escrow(env, proposal.deposit)?;
        transfer::push(&mut payouts, &proposal.proposer, proposal.deposit)?;
        apply_effect(env, &mut corp, &proposal, &mut payouts)?;
        proposal.status = ProposalStatus::Executed;
        events::proposal_executed(env, proposal_id, &executor);
    } else {
        treasury::release_escrow(env, proposal.deposit)?;
        treasury::credit(env, &mut corp, proposal.deposit)?;
        proposal.status = ProposalStatus::Failed;
        events::proposal_failed(env, proposal_id, proposal.deposit);
    }

    storage::save_corporation(env, &corp);
    storage::save_proposal(env, &proposal);

    transfer::dispatch(env, &payouts)?;
    Ok(proposal.status)
}

/// A kick or promotion whose target is no longer a member can never apply
pub fn target_departed(env: &Env, proposal: &Proposal) -> bool {
    let target = match &proposal.kind {
        ProposalKind::KickMember(target) => target,
        ProposalKind::PromoteMember(promotion) => &promotion.member,
        _ => return false,
    };
    role_of(env, proposal.corp_id, target).is_none()
}

/// Apply an already validated effect
fn apply_effect(
    env: &Env,
    corp: &mut Corporation,
    proposal: &Proposal,
    payouts: &mut Vec<TransferInstruction>,
) -> Result<(), ContractError> {
    match &proposal.kind {
        ProposalKind::TreasurySpend(spend) => {
            treasury::debit(env, corp, spend.amount)?;
            transfer::push(payouts, &spend.recipient, spend.amount)?;
            events::treasury_spent(env, corp.id, &spend.recipient, spend.amount);
        }
        ProposalKind::ChangeSettings(change) => {
            if let Some(name) = &change.name {
                corp.name = name.clone();
            }
            if let Some(description) = &change.description {
                corp.description = description.clone();
            }
            if let PolicyChange::Set(join_policy) = change.join_policy {
                corp.join_policy = join_policy;
            }
            if let Some(quorum_bps) = change.quorum_bps {
                corp.quorum_bps = quorum_bps;
            }
            if let Some(voting_period) = change.voting_period {
                corp.voting_period = voting_period;
            }
            if let Some(max_members) = change.max_members {
                corp.max_members = max_members;
            }
            events::settings_changed(env, corp.id);
        }
        ProposalKind::KickMember(target) => {
            expel(env, corp, target)?;
            events::member_kicked(env, corp.id, target);
        }
        ProposalKind::PromoteMember(promotion) => {
            let mut member = storage::get_member(env, corp.id, &promotion.member).ok_or(ContractError::NotFound)?;
            member.role = promotion.new_role;
            storage::save_member(env, &member);
            events::member_promoted(env, corp.id, &promotion.member, promotion.new_role);
        }
        ProposalKind::Dissolution => dissolve(env, corp)?,
        ProposalKind::Custom(action) => {
            events::custom_action(env, corp.id, proposal.id, &action.target, &action.instruction);
        }
    }
    Ok(())
}

/// Split the treasury into one claim per current member.
///
/// Members still present share the treasury equally and the founder also
/// takes the remainder, so the claims sum to the treasury exactly. Zero
/// shares get no claim; with nothing left to pay the corporation is
/// dissolved at once.
fn dissolve(env: &Env, corp: &mut Corporation) -> Result<(), ContractError> {
    let roster = storage::get_member_index(env, corp.id);
    let divisor = roster.len().max(1) as i128;

    let total = treasury::convert_to_claims(env, corp)?;
    let share = total / divisor;
    let remainder = total % divisor;

    let mut assigned: i128 = 0;
    let mut claims: u32 = 0;
    for address in roster.iter() {
        let is_founder = storage::get_member(env, corp.id, &address).map_or(false, |m| m.role == Role::Founder);
        let amount = if is_founder { share + remainder } else { share };
        if amount == 0 {
            continue;
        }
        assigned = safe_add(assigned, amount)?;
        claims += 1;
        storage::save_claim(
            env,
            corp.id,
            &address,
            &DissolutionClaim {
                amount,
                claimed: false,
            },
        );
    }
    if assigned != total {
        return Err(ContractError::InvalidState);
    }

    corp.unclaimed_shares = claims;
    events::dissolution_started(env, corp.id, share, claims);
    if claims == 0 {
        corp.status = CorporationStatus::Dissolved;
        events::corporation_dissolved(env, corp.id);
    } else {
        corp.status = CorporationStatus::Dissolving;
    }
    Ok(())
}
