//! Vote recording and the pass/fail rules.
//!
//! Thresholds are always measured against the member count frozen at
//! proposal creation, never the live count.

use authorization::{authorize, Operation};
use shared::constants::BPS_DENOMINATOR;
use shared::{validate_not_paused, ContractError};
use soroban_sdk::{Address, Env};

use crate::execution::target_departed;
use crate::membership::role_of;
use crate::types::{CorporationStatus, Proposal, ProposalKind, ProposalStatus, Vote, VoteChoice, VoteStatus};
use crate::{events, storage};

/// `(yes + no) * 10000 >= snapshot * quorum_bps`; an empty snapshot never
/// reaches quorum
pub fn quorum_reached(yes: u32, no: u32, snapshot: u32, quorum_bps: u32) -> bool {
    if snapshot == 0 {
        return false;
    }
    let total = yes as u64 + no as u64;
    total * BPS_DENOMINATOR as u64 >= snapshot as u64 * quorum_bps as u64
}

pub fn majority(yes: u32, no: u32) -> bool {
    yes > no
}

/// Yes votes alone against the snapshot
pub fn supermajority(yes: u32, snapshot: u32, threshold_bps: u32) -> bool {
    if snapshot == 0 {
        return false;
    }
    yes as u64 * BPS_DENOMINATOR as u64 >= snapshot as u64 * threshold_bps as u64
}

pub fn passes(proposal: &Proposal) -> bool {
    match proposal.kind {
        ProposalKind::Dissolution => supermajority(
            proposal.yes_votes,
            proposal.member_count_snapshot,
            proposal.dissolution_bps,
        ),
        _ => {
            quorum_reached(
                proposal.yes_votes,
                proposal.no_votes,
                proposal.member_count_snapshot,
                proposal.quorum_bps,
            ) && majority(proposal.yes_votes, proposal.no_votes)
        }
    }
}

pub fn cast_vote(env: &Env, voter: Address, proposal_id: u64, choice: VoteChoice) -> Result<(), ContractError> {
    voter.require_auth();
    validate_not_paused(storage::is_paused(env))?;

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    if proposal.status != ProposalStatus::Active {
        return Err(ContractError::InvalidState);
    }
    let now = env.ledger().timestamp();
    if now >= proposal.voting_deadline {
        return Err(ContractError::Expired);
    }

    authorize(Operation::Vote, role_of(env, proposal.corp_id, &voter))?;
    let member = storage::get_member(env, proposal.corp_id, &voter).ok_or(ContractError::Unauthorized)?;
    // flash-join protection
    if member.joined_at >= proposal.created_at {
        return Err(ContractError::NotEligible);
    }
    if storage::get_vote(env, proposal_id, &voter).is_some() {
        return Err(ContractError::AlreadyVoted);
    }

    match choice {
        VoteChoice::Yes => {
            proposal.yes_votes = proposal.yes_votes.checked_add(1).ok_or(ContractError::Overflow)?;
        }
        VoteChoice::No => {
            proposal.no_votes = proposal.no_votes.checked_add(1).ok_or(ContractError::Overflow)?;
        }
    }

    storage::save_vote(env, proposal_id, &voter, &Vote { choice, cast_at: now });
    storage::save_proposal(env, &proposal);
    events::vote_cast(env, proposal_id, &voter, choice);
    Ok(())
}

pub fn get_vote(env: &Env, proposal_id: u64, voter: Address) -> Result<Vote, ContractError> {
    storage::get_vote(env, proposal_id, &voter).ok_or(ContractError::NotFound)
}

pub fn vote_status(env: &Env, proposal_id: u64) -> Result<VoteStatus, ContractError> {
    let proposal = storage::get_proposal(env, proposal_id)?;
    let voting_closed = env.ledger().timestamp() >= proposal.voting_deadline;
    let corp_active = storage::get_corporation(env, proposal.corp_id)?.status == CorporationStatus::Active;

    // mirrors what execution would settle the proposal into
    let outcome = match proposal.status {
        ProposalStatus::Active if !voting_closed => ProposalStatus::Active,
        ProposalStatus::Active if !corp_active => ProposalStatus::Expired,
        ProposalStatus::Active if passes(&proposal) && target_departed(env, &proposal) => ProposalStatus::Expired,
        ProposalStatus::Active if passes(&proposal) => ProposalStatus::Passed,
        ProposalStatus::Active => ProposalStatus::Failed,
        settled => settled,
    };

    Ok(VoteStatus {
        proposal_id,
        yes_votes: proposal.yes_votes,
        no_votes: proposal.no_votes,
        member_count_snapshot: proposal.member_count_snapshot,
        quorum_reached: quorum_reached(
            proposal.yes_votes,
            proposal.no_votes,
            proposal.member_count_snapshot,
            proposal.quorum_bps,
        ),
        voting_closed,
        outcome,
    })
}
