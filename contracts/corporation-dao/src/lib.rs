//! Corporation DAO
//!
//! Guild governance for a game economy: corporations with a founder,
//! officers and members, a custodied treasury, member proposals decided
//! against a frozen member-count snapshot, permissionless execution and
//! pull-based payouts when a corporation dissolves.
//!
//! Every value movement goes through the token contract configured at
//! `initialize` and happens as the last step of a call.

#![no_std]

use shared::ContractError;
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod claims;
mod events;
mod execution;
mod membership;
mod proposal;
mod registry;
mod storage;
mod tally;
mod transfer;
mod treasury;
pub mod types;

#[cfg(test)]
mod tests;

pub use transfer::TransferInstruction;
use types::{
    Config, Corporation, DissolutionClaim, Invite, JoinPolicy, Liabilities, Member, Proposal,
    ProposalKind, ProposalStatus, Vote, VoteChoice, VoteStatus,
};

#[contract]
pub struct CorporationDao;

#[contractimpl]
impl CorporationDao {
    // ── Administration ───────────────────────────────────────────────────────

    pub fn initialize(env: Env, admin: Address, token: Address, config: Config) -> Result<(), ContractError> {
        admin::initialize(&env, admin, token, config)
    }

    pub fn update_config(env: Env, admin: Address, config: Config) -> Result<(), ContractError> {
        admin::update_config(&env, admin, config)
    }

    pub fn propose_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        Ok(authorization::propose_admin(&env, &admin, &new_admin)?)
    }

    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        Ok(authorization::accept_admin(&env, &new_admin)?)
    }

    pub fn cancel_admin_transfer(env: Env, admin: Address) -> Result<(), ContractError> {
        Ok(authorization::cancel_admin_transfer(&env, &admin)?)
    }

    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), ContractError> {
        admin::set_paused(&env, admin, paused)
    }

    pub fn withdraw_surplus(env: Env, admin: Address, amount: i128) -> Result<(), ContractError> {
        admin::withdraw_surplus(&env, admin, amount)
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        storage::get_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        authorization::get_admin(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_pending_admin(env: Env) -> Option<Address> {
        authorization::get_pending_admin(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    /// Token balance held by the contract, read from the token contract
    pub fn custodied_balance(env: Env) -> Result<i128, ContractError> {
        transfer::custodied_balance(&env)
    }

    pub fn get_liabilities(env: Env) -> Liabilities {
        storage::get_liabilities(&env)
    }

    pub fn surplus(env: Env) -> Result<i128, ContractError> {
        admin::surplus(&env)
    }

    // ── Registry ─────────────────────────────────────────────────────────────

    pub fn create_corporation(
        env: Env,
        founder: Address,
        name: String,
        description: String,
        join_policy: JoinPolicy,
        fee: i128,
    ) -> Result<u64, ContractError> {
        registry::create_corporation(&env, founder, name, description, join_policy, fee)
    }

    pub fn update_description(
        env: Env,
        founder: Address,
        corp_id: u64,
        description: String,
    ) -> Result<(), ContractError> {
        registry::update_description(&env, founder, corp_id, description)
    }

    pub fn get_corporation(env: Env, corp_id: u64) -> Result<Corporation, ContractError> {
        registry::get_corporation(&env, corp_id)
    }

    pub fn list_corporations(env: Env, start_after: Option<u64>, limit: u32) -> Vec<Corporation> {
        registry::list_corporations(&env, start_after, limit)
    }

    // ── Membership ───────────────────────────────────────────────────────────

    pub fn join(env: Env, member: Address, corp_id: u64) -> Result<(), ContractError> {
        membership::join(&env, member, corp_id)
    }

    /// Returns the invite's expiry timestamp
    pub fn invite(env: Env, inviter: Address, corp_id: u64, invitee: Address) -> Result<u64, ContractError> {
        membership::invite(&env, inviter, corp_id, invitee)
    }

    pub fn accept_invite(env: Env, invitee: Address, corp_id: u64) -> Result<(), ContractError> {
        membership::accept_invite(&env, invitee, corp_id)
    }

    pub fn leave(env: Env, member: Address, corp_id: u64) -> Result<(), ContractError> {
        membership::leave(&env, member, corp_id)
    }

    pub fn get_member(env: Env, corp_id: u64, address: Address) -> Result<Member, ContractError> {
        membership::get_member(&env, corp_id, address)
    }

    pub fn list_members(env: Env, corp_id: u64, start: u32, limit: u32) -> Result<Vec<Member>, ContractError> {
        membership::list_members(&env, corp_id, start, limit)
    }

    pub fn get_invite(env: Env, corp_id: u64, invitee: Address) -> Result<Invite, ContractError> {
        membership::get_invite(&env, corp_id, invitee)
    }

    // ── Treasury ─────────────────────────────────────────────────────────────

    pub fn donate(env: Env, donor: Address, corp_id: u64, amount: i128) -> Result<(), ContractError> {
        treasury::donate(&env, donor, corp_id, amount)
    }

    pub fn treasury_balance(env: Env, corp_id: u64) -> Result<i128, ContractError> {
        treasury::treasury_balance(&env, corp_id)
    }

    // ── Governance ───────────────────────────────────────────────────────────

    pub fn create_proposal(
        env: Env,
        proposer: Address,
        corp_id: u64,
        kind: ProposalKind,
        deposit: i128,
    ) -> Result<u64, ContractError> {
        proposal::create_proposal(&env, proposer, corp_id, kind, deposit)
    }

    pub fn vote(env: Env, voter: Address, proposal_id: u64, choice: VoteChoice) -> Result<(), ContractError> {
        tally::cast_vote(&env, voter, proposal_id, choice)
    }

    /// Settle a proposal after its deadline; callable by anyone
    pub fn execute_proposal(env: Env, executor: Address, proposal_id: u64) -> Result<ProposalStatus, ContractError> {
        execution::execute_proposal(&env, executor, proposal_id)
    }

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, ContractError> {
        proposal::get_proposal(&env, proposal_id)
    }

    pub fn list_proposals(
        env: Env,
        corp_id: u64,
        start_after: Option<u64>,
        limit: u32,
    ) -> Result<Vec<Proposal>, ContractError> {
        proposal::list_proposals(&env, corp_id, start_after, limit)
    }

    pub fn get_vote(env: Env, proposal_id: u64, voter: Address) -> Result<Vote, ContractError> {
        tally::get_vote(&env, proposal_id, voter)
    }

    pub fn vote_status(env: Env, proposal_id: u64) -> Result<VoteStatus, ContractError> {
        tally::vote_status(&env, proposal_id)
    }

    // ── Dissolution ──────────────────────────────────────────────────────────

    pub fn claim_dissolution_share(env: Env, claimant: Address, corp_id: u64) -> Result<i128, ContractError> {
        claims::claim_dissolution_share(&env, claimant, corp_id)
    }

    pub fn get_dissolution_claim(env: Env, corp_id: u64, member: Address) -> Result<DissolutionClaim, ContractError> {
        claims::get_claim(&env, corp_id, member)
    }
}
