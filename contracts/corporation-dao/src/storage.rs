use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use shared::ContractError;
use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Config, Corporation, DissolutionClaim, Invite, Liabilities, Member, Proposal, Vote};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance
    Config,
    Token,
    Paused,
    CorpCount,
    ProposalCount,
    Liabilities,
    // Persistent
    Corporation(u64),
    Member(u64, Address),
    CorpMembers(u64),
    Invite(u64, Address),
    Proposal(u64),
    CorpProposals(u64),
    Vote(u64, Address),
    DissolutionClaim(u64, Address),
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump(env, key);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Config & globals ─────────────────────────────────────────────────────────

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Paused)
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_liabilities(env: &Env) -> Liabilities {
    env.storage()
        .instance()
        .get(&DataKey::Liabilities)
        .unwrap_or_default()
}

pub fn set_liabilities(env: &Env, liabilities: &Liabilities) {
    env.storage()
        .instance()
        .set(&DataKey::Liabilities, liabilities);
    bump_instance(env);
}

// ── Counters ─────────────────────────────────────────────────────────────────

pub fn corporation_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CorpCount)
        .unwrap_or(0u64)
}

pub fn next_corporation_id(env: &Env) -> Result<u64, ContractError> {
    let id = corporation_count(env)
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::CorpCount, &id);
    Ok(id)
}

pub fn next_proposal_id(env: &Env) -> Result<u64, ContractError> {
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0u64);
    let id = current.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    Ok(id)
}

// ── Corporations ─────────────────────────────────────────────────────────────

pub fn get_corporation(env: &Env, corp_id: u64) -> Result<Corporation, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Corporation(corp_id))
        .ok_or(ContractError::NotFound)
}

pub fn save_corporation(env: &Env, corp: &Corporation) {
    write(env, &DataKey::Corporation(corp.id), corp);
}

// ── Members ──────────────────────────────────────────────────────────────────

pub fn get_member(env: &Env, corp_id: u64, address: &Address) -> Option<Member> {
    env.storage()
        .persistent()
        .get(&DataKey::Member(corp_id, address.clone()))
}

/// Update an existing member record
pub fn save_member(env: &Env, member: &Member) {
    write(
        env,
        &DataKey::Member(member.corp_id, member.address.clone()),
        member,
    );
}

/// Store a new member and append it to the corporation's roster
pub fn add_member(env: &Env, member: &Member) {
    save_member(env, member);

    let mut roster = get_member_index(env, member.corp_id);
    roster.push_back(member.address.clone());
    write(env, &DataKey::CorpMembers(member.corp_id), &roster);
}

pub fn remove_member(env: &Env, corp_id: u64, address: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Member(corp_id, address.clone()));

    let mut roster = get_member_index(env, corp_id);
    if let Some(pos) = roster.first_index_of(address) {
        roster.remove(pos);
        write(env, &DataKey::CorpMembers(corp_id), &roster);
    }
}

/// Addresses of current members in join order
pub fn get_member_index(env: &Env, corp_id: u64) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::CorpMembers(corp_id))
        .unwrap_or(Vec::new(env))
}

// ── Invites ──────────────────────────────────────────────────────────────────

pub fn get_invite(env: &Env, corp_id: u64, invitee: &Address) -> Option<Invite> {
    env.storage()
        .persistent()
        .get(&DataKey::Invite(corp_id, invitee.clone()))
}

pub fn save_invite(env: &Env, invite: &Invite) {
    write(
        env,
        &DataKey::Invite(invite.corp_id, invite.invitee.clone()),
        invite,
    );
}

pub fn remove_invite(env: &Env, corp_id: u64, invitee: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Invite(corp_id, invitee.clone()));
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, ContractError> {
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(ContractError::NotFound)
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    write(env, &DataKey::Proposal(proposal.id), proposal);
}

/// Store a new proposal and append its id to the corporation's index
pub fn add_proposal(env: &Env, proposal: &Proposal) {
    save_proposal(env, proposal);

    let mut ids = get_proposal_index(env, proposal.corp_id);
    ids.push_back(proposal.id);
    write(env, &DataKey::CorpProposals(proposal.corp_id), &ids);
}

/// Proposal ids of a corporation in creation order
pub fn get_proposal_index(env: &Env, corp_id: u64) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::CorpProposals(corp_id))
        .unwrap_or(Vec::new(env))
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn get_vote(env: &Env, proposal_id: u64, voter: &Address) -> Option<Vote> {
    env.storage()
        .persistent()
        .get(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn save_vote(env: &Env, proposal_id: u64, voter: &Address, vote: &Vote) {
    write(env, &DataKey::Vote(proposal_id, voter.clone()), vote);
}

// ── Dissolution claims ───────────────────────────────────────────────────────

pub fn get_claim(env: &Env, corp_id: u64, member: &Address) -> Option<DissolutionClaim> {
    env.storage()
        .persistent()
        .get(&DataKey::DissolutionClaim(corp_id, member.clone()))
}

pub fn save_claim(env: &Env, corp_id: u64, member: &Address, claim: &DissolutionClaim) {
    write(env, &DataKey::DissolutionClaim(corp_id, member.clone()), claim);
}
