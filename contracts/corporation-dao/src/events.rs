//! Contract events. Every state change publishes exactly one of these,
//! topics are `(name, id)` and the payload carries the details.

use authorization::Role;
use soroban_sdk::{Address, Bytes, Env, Symbol};

use crate::types::VoteChoice;

pub fn initialized(env: &Env, admin: &Address, token: &Address) {
    env.events().publish(
        (Symbol::new(env, "initialized"), admin.clone()),
        token.clone(),
    );
}

pub fn config_updated(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "config_updated"), admin.clone()), ());
}

pub fn paused_changed(env: &Env, admin: &Address, paused: bool) {
    env.events()
        .publish((Symbol::new(env, "paused_changed"), admin.clone()), paused);
}

pub fn surplus_withdrawn(env: &Env, admin: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "surplus_withdrawn"), admin.clone()),
        amount,
    );
}

// ── Registry & membership ────────────────────────────────────────────────────

pub fn corporation_created(env: &Env, corp_id: u64, founder: &Address, fee: i128) {
    env.events().publish(
        (Symbol::new(env, "corporation_created"), corp_id),
        (founder.clone(), fee),
    );
}

pub fn description_updated(env: &Env, corp_id: u64) {
    env.events()
        .publish((Symbol::new(env, "description_updated"), corp_id), ());
}

pub fn member_joined(env: &Env, corp_id: u64, member: &Address, role: Role) {
    env.events().publish(
        (Symbol::new(env, "member_joined"), corp_id),
        (member.clone(), role),
    );
}

pub fn member_invited(env: &Env, corp_id: u64, invitee: &Address, inviter: &Address, expires_at: u64) {
    env.events().publish(
        (Symbol::new(env, "member_invited"), corp_id),
        (invitee.clone(), inviter.clone(), expires_at),
    );
}

pub fn member_left(env: &Env, corp_id: u64, member: &Address) {
    env.events()
        .publish((Symbol::new(env, "member_left"), corp_id), member.clone());
}

pub fn corporation_dissolved(env: &Env, corp_id: u64) {
    env.events()
        .publish((Symbol::new(env, "corporation_dissolved"), corp_id), ());
}

// ── Treasury ─────────────────────────────────────────────────────────────────

pub fn donation_received(env: &Env, corp_id: u64, donor: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "donation_received"), corp_id),
        (donor.clone(), amount),
    );
}

pub fn transfer_dispatched(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((Symbol::new(env, "transfer"), to.clone()), amount);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn proposal_created(env: &Env, proposal_id: u64, corp_id: u64, proposer: &Address, deadline: u64) {
    env.events().publish(
        (Symbol::new(env, "proposal_created"), proposal_id),
        (corp_id, proposer.clone(), deadline),
    );
}

pub fn vote_cast(env: &Env, proposal_id: u64, voter: &Address, choice: VoteChoice) {
    env.events().publish(
        (Symbol::new(env, "vote_cast"), proposal_id),
        (voter.clone(), choice),
    );
}

pub fn proposal_executed(env: &Env, proposal_id: u64, executor: &Address) {
    env.events().publish(
        (Symbol::new(env, "proposal_executed"), proposal_id),
        executor.clone(),
    );
}

pub fn proposal_failed(env: &Env, proposal_id: u64, forfeited: i128) {
    env.events()
        .publish((Symbol::new(env, "proposal_failed"), proposal_id), forfeited);
}

pub fn proposal_expired(env: &Env, proposal_id: u64) {
    env.events()
        .publish((Symbol::new(env, "proposal_expired"), proposal_id), ());
}

// ── Effects ──────────────────────────────────────────────────────────────────

pub fn treasury_spent(env: &Env, corp_id: u64, recipient: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "treasury_spent"), corp_id),
        (recipient.clone(), amount),
    );
}

pub fn settings_changed(env: &Env, corp_id: u64) {
    env.events()
        .publish((Symbol::new(env, "settings_changed"), corp_id), ());
}

pub fn member_kicked(env: &Env, corp_id: u64, member: &Address) {
    env.events()
        .publish((Symbol::new(env, "member_kicked"), corp_id), member.clone());
}

pub fn member_promoted(env: &Env, corp_id: u64, member: &Address, role: Role) {
    env.events().publish(
        (Symbol::new(env, "member_promoted"), corp_id),
        (member.clone(), role),
    );
}

pub fn dissolution_started(env: &Env, corp_id: u64, share: i128, claims: u32) {
    env.events().publish(
        (Symbol::new(env, "dissolution_started"), corp_id),
        (share, claims),
    );
}

/// Published verbatim for whoever executes custom actions off-contract
pub fn custom_action(env: &Env, corp_id: u64, proposal_id: u64, target: &Address, instruction: &Bytes) {
    env.events().publish(
        (Symbol::new(env, "custom_action"), corp_id, proposal_id),
        (target.clone(), instruction.clone()),
    );
}

pub fn share_claimed(env: &Env, corp_id: u64, member: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "share_claimed"), corp_id),
        (member.clone(), amount),
    );
}
