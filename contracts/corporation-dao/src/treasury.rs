//! Per-corporation treasury balances and the contract-wide liability totals.
//!
//! Every change to a treasury goes through `credit`/`debit` so the
//! `Liabilities.treasuries` total always matches the sum of all balances.

use authorization::{authorize, Operation};
use shared::{bps_of, safe_add, safe_sub, validate_not_paused, validate_positive_amount, ContractError};
use soroban_sdk::{Address, Env};

use crate::types::{Config, Corporation, CorporationStatus};
use crate::{events, storage, transfer};

pub fn donate(env: &Env, donor: Address, corp_id: u64, amount: i128) -> Result<(), ContractError> {
    donor.require_auth();
    storage::get_config(env)?;
    validate_not_paused(storage::is_paused(env))?;
    authorize(Operation::Donate, None)?;
    validate_positive_amount(amount)?;

    let mut corp = storage::get_corporation(env, corp_id)?;
    if corp.status != CorporationStatus::Active {
        return Err(ContractError::InvalidState);
    }

    credit(env, &mut corp, amount)?;
    storage::save_corporation(env, &corp);
    events::donation_received(env, corp_id, &donor, amount);

    transfer::collect(env, &donor, amount)
}

pub fn treasury_balance(env: &Env, corp_id: u64) -> Result<i128, ContractError> {
    Ok(storage::get_corporation(env, corp_id)?.treasury_balance)
}

pub fn credit(env: &Env, corp: &mut Corporation, amount: i128) -> Result<(), ContractError> {
    let mut liabilities = storage::get_liabilities(env);
    corp.treasury_balance = safe_add(corp.treasury_balance, amount)?;
    liabilities.treasuries = safe_add(liabilities.treasuries, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(())
}

pub fn debit(env: &Env, corp: &mut Corporation, amount: i128) -> Result<(), ContractError> {
    let mut liabilities = storage::get_liabilities(env);
    corp.treasury_balance = safe_sub(corp.treasury_balance, amount)?;
    liabilities.treasuries = safe_sub(liabilities.treasuries, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(())
}

/// Largest spend allowed right now
pub fn spend_cap(corp: &Corporation, config: &Config) -> Result<i128, ContractError> {
    bps_of(corp.treasury_balance, config.spend_cap_bps)
}

pub fn check_spend(corp: &Corporation, config: &Config, amount: i128) -> Result<(), ContractError> {
    validate_positive_amount(amount)?;
    if amount > spend_cap(corp, config)? {
        return Err(ContractError::InsufficientFunds);
    }
    Ok(())
}

// ── Escrow ───────────────────────────────────────────────────────────────────

pub fn escrow_deposit(env: &Env, amount: i128) -> Result<(), ContractError> {
    let mut liabilities = storage::get_liabilities(env);
    liabilities.escrow = safe_add(liabilities.escrow, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(())
}

pub fn release_escrow(env: &Env, amount: i128) -> Result<(), ContractError> {
    let mut liabilities = storage::get_liabilities(env);
    liabilities.escrow = safe_sub(liabilities.escrow, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(())
}

// ── Dissolution ──────────────────────────────────────────────────────────────

/// Empty the treasury into outstanding claims
pub fn convert_to_claims(env: &Env, corp: &mut Corporation) -> Result<i128, ContractError> {
    let amount = corp.treasury_balance;
    debit(env, corp, amount)?;

    let mut liabilities = storage::get_liabilities(env);
    liabilities.claims = safe_add(liabilities.claims, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(amount)
}

pub fn settle_claim(env: &Env, amount: i128) -> Result<(), ContractError> {
    let mut liabilities = storage::get_liabilities(env);
    liabilities.claims = safe_sub(liabilities.claims, amount)?;
    storage::set_liabilities(env, &liabilities);
    Ok(())
}

/// Sum of everything the contract owes
pub fn total_liabilities(env: &Env) -> Result<i128, ContractError> {
    let liabilities = storage::get_liabilities(env);
    safe_add(safe_add(liabilities.treasuries, liabilities.escrow)?, liabilities.claims)
}
