//! Contract-level administration: configuration, pause switch, admin
//! handover and withdrawal of value nobody is owed.

use authorization::{get_admin, initialize_admin, verify_admin};
use shared::{
    safe_sub, validate_bps, validate_non_negative_amount, validate_positive_amount,
    validate_quorum_bps, ContractError,
};
use soroban_sdk::{Address, Env, Vec};

use crate::types::{Config, Liabilities};
use crate::{events, storage, transfer, treasury};

pub fn initialize(env: &Env, admin: Address, token: Address, config: Config) -> Result<(), ContractError> {
    if get_admin(env).is_some() || storage::has_config(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    admin.require_auth();
    validate_config(&config)?;

    initialize_admin(env, &admin);
    storage::set_token(env, &token);
    storage::set_config(env, &config);
    storage::set_liabilities(env, &Liabilities::default());
    events::initialized(env, &admin, &token);
    Ok(())
}

/// Reject any config outside its bounds
pub fn validate_config(config: &Config) -> Result<(), ContractError> {
    validate_non_negative_amount(config.creation_fee)?;
    validate_non_negative_amount(config.proposal_deposit)?;
    validate_quorum_bps(config.default_quorum_bps)?;
    validate_bps(config.spend_cap_bps)?;
    validate_bps(config.dissolution_bps)?;

    if config.min_voting_period == 0
        || config.min_voting_period > config.default_voting_period
        || config.default_voting_period > config.max_voting_period
    {
        return Err(ContractError::OutOfBounds);
    }
    if config.default_max_members == 0 || config.invite_ttl == 0 {
        return Err(ContractError::OutOfBounds);
    }
    Ok(())
}

/// Applies to corporations and proposals created afterwards
pub fn update_config(env: &Env, admin: Address, config: Config) -> Result<(), ContractError> {
    verify_admin(env, &admin)?;
    validate_config(&config)?;

    storage::set_config(env, &config);
    events::config_updated(env, &admin);
    Ok(())
}

pub fn set_paused(env: &Env, admin: Address, paused: bool) -> Result<(), ContractError> {
    verify_admin(env, &admin)?;

    storage::set_paused(env, paused);
    events::paused_changed(env, &admin, paused);
    Ok(())
}

/// Token balance beyond what treasuries, escrow and claims account for
pub fn surplus(env: &Env) -> Result<i128, ContractError> {
    let held = transfer::custodied_balance(env)?;
    let owed = treasury::total_liabilities(env)?;
    Ok(held.saturating_sub(owed).max(0))
}

pub fn withdraw_surplus(env: &Env, admin: Address, amount: i128) -> Result<(), ContractError> {
    verify_admin(env, &admin)?;
    validate_positive_amount(amount)?;
    safe_sub(surplus(env)?, amount)?;

    events::surplus_withdrawn(env, &admin, amount);

    let mut payouts = Vec::new(env);
    transfer::push(&mut payouts, &admin, amount)?;
    transfer::dispatch(env, &payouts)
}
