//! Value movement through the configured token contract.
//!
//! Handlers write all local state first and touch the token last: inbound
//! value is pulled with `collect`, outbound payouts are gathered as
//! `TransferInstruction`s and sent with `dispatch`.

use shared::ContractError;
use soroban_sdk::{contracttype, token, Address, Env, Vec};

use crate::{events, storage};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferInstruction {
    pub to: Address,
    pub amount: i128,
}

/// Queue a payout, merging it with an earlier one to the same address
pub fn push(payouts: &mut Vec<TransferInstruction>, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Ok(());
    }
    let existing = payouts
        .iter()
        .enumerate()
        .find(|(_, payout)| &payout.to == to);

    match existing {
        Some((i, mut payout)) => {
            payout.amount = shared::safe_add(payout.amount, amount)?;
            payouts.set(i as u32, payout);
        }
        None => payouts.push_back(TransferInstruction {
            to: to.clone(),
            amount,
        }),
    }
    Ok(())
}

/// Pull `amount` from `from` into contract custody
pub fn collect(env: &Env, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount == 0 {
        return Ok(());
    }
    let token = storage::get_token(env)?;
    token::Client::new(env, &token).transfer(from, &env.current_contract_address(), &amount);
    Ok(())
}

/// Send every queued payout
pub fn dispatch(env: &Env, payouts: &Vec<TransferInstruction>) -> Result<(), ContractError> {
    if payouts.is_empty() {
        return Ok(());
    }
    let token = storage::get_token(env)?;
    let client = token::Client::new(env, &token);
    let this = env.current_contract_address();
    for payout in payouts.iter() {
        client.transfer(&this, &payout.to, &payout.amount);
        events::transfer_dispatched(env, &payout.to, payout.amount);
    }
    Ok(())
}

/// Token balance actually held by the contract
pub fn custodied_balance(env: &Env) -> Result<i128, ContractError> {
    let token = storage::get_token(env)?;
    Ok(token::Client::new(env, &token).balance(&env.current_contract_address()))
}
