//! Owner-only controls. None of these are blocked by the pause flag.

use soroban_sdk::{token, Address, Env};

use crate::events;
use crate::reputation;
use crate::storage;
use crate::types::{GovernanceError, GovernanceParameters};

pub fn is_owner(env: &Env, account: &Address) -> bool {
    matches!(storage::get_owner(env), Some(owner) if owner == *account)
}

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), GovernanceError> {
    if is_owner(env, caller) {
        Ok(())
    } else {
        Err(GovernanceError::Unauthorized)
    }
}

pub fn require_not_paused(env: &Env) -> Result<(), GovernanceError> {
    if storage::is_paused(env) {
        return Err(GovernanceError::EnforcedPause);
    }
    Ok(())
}

pub fn pause(env: &Env, owner: &Address) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    require_not_paused(env)?;
    storage::set_paused(env, true);
    events::paused(env, owner);
    Ok(())
}

pub fn unpause(env: &Env, owner: &Address) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    if !storage::is_paused(env) {
        return Err(GovernanceError::ExpectedPause);
    }
    storage::set_paused(env, false);
    events::unpaused(env, owner);
    Ok(())
}

pub fn award_reputation(
    env: &Env,
    owner: &Address,
    account: &Address,
    amount: u32,
) -> Result<u32, GovernanceError> {
    require_owner(env, owner)?;
    Ok(reputation::earn(env, account, amount, events::REASON_AWARD))
}

pub fn set_verified_researcher(
    env: &Env,
    owner: &Address,
    account: &Address,
    verified: bool,
) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    storage::set_verified_researcher(env, account, verified);
    events::researcher_verified(env, account, verified);
    Ok(())
}

pub fn update_params(
    env: &Env,
    owner: &Address,
    params: GovernanceParameters,
) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    params.validate()?;
    storage::set_params(env, &params);
    events::params_updated(env, owner);
    Ok(())
}

/// Moves to the next week. The active theme does not carry over.
pub fn increment_week(env: &Env, owner: &Address) -> Result<u32, GovernanceError> {
    require_owner(env, owner)?;

    let active = storage::get_active_weekly_theme(env);
    if active != 0 {
        if let Some(mut theme) = storage::get_weekly_theme(env, active) {
            theme.is_active = false;
            storage::set_weekly_theme(env, active, &theme);
        }
        storage::set_active_weekly_theme(env, 0);
    }

    let week = storage::get_current_week(env).saturating_add(1);
    storage::set_current_week(env, week);
    events::week_advanced(env, week);
    Ok(week)
}

pub fn transfer_ownership(
    env: &Env,
    owner: &Address,
    new_owner: &Address,
) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    storage::set_owner(env, new_owner);
    events::ownership_transferred(env, owner, Some(new_owner.clone()));
    Ok(())
}

pub fn renounce_ownership(env: &Env, owner: &Address) -> Result<(), GovernanceError> {
    require_owner(env, owner)?;
    storage::remove_owner(env);
    events::ownership_transferred(env, owner, None);
    Ok(())
}

/// Sends the contract's whole balance of `token` to the owner.
pub fn emergency_withdraw(
    env: &Env,
    owner: &Address,
    token: &Address,
) -> Result<i128, GovernanceError> {
    require_owner(env, owner)?;

    let client = token::Client::new(env, token);
    let contract = env.current_contract_address();
    let balance = client.balance(&contract);
    if balance > 0 {
        client.transfer(&contract, owner, &balance);
    }
    events::emergency_withdraw(env, token, owner, balance);
    Ok(balance)
}
