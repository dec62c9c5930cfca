//! One-hop delegation records.
//!
//! Delegating moves no weight. It only marks the delegator as unable to vote
//! directly until it undelegates.

use soroban_sdk::{Address, Env};

use crate::admin;
use crate::events;
use crate::storage;
use crate::types::GovernanceError;

pub fn delegate(env: &Env, from: &Address, to: &Address) -> Result<(), GovernanceError> {
    admin::require_not_paused(env)?;
    if from == to {
        return Err(GovernanceError::InvalidArgument);
    }

    let previous = storage::get_delegate(env, from);
    storage::set_delegate(env, from, to);
    events::delegate_changed(env, from, previous, Some(to.clone()));
    Ok(())
}

pub fn undelegate(env: &Env, from: &Address) -> Result<(), GovernanceError> {
    admin::require_not_paused(env)?;
    let previous = storage::get_delegate(env, from).ok_or(GovernanceError::NotDelegating)?;
    storage::remove_delegate(env, from);
    events::delegate_changed(env, from, Some(previous), None);
    Ok(())
}

pub fn delegate_of(env: &Env, account: &Address) -> Option<Address> {
    storage::get_delegate(env, account)
}

pub fn is_delegating(env: &Env, account: &Address) -> bool {
    storage::get_delegate(env, account).is_some()
}
