//! Bounded, non-transferable reputation scores.
//!
//! All arithmetic saturates at [`MAX_REPUTATION`]; awarding past the cap is a
//! clamp, not an error.

use soroban_sdk::{Address, Env, Symbol};

use crate::events;
use crate::storage;
use crate::types::MAX_REPUTATION;

pub fn reputation_of(env: &Env, account: &Address) -> u32 {
    storage::get_reputation(env, account)
}

/// Credits `amount` to `account`, clamped to the cap. Returns the new score.
pub fn earn(env: &Env, account: &Address, amount: u32, reason: Symbol) -> u32 {
    let current = storage::get_reputation(env, account);
    let updated = current.saturating_add(amount).min(MAX_REPUTATION);
    storage::set_reputation(env, account, updated);
    events::reputation_earned(env, account, updated - current, updated, reason);
    updated
}
