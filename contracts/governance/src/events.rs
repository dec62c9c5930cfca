//! Contract events. Topics lead with a short event name followed by the
//! primary key(s); the payload goes in the data slot.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::types::{ProposalStatus, ProposalType, VoteChoice};

pub const REASON_AWARD: Symbol = symbol_short!("award");
pub const REASON_VOTE: Symbol = symbol_short!("vote");
pub const REASON_EXECUTE: Symbol = symbol_short!("execute");

pub fn proposal_created(
    env: &Env,
    proposal_id: u64,
    proposer: &Address,
    proposal_type: ProposalType,
    title: &String,
    end_time: u64,
) {
    env.events().publish(
        (symbol_short!("created"), proposal_id, proposer.clone()),
        (proposal_type, title.clone(), end_time),
    );
}

pub fn vote_cast(env: &Env, proposal_id: u64, voter: &Address, choice: VoteChoice, new_count: u32) {
    env.events().publish(
        (symbol_short!("vote"), proposal_id, voter.clone()),
        (choice, new_count),
    );
}

pub fn delegate_changed(env: &Env, delegator: &Address, from: Option<Address>, to: Option<Address>) {
    env.events().publish(
        (symbol_short!("delegate"), delegator.clone()),
        (from, to),
    );
}

pub fn proposal_finalized(
    env: &Env,
    proposal_id: u64,
    votes_for: u32,
    votes_against: u32,
    votes_abstain: u32,
    status: ProposalStatus,
) {
    env.events().publish(
        (symbol_short!("finalized"), proposal_id),
        (votes_for, votes_against, votes_abstain, status),
    );
}

pub fn proposal_executed(env: &Env, proposal_id: u64, executor: &Address) {
    env.events().publish(
        (symbol_short!("executed"), proposal_id),
        executor.clone(),
    );
}

pub fn proposal_cancelled(env: &Env, proposal_id: u64, by: &Address) {
    env.events().publish(
        (symbol_short!("cancelled"), proposal_id),
        by.clone(),
    );
}

pub fn weekly_theme_set(env: &Env, proposal_id: u64, week: u32, theme_name: &String) {
    env.events().publish(
        (symbol_short!("theme_set"), proposal_id),
        (week, theme_name.clone()),
    );
}

pub fn discovery_submitted(env: &Env, proposal_id: u64, proposer: &Address, title: &String) {
    env.events().publish(
        (symbol_short!("discovery"), proposal_id, proposer.clone()),
        title.clone(),
    );
}

pub fn reputation_earned(env: &Env, account: &Address, amount: u32, new_total: u32, reason: Symbol) {
    env.events().publish(
        (symbol_short!("rep_earn"), account.clone()),
        (amount, new_total, reason),
    );
}

pub fn paused(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("paused"),), by.clone());
}

pub fn unpaused(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("unpaused"),), by.clone());
}

pub fn params_updated(env: &Env, by: &Address) {
    env.events().publish((symbol_short!("params"),), by.clone());
}

pub fn week_advanced(env: &Env, week: u32) {
    env.events().publish((symbol_short!("week"),), week);
}

pub fn ownership_transferred(env: &Env, previous: &Address, new_owner: Option<Address>) {
    env.events().publish(
        (symbol_short!("owner"), previous.clone()),
        new_owner,
    );
}

pub fn researcher_verified(env: &Env, account: &Address, verified: bool) {
    env.events().publish(
        (symbol_short!("verified"), account.clone()),
        verified,
    );
}

pub fn emergency_withdraw(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), token.clone()),
        (to.clone(), amount),
    );
}
