use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    DataKey, Discovery, GovernanceError, GovernanceParameters, Proposal, ProposalPayload,
    ProposalType, WeeklyTheme, MAX_PAGE_SIZE,
};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Params)
}

pub fn require_initialized(env: &Env) -> Result<(), GovernanceError> {
    if is_initialized(env) {
        Ok(())
    } else {
        Err(GovernanceError::NotInitialized)
    }
}

pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn remove_owner(env: &Env) {
    env.storage().instance().remove(&DataKey::Owner);
}

pub fn get_params(env: &Env) -> Result<GovernanceParameters, GovernanceError> {
    env.storage()
        .instance()
        .get(&DataKey::Params)
        .ok_or(GovernanceError::NotInitialized)
}

pub fn set_params(env: &Env, params: &GovernanceParameters) {
    env.storage().instance().set(&DataKey::Params, params);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn get_current_week(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::CurrentWeek).unwrap_or(1)
}

pub fn set_current_week(env: &Env, week: u32) {
    env.storage().instance().set(&DataKey::CurrentWeek, &week);
}

pub fn get_active_weekly_theme(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ActiveWeeklyTheme)
        .unwrap_or(0)
}

pub fn set_active_weekly_theme(env: &Env, proposal_id: u64) {
    env.storage()
        .instance()
        .set(&DataKey::ActiveWeeklyTheme, &proposal_id);
}

// ───────────── Proposals ─────────────

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

pub fn increment_proposal_count(env: &Env) -> u64 {
    let new_count = get_proposal_count(env) + 1;
    env.storage()
        .instance()
        .set(&DataKey::ProposalCount, &new_count);
    new_count
}

pub fn get_proposal(env: &Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
    if proposal_id == 0 || proposal_id > get_proposal_count(env) {
        return Err(GovernanceError::InvalidProposalId);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Proposal(proposal_id))
        .ok_or(GovernanceError::InvalidProposalId)
}

pub fn set_proposal(env: &Env, proposal: &Proposal) {
    env.storage()
        .persistent()
        .set(&DataKey::Proposal(proposal.id), proposal);
}

pub fn get_payload(env: &Env, proposal_id: u64) -> Option<ProposalPayload> {
    env.storage().persistent().get(&DataKey::Payload(proposal_id))
}

pub fn set_payload(env: &Env, proposal_id: u64, payload: &ProposalPayload) {
    env.storage()
        .persistent()
        .set(&DataKey::Payload(proposal_id), payload);
}

pub fn get_type_count(env: &Env, proposal_type: ProposalType) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::TypeCount(proposal_type))
        .unwrap_or(0)
}

pub fn push_type_index(env: &Env, proposal_type: ProposalType, proposal_id: u64) {
    let count = get_type_count(env, proposal_type);
    env.storage()
        .persistent()
        .set(&DataKey::TypeEntry(proposal_type, count), &proposal_id);
    env.storage()
        .persistent()
        .set(&DataKey::TypeCount(proposal_type), &(count + 1));
}

/// Ids of `proposal_type` proposals in creation order, `limit` at most from `start`.
pub fn get_type_page(env: &Env, proposal_type: ProposalType, start: u32, limit: u32) -> Vec<u64> {
    let end = page_end(get_type_count(env, proposal_type), start, limit);
    let mut ids = Vec::new(env);
    for i in start..end {
        if let Some(id) = env
            .storage()
            .persistent()
            .get(&DataKey::TypeEntry(proposal_type, i))
        {
            ids.push_back(id);
        }
    }
    ids
}

fn page_end(count: u32, start: u32, limit: u32) -> u32 {
    start.saturating_add(limit.min(MAX_PAGE_SIZE)).min(count)
}

// ───────────── Votes ─────────────

pub fn has_voted(env: &Env, proposal_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Vote(proposal_id, voter.clone()))
}

pub fn get_voter_count(env: &Env, proposal_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VoterCount(proposal_id))
        .unwrap_or(0)
}

pub fn add_voter(env: &Env, proposal_id: u64, voter: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Vote(proposal_id, voter.clone()), &true);
    let count = get_voter_count(env, proposal_id);
    env.storage()
        .persistent()
        .set(&DataKey::Voter(proposal_id, count), voter);
    env.storage()
        .persistent()
        .set(&DataKey::VoterCount(proposal_id), &(count + 1));
}

/// Voters of `proposal_id` in voting order, `limit` at most from `start`.
pub fn get_voter_page(env: &Env, proposal_id: u64, start: u32, limit: u32) -> Vec<Address> {
    let end = page_end(get_voter_count(env, proposal_id), start, limit);
    let mut voters = Vec::new(env);
    for i in start..end {
        if let Some(voter) = env
            .storage()
            .persistent()
            .get(&DataKey::Voter(proposal_id, i))
        {
            voters.push_back(voter);
        }
    }
    voters
}

pub fn get_total_voter_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::TotalVoterCount)
        .unwrap_or(0)
}

/// Adds `voter` to the electorate on first vote. Returns true if newly added.
pub fn register_voter(env: &Env, voter: &Address) -> bool {
    let key = DataKey::RegisteredVoter(voter.clone());
    if env.storage().persistent().has(&key) {
        return false;
    }
    env.storage().persistent().set(&key, &true);
    let count = get_total_voter_count(env).saturating_add(1);
    env.storage()
        .instance()
        .set(&DataKey::TotalVoterCount, &count);
    true
}

pub fn get_vote_count(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::VoteCount(account.clone()))
        .unwrap_or(0)
}

pub fn set_vote_count(env: &Env, account: &Address, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::VoteCount(account.clone()), &count);
}

pub fn get_last_vote_time(env: &Env, account: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LastVoteTime(account.clone()))
        .unwrap_or(0)
}

pub fn set_last_vote_time(env: &Env, account: &Address, timestamp: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::LastVoteTime(account.clone()), &timestamp);
}

// ───────────── Accounts ─────────────

pub fn get_reputation(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Reputation(account.clone()))
        .unwrap_or(0)
}

pub fn set_reputation(env: &Env, account: &Address, amount: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Reputation(account.clone()), &amount);
}

pub fn get_delegate(env: &Env, account: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Delegate(account.clone()))
}

pub fn set_delegate(env: &Env, account: &Address, delegatee: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Delegate(account.clone()), delegatee);
}

pub fn remove_delegate(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Delegate(account.clone()));
}

pub fn is_verified_researcher(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::VerifiedResearcher(account.clone()))
        .unwrap_or(false)
}

pub fn set_verified_researcher(env: &Env, account: &Address, verified: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::VerifiedResearcher(account.clone()), &verified);
}

// ───────────── Theme & discovery records ─────────────

pub fn get_weekly_theme(env: &Env, proposal_id: u64) -> Option<WeeklyTheme> {
    env.storage()
        .persistent()
        .get(&DataKey::WeeklyTheme(proposal_id))
}

pub fn set_weekly_theme(env: &Env, proposal_id: u64, theme: &WeeklyTheme) {
    env.storage()
        .persistent()
        .set(&DataKey::WeeklyTheme(proposal_id), theme);
}

pub fn get_theme_for_week(env: &Env, week: u32) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::ThemeForWeek(week))
        .unwrap_or(0)
}

pub fn set_theme_for_week(env: &Env, week: u32, proposal_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::ThemeForWeek(week), &proposal_id);
}

pub fn get_discovery(env: &Env, proposal_id: u64) -> Option<Discovery> {
    env.storage()
        .persistent()
        .get(&DataKey::Discovery(proposal_id))
}

pub fn set_discovery(env: &Env, proposal_id: u64, discovery: &Discovery) {
    env.storage()
        .persistent()
        .set(&DataKey::Discovery(proposal_id), discovery);
}
