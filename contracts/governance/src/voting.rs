//! Vote casting. One account, one vote per proposal, unweighted.

use soroban_sdk::{Address, Env};

use crate::admin;
use crate::delegation;
use crate::events;
use crate::reputation;
use crate::storage;
use crate::types::{GovernanceError, ProposalStatus, VoteChoice, VOTE_REWARD};

/// Records `voter`'s choice and returns the updated tally for that choice.
pub fn vote(
    env: &Env,
    voter: &Address,
    proposal_id: u64,
    choice: VoteChoice,
) -> Result<u32, GovernanceError> {
    admin::require_not_paused(env)?;

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    let now = env.ledger().timestamp();
    if now > proposal.end_time || proposal.status != ProposalStatus::Active {
        return Err(GovernanceError::ProposalNotActive);
    }
    if delegation::is_delegating(env, voter) {
        return Err(GovernanceError::AlreadyDelegated);
    }
    if storage::has_voted(env, proposal_id, voter) {
        return Err(GovernanceError::AlreadyVoted);
    }

    let tally = match choice {
        VoteChoice::For => &mut proposal.votes_for,
        VoteChoice::Against => &mut proposal.votes_against,
        VoteChoice::Abstain => &mut proposal.votes_abstain,
    };
    *tally = tally.saturating_add(1);
    let new_count = *tally;
    storage::set_proposal(env, &proposal);

    storage::add_voter(env, proposal_id, voter);
    storage::register_voter(env, voter);
    let votes = storage::get_vote_count(env, voter).saturating_add(1);
    storage::set_vote_count(env, voter, votes);
    storage::set_last_vote_time(env, voter, now);

    reputation::earn(env, voter, VOTE_REWARD, events::REASON_VOTE);
    events::vote_cast(env, proposal_id, voter, choice, new_count);
    Ok(new_count)
}
