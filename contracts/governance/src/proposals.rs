//! Proposal creation, lookup and cancellation.

use soroban_sdk::{Address, Env, String};

use crate::admin;
use crate::events;
use crate::reputation;
use crate::storage;
use crate::types::{GovernanceError, Proposal, ProposalPayload, ProposalStatus, ProposalType};

pub struct NewProposal {
    pub proposal_type: ProposalType,
    pub title: String,
    pub description: String,
    pub ipfs_hash: String,
    pub quick_vote: bool,
    pub payload: Option<ProposalPayload>,
}

pub fn create(env: &Env, proposer: &Address, new: NewProposal) -> Result<u64, GovernanceError> {
    admin::require_not_paused(env)?;

    let params = storage::get_params(env)?;
    if reputation::reputation_of(env, proposer) < params.proposal_threshold {
        return Err(GovernanceError::InsufficientReputation);
    }
    if new.title.len() == 0 || new.description.len() == 0 {
        return Err(GovernanceError::EmptyText);
    }

    let now = env.ledger().timestamp();
    let period = if new.quick_vote {
        params.quick_vote_period
    } else {
        params.voting_period
    };

    let end_time = now
        .checked_add(period)
        .ok_or(GovernanceError::TimestampOverflow)?;

    let id = storage::increment_proposal_count(env);
    // Votes are accepted from creation, so the record is stored as Active.
    let proposal = Proposal {
        id,
        proposer: proposer.clone(),
        proposal_type: new.proposal_type,
        title: new.title,
        description: new.description,
        ipfs_hash: new.ipfs_hash,
        votes_for: 0,
        votes_against: 0,
        votes_abstain: 0,
        start_time: now,
        end_time,
        execution_time: 0,
        status: ProposalStatus::Active,
        executed: false,
    };

    storage::set_proposal(env, &proposal);
    if let Some(payload) = new.payload {
        storage::set_payload(env, id, &payload);
    }
    storage::push_type_index(env, proposal.proposal_type, id);

    events::proposal_created(
        env,
        id,
        proposer,
        proposal.proposal_type,
        &proposal.title,
        proposal.end_time,
    );
    Ok(id)
}

pub fn get(env: &Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
    storage::get_proposal(env, proposal_id)
}

pub fn cancel(env: &Env, caller: &Address, proposal_id: u64) -> Result<(), GovernanceError> {
    let mut proposal = storage::get_proposal(env, proposal_id)?;

    let is_owner = admin::is_owner(env, caller);
    if !is_owner && proposal.proposer != *caller {
        return Err(GovernanceError::Unauthorized);
    }
    // The owner keeps the ability to cancel while the ledger is paused.
    if !is_owner {
        admin::require_not_paused(env)?;
    }

    match proposal.status {
        ProposalStatus::Pending | ProposalStatus::Active => {}
        _ => return Err(GovernanceError::ProposalNotCancellable),
    }

    proposal.status = ProposalStatus::Cancelled;
    storage::set_proposal(env, &proposal);
    events::proposal_cancelled(env, proposal_id, caller);
    Ok(())
}
