//! Closing a vote: quorum and threshold evaluation, then queueing.

use soroban_sdk::Env;

use crate::admin;
use crate::events;
use crate::storage;
use crate::types::{GovernanceError, GovernanceParameters, Proposal, ProposalStatus};

/// Quorum is measured against every account that has ever voted, not against
/// all accounts in existence.
pub fn quorum_reached(votes_cast: u32, total_voter_count: u32, quorum_percentage: u32) -> bool {
    (votes_cast as u64) * 100 >= (quorum_percentage as u64) * (total_voter_count as u64)
}

/// Outcome of a closed vote as a pure function of its tallies and parameters.
pub fn decide(
    proposal: &Proposal,
    total_voter_count: u32,
    params: &GovernanceParameters,
) -> ProposalStatus {
    let total = proposal.total_votes();
    if !quorum_reached(total, total_voter_count, params.quorum_percentage)
        || proposal.votes_for <= proposal.votes_against
        || total < params.min_votes_required
    {
        ProposalStatus::Rejected
    } else {
        ProposalStatus::Queued
    }
}

pub fn is_quorum_reached(env: &Env, proposal_id: u64) -> Result<bool, GovernanceError> {
    let proposal = storage::get_proposal(env, proposal_id)?;
    let params = storage::get_params(env)?;
    Ok(quorum_reached(
        proposal.total_votes(),
        storage::get_total_voter_count(env),
        params.quorum_percentage,
    ))
}

pub fn finalize(env: &Env, proposal_id: u64) -> Result<ProposalStatus, GovernanceError> {
    admin::require_not_paused(env)?;

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    let now = env.ledger().timestamp();
    if proposal.status != ProposalStatus::Active || now <= proposal.end_time {
        return Err(GovernanceError::ProposalNotActive);
    }

    let params = storage::get_params(env)?;
    let status = decide(&proposal, storage::get_total_voter_count(env), &params);
    if status == ProposalStatus::Queued {
        proposal.execution_time = now
            .checked_add(params.execution_delay)
            .ok_or(GovernanceError::TimestampOverflow)?;
    }
    proposal.status = status;
    storage::set_proposal(env, &proposal);

    events::proposal_finalized(
        env,
        proposal_id,
        proposal.votes_for,
        proposal.votes_against,
        proposal.votes_abstain,
        status,
    );
    Ok(status)
}
