//! Timelocked execution of queued proposals and their per-type effects.

use soroban_sdk::{Address, Env, String, Vec};

use crate::admin;
use crate::events;
use crate::reputation;
use crate::storage;
use crate::types::{
    Discovery, GovernanceError, Proposal, ProposalPayload, ProposalStatus, ProposalType,
    WeeklyTheme, EXECUTION_REWARD, PUBLIC_EXECUTION_DELAY,
};

pub fn execute(env: &Env, executor: &Address, proposal_id: u64) -> Result<(), GovernanceError> {
    admin::require_not_paused(env)?;

    let mut proposal = storage::get_proposal(env, proposal_id)?;
    if proposal.status != ProposalStatus::Queued {
        return Err(GovernanceError::ProposalNotQueued);
    }

    let now = env.ledger().timestamp();
    if now < proposal.execution_time {
        return Err(GovernanceError::ExecutionTimelocked);
    }
    if *executor != proposal.proposer
        && now < proposal.execution_time.saturating_add(PUBLIC_EXECUTION_DELAY)
    {
        return Err(GovernanceError::PublicExecutionNotAvailable);
    }

    match proposal.proposal_type {
        ProposalType::WeeklyTheme => activate_weekly_theme(env, &proposal),
        ProposalType::ResearchDiscovery => register_discovery(env, &proposal, now),
        ProposalType::CommunityProposal
        | ProposalType::KnowledgeSharing
        | ProposalType::Collaboration => {}
    }

    proposal.status = ProposalStatus::Executed;
    proposal.executed = true;
    storage::set_proposal(env, &proposal);

    reputation::earn(env, executor, EXECUTION_REWARD, events::REASON_EXECUTE);
    events::proposal_executed(env, proposal_id, executor);
    Ok(())
}

fn activate_weekly_theme(env: &Env, proposal: &Proposal) {
    let previous = storage::get_active_weekly_theme(env);
    if previous != 0 {
        if let Some(mut theme) = storage::get_weekly_theme(env, previous) {
            theme.is_active = false;
            storage::set_weekly_theme(env, previous, &theme);
        }
    }

    let theme_name = match storage::get_payload(env, proposal.id) {
        Some(ProposalPayload::WeeklyTheme(name)) => name,
        _ => proposal.title.clone(),
    };
    let week = storage::get_current_week(env);
    let theme = WeeklyTheme {
        theme_name,
        description: proposal.description.clone(),
        week_number: week,
        voting_score: proposal.votes_for,
        is_active: true,
    };

    storage::set_weekly_theme(env, proposal.id, &theme);
    storage::set_theme_for_week(env, week, proposal.id);
    storage::set_active_weekly_theme(env, proposal.id);
    events::weekly_theme_set(env, proposal.id, week, &theme.theme_name);
}

fn register_discovery(env: &Env, proposal: &Proposal, now: u64) {
    let (researcher_name, institution, tags) = match storage::get_payload(env, proposal.id) {
        Some(ProposalPayload::ResearchDiscovery(name, institution, tags)) => {
            (name, institution, tags)
        }
        _ => (String::from_str(env, ""), String::from_str(env, ""), Vec::new(env)),
    };

    let discovery = Discovery {
        title: proposal.title.clone(),
        researcher_name,
        institution,
        paper_ipfs: proposal.ipfs_hash.clone(),
        tags,
        voting_score: proposal.votes_for,
        timestamp: now,
        verified: storage::is_verified_researcher(env, &proposal.proposer),
        approval_count: proposal.votes_for,
    };

    storage::set_discovery(env, proposal.id, &discovery);
    events::discovery_submitted(env, proposal.id, &proposal.proposer, &proposal.title);
}
