#![no_std]

//! Reputation-gated community governance.
//!
//! Accounts earn bounded reputation by participating. Accounts at or above the
//! proposal threshold open proposals; every account gets one unweighted vote
//! per proposal unless it has delegated. After the voting window closes anyone
//! may finalize, and a passing proposal is queued behind a timelock before its
//! effect (activating a weekly theme, registering a discovery, or nothing for
//! informational proposals) is applied.

mod admin;
mod delegation;
mod events;
mod execution;
mod finalization;
mod proposals;
mod reputation;
mod storage;
pub mod types;
mod voting;

use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, String, Vec};

use crate::proposals::NewProposal;
pub use crate::types::*;

contractmeta!(
    key = "Description",
    val = "Reputation-weighted proposal, voting and timelocked execution ledger"
);

#[contract]
pub struct CommunityGovernance;

#[contractimpl]
impl CommunityGovernance {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize the ledger with its owner and default parameters.
    pub fn initialize(env: Env, owner: Address) -> Result<(), GovernanceError> {
        if storage::is_initialized(&env) {
            return Err(GovernanceError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_params(&env, &GovernanceParameters::default_params());
        storage::set_paused(&env, false);
        storage::set_current_week(&env, 1);
        storage::set_active_weekly_theme(&env, 0);
        Ok(())
    }

    // ───────────── PROPOSALS ─────────────

    /// Open a proposal of any type. The voting window is the quick-vote period
    /// when `quick_vote` is set, the regular voting period otherwise.
    pub fn create_proposal(
        env: Env,
        proposer: Address,
        proposal_type: ProposalType,
        title: String,
        description: String,
        ipfs_hash: String,
        quick_vote: bool,
    ) -> Result<u64, GovernanceError> {
        storage::require_initialized(&env)?;
        proposer.require_auth();

        proposals::create(
            &env,
            &proposer,
            NewProposal {
                proposal_type,
                title,
                description,
                ipfs_hash,
                quick_vote,
                payload: None,
            },
        )
    }

    /// Open a weekly-theme proposal carrying the theme name to activate.
    pub fn create_weekly_theme_proposal(
        env: Env,
        proposer: Address,
        theme_name: String,
        description: String,
        ipfs_hash: String,
        quick_vote: bool,
    ) -> Result<u64, GovernanceError> {
        storage::require_initialized(&env)?;
        proposer.require_auth();

        proposals::create(
            &env,
            &proposer,
            NewProposal {
                proposal_type: ProposalType::WeeklyTheme,
                title: theme_name.clone(),
                description,
                ipfs_hash,
                quick_vote,
                payload: Some(ProposalPayload::WeeklyTheme(theme_name)),
            },
        )
    }

    /// Open a research-discovery proposal with the researcher's details.
    pub fn create_discovery_proposal(
        env: Env,
        proposer: Address,
        title: String,
        description: String,
        paper_ipfs: String,
        researcher_name: String,
        institution: String,
        tags: Vec<String>,
        quick_vote: bool,
    ) -> Result<u64, GovernanceError> {
        storage::require_initialized(&env)?;
        proposer.require_auth();

        proposals::create(
            &env,
            &proposer,
            NewProposal {
                proposal_type: ProposalType::ResearchDiscovery,
                title,
                description,
                ipfs_hash: paper_ipfs,
                quick_vote,
                payload: Some(ProposalPayload::ResearchDiscovery(
                    researcher_name,
                    institution,
                    tags,
                )),
            },
        )
    }

    /// Cancel a proposal that has not been finalized. Owner or proposer only.
    pub fn cancel_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
    ) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        caller.require_auth();
        proposals::cancel(&env, &caller, proposal_id)
    }

    // ───────────── VOTING & DELEGATION ─────────────

    /// Cast a vote. Returns the new tally for the chosen option.
    pub fn vote(
        env: Env,
        voter: Address,
        proposal_id: u64,
        choice: VoteChoice,
    ) -> Result<u32, GovernanceError> {
        storage::require_initialized(&env)?;
        voter.require_auth();
        voting::vote(&env, &voter, proposal_id, choice)
    }

    pub fn delegate(env: Env, delegator: Address, delegatee: Address) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        delegator.require_auth();
        delegation::delegate(&env, &delegator, &delegatee)
    }

    pub fn undelegate(env: Env, delegator: Address) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        delegator.require_auth();
        delegation::undelegate(&env, &delegator)
    }

    // ───────────── FINALIZATION & EXECUTION ─────────────

    /// Close voting on a proposal whose window has ended. Anyone may call.
    pub fn finalize_proposal(env: Env, proposal_id: u64) -> Result<ProposalStatus, GovernanceError> {
        storage::require_initialized(&env)?;
        finalization::finalize(&env, proposal_id)
    }

    /// Apply a queued proposal. The proposer may do so once the timelock has
    /// expired; everyone else must wait an extra day.
    pub fn execute_proposal(
        env: Env,
        executor: Address,
        proposal_id: u64,
    ) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        executor.require_auth();
        execution::execute(&env, &executor, proposal_id)
    }

    // ───────────── ADMIN ─────────────

    pub fn award_reputation(
        env: Env,
        owner: Address,
        account: Address,
        amount: u32,
    ) -> Result<u32, GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::award_reputation(&env, &owner, &account, amount)
    }

    pub fn set_verified_researcher(
        env: Env,
        owner: Address,
        account: Address,
        verified: bool,
    ) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::set_verified_researcher(&env, &owner, &account, verified)
    }

    pub fn update_governance_params(
        env: Env,
        owner: Address,
        voting_period: u64,
        quick_vote_period: u64,
        execution_delay: u64,
        min_votes_required: u32,
        quorum_percentage: u32,
        proposal_threshold: u32,
    ) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::update_params(
            &env,
            &owner,
            GovernanceParameters {
                voting_period,
                quick_vote_period,
                execution_delay,
                min_votes_required,
                quorum_percentage,
                proposal_threshold,
            },
        )
    }

    pub fn pause(env: Env, owner: Address) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::pause(&env, &owner)
    }

    pub fn unpause(env: Env, owner: Address) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::unpause(&env, &owner)
    }

    /// Advance to the next week, clearing the active theme.
    pub fn increment_week(env: Env, owner: Address) -> Result<u32, GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::increment_week(&env, &owner)
    }

    pub fn emergency_withdraw(
        env: Env,
        owner: Address,
        token: Address,
    ) -> Result<i128, GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::emergency_withdraw(&env, &owner, &token)
    }

    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::transfer_ownership(&env, &owner, &new_owner)
    }

    pub fn renounce_ownership(env: Env, owner: Address) -> Result<(), GovernanceError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        admin::renounce_ownership(&env, &owner)
    }

    // ───────────── READ-ONLY ─────────────

    pub fn get_proposal(env: Env, proposal_id: u64) -> Result<Proposal, GovernanceError> {
        proposals::get(&env, proposal_id)
    }

    pub fn get_proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    pub fn get_proposal_type_count(env: Env, proposal_type: ProposalType) -> u32 {
        storage::get_type_count(&env, proposal_type)
    }

    /// Ids of one proposal type in creation order. Pages hold at most
    /// `MAX_PAGE_SIZE` entries.
    pub fn get_proposals_by_type(
        env: Env,
        proposal_type: ProposalType,
        start: u32,
        limit: u32,
    ) -> Vec<u64> {
        storage::get_type_page(&env, proposal_type, start, limit)
    }

    pub fn get_proposal_voter_count(env: Env, proposal_id: u64) -> Result<u32, GovernanceError> {
        proposals::get(&env, proposal_id)?;
        Ok(storage::get_voter_count(&env, proposal_id))
    }

    /// Voters of a proposal in voting order, paged like `get_proposals_by_type`.
    pub fn get_proposal_voters(
        env: Env,
        proposal_id: u64,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, GovernanceError> {
        proposals::get(&env, proposal_id)?;
        Ok(storage::get_voter_page(&env, proposal_id, start, limit))
    }

    pub fn has_voted(env: Env, proposal_id: u64, account: Address) -> bool {
        storage::has_voted(&env, proposal_id, &account)
    }

    pub fn is_quorum_reached(env: Env, proposal_id: u64) -> Result<bool, GovernanceError> {
        finalization::is_quorum_reached(&env, proposal_id)
    }

    pub fn user_reputation(env: Env, account: Address) -> u32 {
        reputation::reputation_of(&env, &account)
    }

    pub fn user_vote_count(env: Env, account: Address) -> u32 {
        storage::get_vote_count(&env, &account)
    }

    pub fn last_vote_time(env: Env, account: Address) -> u64 {
        storage::get_last_vote_time(&env, &account)
    }

    pub fn delegates(env: Env, account: Address) -> Option<Address> {
        delegation::delegate_of(&env, &account)
    }

    pub fn total_voter_count(env: Env) -> u32 {
        storage::get_total_voter_count(&env)
    }

    /// Id of the proposal whose theme is active, or 0 when none is.
    pub fn active_weekly_theme(env: Env) -> u64 {
        storage::get_active_weekly_theme(&env)
    }

    pub fn get_weekly_theme(env: Env, proposal_id: u64) -> Result<WeeklyTheme, GovernanceError> {
        storage::get_weekly_theme(&env, proposal_id).ok_or(GovernanceError::NotFound)
    }

    pub fn get_theme_for_week(env: Env, week: u32) -> u64 {
        storage::get_theme_for_week(&env, week)
    }

    pub fn get_discovery(env: Env, proposal_id: u64) -> Result<Discovery, GovernanceError> {
        storage::get_discovery(&env, proposal_id).ok_or(GovernanceError::NotFound)
    }

    pub fn current_week(env: Env) -> u32 {
        storage::get_current_week(&env)
    }

    pub fn get_params(env: Env) -> Result<GovernanceParameters, GovernanceError> {
        storage::get_params(&env)
    }

    pub fn is_verified_researcher(env: Env, account: Address) -> bool {
        storage::is_verified_researcher(&env, &account)
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }
}
