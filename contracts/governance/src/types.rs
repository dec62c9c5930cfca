use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

pub const DAY: u64 = 24 * 60 * 60;
pub const HOUR: u64 = 60 * 60;

/// Upper bound of any account's reputation score.
pub const MAX_REPUTATION: u32 = 10_000;
pub const VOTE_REWARD: u32 = 1;
pub const EXECUTION_REWARD: u32 = 5;

/// Extra wait, on top of `execution_time`, before anyone other than the
/// proposer may execute a queued proposal.
pub const PUBLIC_EXECUTION_DELAY: u64 = DAY;

pub const MIN_VOTING_PERIOD: u64 = DAY;
pub const MIN_QUICK_VOTE_PERIOD: u64 = 12 * HOUR;
pub const MIN_EXECUTION_DELAY: u64 = DAY;

/// Most entries any paginated reader returns in one call.
pub const MAX_PAGE_SIZE: u32 = 100;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GovernanceError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    EnforcedPause = 4,
    ExpectedPause = 5,
    InsufficientReputation = 6,
    InvalidProposalId = 7,
    ProposalNotActive = 8,
    AlreadyDelegated = 9,
    AlreadyVoted = 10,
    InvalidArgument = 11,
    NotDelegating = 12,
    EmptyText = 13,
    ProposalNotQueued = 14,
    ExecutionTimelocked = 15,
    PublicExecutionNotAvailable = 16,
    ProposalNotCancellable = 17,
    InvalidVotingPeriod = 18,
    InvalidQuickVotePeriod = 19,
    InvalidExecutionDelay = 20,
    InvalidQuorumPercentage = 21,
    NotFound = 22,
    TimestampOverflow = 23,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalType {
    WeeklyTheme,
    ResearchDiscovery,
    CommunityProposal,
    KnowledgeSharing,
    Collaboration,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Active,
    Passed,
    Rejected,
    Queued,
    Executed,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum VoteChoice {
    Against = 0,
    For = 1,
    Abstain = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub proposal_type: ProposalType,
    pub title: String,
    pub description: String,
    pub ipfs_hash: String,
    pub votes_for: u32,
    pub votes_against: u32,
    pub votes_abstain: u32,
    pub start_time: u64,
    pub end_time: u64,
    pub execution_time: u64,
    pub status: ProposalStatus,
    pub executed: bool,
}

impl Proposal {
    pub fn total_votes(&self) -> u32 {
        self.votes_for
            .saturating_add(self.votes_against)
            .saturating_add(self.votes_abstain)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeeklyTheme {
    pub theme_name: String,
    pub description: String,
    pub week_number: u32,
    pub voting_score: u32,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Discovery {
    pub title: String,
    pub researcher_name: String,
    pub institution: String,
    pub paper_ipfs: String,
    pub tags: Vec<String>,
    pub voting_score: u32,
    pub timestamp: u64,
    pub verified: bool,
    pub approval_count: u32,
}

/// Details supplied up front for a typed proposal; applied on execution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalPayload {
    WeeklyTheme(String),
    // researcher name, institution, tags
    ResearchDiscovery(String, String, Vec<String>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GovernanceParameters {
    pub voting_period: u64,
    pub quick_vote_period: u64,
    pub execution_delay: u64,
    pub min_votes_required: u32,
    pub quorum_percentage: u32,
    pub proposal_threshold: u32,
}

impl GovernanceParameters {
    pub fn default_params() -> Self {
        Self {
            voting_period: 7 * DAY,
            quick_vote_period: 3 * DAY,
            execution_delay: 2 * DAY,
            min_votes_required: 5,
            quorum_percentage: 10,
            proposal_threshold: 10,
        }
    }

    pub fn validate(&self) -> Result<(), GovernanceError> {
        if self.voting_period < MIN_VOTING_PERIOD {
            return Err(GovernanceError::InvalidVotingPeriod);
        }
        if self.quick_vote_period < MIN_QUICK_VOTE_PERIOD {
            return Err(GovernanceError::InvalidQuickVotePeriod);
        }
        if self.execution_delay < MIN_EXECUTION_DELAY {
            return Err(GovernanceError::InvalidExecutionDelay);
        }
        if self.quorum_percentage == 0 || self.quorum_percentage > 100 {
            return Err(GovernanceError::InvalidQuorumPercentage);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    Params,
    Paused,
    ProposalCount,
    CurrentWeek,
    ActiveWeeklyTheme,
    TotalVoterCount,
    Proposal(u64),
    Payload(u64),
    Voter(u64, u32),
    VoterCount(u64),
    Vote(u64, Address),
    TypeEntry(ProposalType, u32),
    TypeCount(ProposalType),
    Reputation(Address),
    VoteCount(Address),
    LastVoteTime(Address),
    RegisteredVoter(Address),
    Delegate(Address),
    VerifiedResearcher(Address),
    WeeklyTheme(u64),
    ThemeForWeek(u32),
    Discovery(u64),
}
