use soroban_sdk::{contracterror, contracttype, Address, Map, String, Vec};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,         // Payout token address, set once at initialization
    CampaignCount, // Number of campaigns ever created; also the next id
    Campaign(u32), // Campaign id -> Campaign aggregate
}

/// A single funding effort with a goal, a deadline and a milestone-governed
/// payout sequence. The whole aggregate is stored under one key and every
/// mutation rewrites it whole, so readers never observe a half-updated
/// campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64, // Ledger timestamp
    pub amount_raised: i128,
    pub goal_reached: bool, // One-way flag, never cleared once set
    pub closed: bool,
    pub contributions: Map<Address, i128>,
    pub contributors: Vec<Address>, // First-contribution order, never pruned
    pub reward_tiers: Vec<RewardTier>,
    pub milestones: Vec<Milestone>,
}

/// A creator-proposed partial payout, gated by contributor majority vote.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Milestone {
    pub description: String,
    pub release_amount: i128,
    pub released: bool, // false -> true exactly once
    pub approval_count: u32,
    pub approvals: Map<Address, bool>, // Approval set; only grows
}

/// Informational pledge tier. Stored verbatim at campaign creation; nothing
/// ties a contribution to a tier.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTier {
    pub min_contribution: i128,
    pub description: String,
}

/// Read-only projection of a campaign for external callers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSummary {
    pub id: u32,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
    pub amount_raised: i128,
    pub goal_reached: bool,
    pub closed: bool,
    pub contributor_count: u32,
    pub milestone_count: u32,
}

impl Campaign {
    /// Funds still held in escrow for this campaign: everything raised that
    /// has not been refunded or paid out through a released milestone.
    pub fn available_pool(&self) -> i128 {
        let released: i128 = self
            .milestones
            .iter()
            .filter(|m| m.released)
            .map(|m| m.release_amount)
            .sum();
        self.amount_raised - released
    }

    /// Strict majority over the all-time contributor count. Abstentions count
    /// against passage, and the denominator is read at check time.
    pub fn meets_quorum(&self, approval_count: u32) -> bool {
        approval_count > self.contributors.len() / 2
    }

    pub fn summary(&self) -> CampaignSummary {
        CampaignSummary {
            id: self.id,
            creator: self.creator.clone(),
            goal: self.goal,
            deadline: self.deadline,
            amount_raised: self.amount_raised,
            goal_reached: self.goal_reached,
            closed: self.closed,
            contributor_count: self.contributors.len(),
            milestone_count: self.milestones.len(),
        }
    }
}

// Custom Errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization and registry errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotFound = 3,
    Unauthorized = 4,
    ZeroAmount = 5,
    InvalidDuration = 6,
    // Funding errors
    CampaignClosed = 101,
    CampaignEnded = 102,
    CampaignStillActive = 103,
    GoalWasReached = 104,
    NothingToRefund = 105,
    // Milestone and release errors
    GoalNotReached = 201,
    NotAContributor = 202,
    AlreadyApproved = 203,
    AlreadyReleased = 204,
    InsufficientQuorum = 205,
    InsufficientPoolBalance = 206,
    // External transfer errors
    TransferFailed = 301,
}
