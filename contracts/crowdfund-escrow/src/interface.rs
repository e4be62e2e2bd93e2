use crate::types::{Campaign, CampaignSummary, Error, Milestone, RewardTier};
use soroban_sdk::{Address, Env, String, Vec};

/// CampaignInterface covers campaign creation and every read-only projection
/// exposed to external callers. The contract is the registry: it owns all
/// campaign aggregates, keyed by a dense id that is never reused.
pub trait CampaignInterface {
    /// Creates a new campaign owned by `creator`.
    ///
    /// # Arguments
    /// * `creator` - The campaign owner; must authorize the call
    /// * `goal` - Funding goal in token units, must be positive
    /// * `duration_days` - Funding window length; the deadline is the current
    ///   ledger time plus this many days
    /// * `reward_tiers` - Informational pledge tiers, stored verbatim
    ///
    /// # Returns
    /// * `Result<u32, Error>` - The assigned campaign id
    ///
    /// # Errors
    /// * `NotInitialized` if no payout token has been configured
    /// * `ZeroAmount` if `goal` is not positive
    /// * `InvalidDuration` if `duration_days` is zero
    fn create_campaign(
        env: Env,
        creator: Address,
        goal: i128,
        duration_days: u32,
        reward_tiers: Vec<RewardTier>,
    ) -> Result<u32, Error>;

    /// Total number of campaigns ever created. Valid ids are `0..count`.
    fn get_campaign_count(env: Env) -> u32;

    /// Full campaign aggregate, including the contribution ledger and all
    /// milestones. Fails with `NotFound` for an unknown id.
    fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, Error>;

    /// Compact read-only view of a campaign: creator, goal, deadline, raised
    /// amount, flags, and contributor/milestone counts.
    fn get_campaign_summary(env: Env, campaign_id: u32) -> Result<CampaignSummary, Error>;

    /// Current balance a contributor holds in the campaign ledger. Zero for
    /// addresses that never contributed or were refunded in full.
    fn get_contribution(env: Env, campaign_id: u32, contributor: Address) -> Result<i128, Error>;

    /// Detail of one milestone. Fails with `NotFound` when either the
    /// campaign id or the milestone index is out of range.
    fn get_milestone(env: Env, campaign_id: u32, milestone_index: u32)
        -> Result<Milestone, Error>;

    /// Detail of one reward tier. Fails with `NotFound` when either the
    /// campaign id or the tier index is out of range.
    fn get_reward_tier(env: Env, campaign_id: u32, tier_index: u32) -> Result<RewardTier, Error>;
}

/// FundingInterface is the contribution ledger: money in while the campaign
/// is open, money back out when the goal was missed.
pub trait FundingInterface {
    /// Adds `amount` to the contributor's balance and to the campaign pool.
    ///
    /// # Business Logic
    /// * Accepted only while the campaign is not closed and the deadline has
    ///   not passed; there is no upper bound on the total raised
    /// * A first contribution appends the address to the contributor roster
    /// * Sets the one-way goal flag once the raised amount meets the goal
    /// * The ledger is committed before the token transfer is attempted; a
    ///   failed transfer fails the whole call with `TransferFailed`
    ///
    /// # Errors
    /// * `NotFound`, `CampaignClosed`, `CampaignEnded`, `ZeroAmount`,
    ///   `TransferFailed`
    fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<(), Error>;

    /// Returns the caller's full balance after a failed campaign.
    ///
    /// # Business Logic
    /// * Legal only once the deadline has passed with the goal unmet, both
    ///   checked live at call time; closing a campaign does not affect this
    /// * Zeroes the balance (the roster entry stays), reduces the raised
    ///   amount, then transfers the balance back
    /// * Never touches the goal flag
    ///
    /// # Errors
    /// * `NotFound`, `CampaignStillActive`, `GoalWasReached`,
    ///   `NothingToRefund`, `TransferFailed`
    fn refund(env: Env, contributor: Address, campaign_id: u32) -> Result<(), Error>;
}

/// VotingInterface governs milestone proposals and the one-contributor-one-
/// vote approval set behind each of them.
pub trait VotingInterface {
    /// Appends a milestone to a funded campaign and returns its index.
    ///
    /// # Business Logic
    /// * Creator only, goal must be reached, campaign must not be closed
    /// * The release amount is not checked against the pool here; that
    ///   happens at release time
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`, `CampaignClosed`, `GoalNotReached`,
    ///   `ZeroAmount`
    fn propose_milestone(
        env: Env,
        caller: Address,
        campaign_id: u32,
        description: String,
        release_amount: i128,
    ) -> Result<u32, Error>;

    /// Records one approval for a milestone.
    ///
    /// # Business Logic
    /// * Voter must hold a positive balance right now; a refunded
    ///   contributor cannot vote
    /// * One vote per contributor per milestone, tracked by set membership;
    ///   votes cannot be retracted and are never weighted by amount
    ///
    /// # Errors
    /// * `NotFound`, `NotAContributor`, `AlreadyReleased`, `AlreadyApproved`
    fn approve_milestone(
        env: Env,
        caller: Address,
        campaign_id: u32,
        milestone_index: u32,
    ) -> Result<(), Error>;
}

/// LifecycleInterface holds the two creator-triggered transitions: paying a
/// milestone out of the pool and closing the campaign to new activity.
pub trait LifecycleInterface {
    /// Pays a released milestone's amount from the pool to the creator.
    ///
    /// # Business Logic
    /// * Creator only; the milestone must be unreleased, approved by a strict
    ///   majority of all-time contributors, and covered by the pool
    /// * The released flag is committed before the transfer; release is
    ///   irreversible and cannot be retried with a different amount
    /// * Works on closed campaigns; closing never disables release
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`, `AlreadyReleased`,
    ///   `InsufficientQuorum`, `InsufficientPoolBalance`, `TransferFailed`
    fn release_funds(
        env: Env,
        caller: Address,
        campaign_id: u32,
        milestone_index: u32,
    ) -> Result<(), Error>;

    /// Closes the campaign to new contributions and milestone proposals.
    ///
    /// # Business Logic
    /// * Creator only; no precondition on funds, milestones or deadline, and
    ///   calling it again is a no-op
    /// * Refunds and releases stay governed by their own gates
    ///
    /// # Errors
    /// * `NotFound`, `Unauthorized`
    fn close_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), Error>;
}
