use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Topic shared by every event of this contract.
pub const CAMPAIGN: Symbol = symbol_short!("CAMPAIGN");

// Per-event topics.
pub const CREATED: Symbol = symbol_short!("created");
pub const CONTRIB: Symbol = symbol_short!("contrib");
pub const GOAL: Symbol = symbol_short!("goal");
pub const REFUNDED: Symbol = symbol_short!("refunded");
pub const PROPOSED: Symbol = symbol_short!("proposed");
pub const APPROVED: Symbol = symbol_short!("approved");
pub const RELEASED: Symbol = symbol_short!("released");
pub const CLOSED: Symbol = symbol_short!("closed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
    pub amount_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalReached {
    pub campaign_id: u32,
    pub amount_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundClaimed {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneProposed {
    pub campaign_id: u32,
    pub milestone_index: u32,
    pub release_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneApproved {
    pub campaign_id: u32,
    pub milestone_index: u32,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsReleased {
    pub campaign_id: u32,
    pub milestone_index: u32,
    pub creator: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClosed {
    pub campaign_id: u32,
    pub creator: Address,
    pub timestamp: u64,
}

pub fn campaign_created(env: &Env, data: CampaignCreated) {
    env.events()
        .publish((CAMPAIGN, CREATED, data.campaign_id), data);
}

pub fn contribution_made(env: &Env, data: ContributionMade) {
    env.events()
        .publish((CAMPAIGN, CONTRIB, data.campaign_id), data);
}

pub fn goal_reached(env: &Env, data: GoalReached) {
    env.events().publish((CAMPAIGN, GOAL, data.campaign_id), data);
}

pub fn refund_claimed(env: &Env, data: RefundClaimed) {
    env.events()
        .publish((CAMPAIGN, REFUNDED, data.campaign_id), data);
}

pub fn milestone_proposed(env: &Env, data: MilestoneProposed) {
    env.events()
        .publish((CAMPAIGN, PROPOSED, data.campaign_id), data);
}

pub fn milestone_approved(env: &Env, data: MilestoneApproved) {
    env.events()
        .publish((CAMPAIGN, APPROVED, data.campaign_id), data);
}

pub fn funds_released(env: &Env, data: FundsReleased) {
    env.events()
        .publish((CAMPAIGN, RELEASED, data.campaign_id), data);
}

pub fn campaign_closed(env: &Env, data: CampaignClosed) {
    env.events()
        .publish((CAMPAIGN, CLOSED, data.campaign_id), data);
}
