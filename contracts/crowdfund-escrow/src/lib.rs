#![no_std]

mod event;
mod funding;
mod interface;
mod lifecycle;
mod pool;
mod registry;
mod storage;
mod types;
mod voting;


pub use crate::interface::{
    CampaignInterface, FundingInterface, LifecycleInterface, VotingInterface,
};
pub use crate::types::{Campaign, CampaignSummary, Error, Milestone, RewardTier};

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct CrowdfundEscrow;

#[contractimpl]
impl CrowdfundEscrow {
    /// Sets the token all campaigns collect and pay out. Must run once
    /// before any campaign is created; a second call is rejected.
    pub fn initialize(env: Env, token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::write_token(&env, &token);
        Ok(())
    }

    /// The configured payout token.
    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::read_token(&env)
    }
}
