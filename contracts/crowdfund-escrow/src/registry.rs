use crate::event::{self, CampaignCreated};
use crate::interface::CampaignInterface;
use crate::storage;
use crate::types::{Campaign, CampaignSummary, Error, Milestone, RewardTier, SECONDS_PER_DAY};
use crate::{CrowdfundEscrow, CrowdfundEscrowArgs, CrowdfundEscrowClient};
use soroban_sdk::{contractimpl, Address, Env, Map, Vec};

#[contractimpl]
impl CampaignInterface for CrowdfundEscrow {
    fn create_campaign(
        env: Env,
        creator: Address,
        goal: i128,
        duration_days: u32,
        reward_tiers: Vec<RewardTier>,
    ) -> Result<u32, Error> {
        creator.require_auth();

        // Campaigns cannot exist before a payout token is configured.
        storage::read_token(&env)?;

        if goal <= 0 {
            return Err(Error::ZeroAmount);
        }
        if duration_days == 0 {
            return Err(Error::InvalidDuration);
        }

        let id = storage::next_campaign_id(&env);
        let deadline = env.ledger().timestamp() + u64::from(duration_days) * SECONDS_PER_DAY;

        let campaign = Campaign {
            id,
            creator: creator.clone(),
            goal,
            deadline,
            amount_raised: 0,
            goal_reached: false,
            closed: false,
            contributions: Map::new(&env),
            contributors: Vec::new(&env),
            reward_tiers,
            milestones: Vec::new(&env),
        };
        storage::save_campaign(&env, &campaign);

        event::campaign_created(
            &env,
            CampaignCreated {
                campaign_id: id,
                creator,
                goal,
                deadline,
            },
        );

        Ok(id)
    }

    fn get_campaign_count(env: Env) -> u32 {
        storage::campaign_count(&env)
    }

    fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    fn get_campaign_summary(env: Env, campaign_id: u32) -> Result<CampaignSummary, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        Ok(campaign.summary())
    }

    fn get_contribution(env: Env, campaign_id: u32, contributor: Address) -> Result<i128, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        Ok(campaign.contributions.get(contributor).unwrap_or(0))
    }

    fn get_milestone(
        env: Env,
        campaign_id: u32,
        milestone_index: u32,
    ) -> Result<Milestone, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        campaign
            .milestones
            .get(milestone_index)
            .ok_or(Error::NotFound)
    }

    fn get_reward_tier(env: Env, campaign_id: u32, tier_index: u32) -> Result<RewardTier, Error> {
        let campaign = storage::load_campaign(&env, campaign_id)?;
        campaign.reward_tiers.get(tier_index).ok_or(Error::NotFound)
    }
}
