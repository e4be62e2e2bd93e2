use crate::event::{self, ContributionMade, GoalReached, RefundClaimed};
use crate::interface::FundingInterface;
use crate::{pool, storage};
use crate::types::Error;
use crate::{CrowdfundEscrow, CrowdfundEscrowArgs, CrowdfundEscrowClient};
use soroban_sdk::{contractimpl, Address, Env};

#[contractimpl]
impl FundingInterface for CrowdfundEscrow {
    fn contribute(
        env: Env,
        contributor: Address,
        campaign_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();

        let token = storage::read_token(&env)?;
        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        if campaign.closed {
            return Err(Error::CampaignClosed);
        }
        if env.ledger().timestamp() >= campaign.deadline {
            return Err(Error::CampaignEnded);
        }
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        // First contribution from this address joins the roster. Refunds
        // zero the balance but keep the map key, so no duplicates arise.
        if !campaign.contributions.contains_key(contributor.clone()) {
            campaign.contributors.push_back(contributor.clone());
        }
        let balance = campaign.contributions.get(contributor.clone()).unwrap_or(0);
        campaign.contributions.set(contributor.clone(), balance + amount);
        campaign.amount_raised += amount;

        // One-way flag: set the first time the goal is met, never cleared.
        let goal_reached_now = !campaign.goal_reached && campaign.amount_raised >= campaign.goal;
        if goal_reached_now {
            campaign.goal_reached = true;
        }

        storage::save_campaign(&env, &campaign);
        pool::pay_in(&env, &token, &contributor, &amount)?;

        event::contribution_made(
            &env,
            ContributionMade {
                campaign_id,
                contributor,
                amount,
                amount_raised: campaign.amount_raised,
            },
        );
        if goal_reached_now {
            event::goal_reached(
                &env,
                GoalReached {
                    campaign_id,
                    amount_raised: campaign.amount_raised,
                },
            );
        }

        Ok(())
    }

    fn refund(env: Env, contributor: Address, campaign_id: u32) -> Result<(), Error> {
        contributor.require_auth();

        let token = storage::read_token(&env)?;
        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        // Refunds open exactly when contributions close, and only for
        // campaigns that missed their goal. The goal gate reads the live
        // raised amount, not the one-way flag. `closed` plays no part here.
        if env.ledger().timestamp() < campaign.deadline {
            return Err(Error::CampaignStillActive);
        }
        if campaign.amount_raised >= campaign.goal {
            return Err(Error::GoalWasReached);
        }

        let balance = campaign.contributions.get(contributor.clone()).unwrap_or(0);
        if balance == 0 {
            return Err(Error::NothingToRefund);
        }

        // Zero the balance but keep the roster entry; the all-time
        // contributor count is what quorum is measured against.
        campaign.contributions.set(contributor.clone(), 0);
        campaign.amount_raised -= balance;

        storage::save_campaign(&env, &campaign);
        pool::pay_out(&env, &token, &contributor, &balance)?;

        event::refund_claimed(
            &env,
            RefundClaimed {
                campaign_id,
                contributor,
                amount: balance,
            },
        );

        Ok(())
    }
}
