use crate::event::{self, CampaignClosed, FundsReleased};
use crate::interface::LifecycleInterface;
use crate::{pool, storage};
use crate::types::Error;
use crate::{CrowdfundEscrow, CrowdfundEscrowArgs, CrowdfundEscrowClient};
use soroban_sdk::{contractimpl, Address, Env};

#[contractimpl]
impl LifecycleInterface for CrowdfundEscrow {
    fn release_funds(
        env: Env,
        caller: Address,
        campaign_id: u32,
        milestone_index: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let token = storage::read_token(&env)?;
        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        if caller != campaign.creator {
            return Err(Error::Unauthorized);
        }

        let mut milestone = campaign
            .milestones
            .get(milestone_index)
            .ok_or(Error::NotFound)?;

        if milestone.released {
            return Err(Error::AlreadyReleased);
        }
        if !campaign.meets_quorum(milestone.approval_count) {
            return Err(Error::InsufficientQuorum);
        }

        // Pool coverage is judged before this milestone is marked released,
        // against raised funds minus everything already paid out.
        if milestone.release_amount > campaign.available_pool() {
            return Err(Error::InsufficientPoolBalance);
        }

        let amount = milestone.release_amount;
        milestone.released = true;
        campaign.milestones.set(milestone_index, milestone);
        storage::save_campaign(&env, &campaign);
        pool::pay_out(&env, &token, &campaign.creator, &amount)?;

        event::funds_released(
            &env,
            FundsReleased {
                campaign_id,
                milestone_index,
                creator: campaign.creator,
                amount,
            },
        );

        Ok(())
    }

    fn close_campaign(env: Env, caller: Address, campaign_id: u32) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        if caller != campaign.creator {
            return Err(Error::Unauthorized);
        }

        // Closing an already-closed campaign is a no-op, not an error.
        if campaign.closed {
            return Ok(());
        }

        campaign.closed = true;
        storage::save_campaign(&env, &campaign);

        event::campaign_closed(
            &env,
            CampaignClosed {
                campaign_id,
                creator: campaign.creator,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }
}
