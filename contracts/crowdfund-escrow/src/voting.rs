use crate::event::{self, MilestoneApproved, MilestoneProposed};
use crate::interface::VotingInterface;
use crate::storage;
use crate::types::{Error, Milestone};
use crate::{CrowdfundEscrow, CrowdfundEscrowArgs, CrowdfundEscrowClient};
use soroban_sdk::{contractimpl, Address, Env, Map, String};

#[contractimpl]
impl VotingInterface for CrowdfundEscrow {
    fn propose_milestone(
        env: Env,
        caller: Address,
        campaign_id: u32,
        description: String,
        release_amount: i128,
    ) -> Result<u32, Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;

        if caller != campaign.creator {
            return Err(Error::Unauthorized);
        }
        if campaign.closed {
            return Err(Error::CampaignClosed);
        }
        if !campaign.goal_reached {
            return Err(Error::GoalNotReached);
        }
        if release_amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        // The pool is not consulted here: several pending milestones may
        // together exceed it, and only release enforces coverage.
        let milestone_index = campaign.milestones.len();
        campaign.milestones.push_back(Milestone {
            description,
            release_amount,
            released: false,
            approval_count: 0,
            approvals: Map::new(&env),
        });
        storage::save_campaign(&env, &campaign);

        event::milestone_proposed(
            &env,
            MilestoneProposed {
                campaign_id,
                milestone_index,
                release_amount,
            },
        );

        Ok(milestone_index)
    }

    fn approve_milestone(
        env: Env,
        caller: Address,
        campaign_id: u32,
        milestone_index: u32,
    ) -> Result<(), Error> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&env, campaign_id)?;
        let mut milestone = campaign
            .milestones
            .get(milestone_index)
            .ok_or(Error::NotFound)?;

        // Voting rights follow the live balance; a refunded contributor
        // holds none.
        if campaign.contributions.get(caller.clone()).unwrap_or(0) == 0 {
            return Err(Error::NotAContributor);
        }
        if milestone.released {
            return Err(Error::AlreadyReleased);
        }
        if milestone.approvals.contains_key(caller.clone()) {
            return Err(Error::AlreadyApproved);
        }

        milestone.approvals.set(caller.clone(), true);
        milestone.approval_count += 1;
        let approval_count = milestone.approval_count;
        campaign.milestones.set(milestone_index, milestone);
        storage::save_campaign(&env, &campaign);

        event::milestone_approved(
            &env,
            MilestoneApproved {
                campaign_id,
                milestone_index,
                approver: caller,
                approval_count,
            },
        );

        Ok(())
    }
}
