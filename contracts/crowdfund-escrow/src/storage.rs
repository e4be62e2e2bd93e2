use crate::types::{Campaign, DataKey, Error};
use soroban_sdk::{Address, Env};

/// True once `initialize` has recorded the payout token.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

/// Payout token for the whole registry. Every operation that moves funds
/// resolves it here; before initialization they all fail the same way.
pub fn read_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Allocate the next dense campaign id. Ids start at 0 and are never reused,
/// so an id is valid exactly when it is below the stored count.
pub fn next_campaign_id(env: &Env) -> u32 {
    let id = campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(id + 1));
    id
}

pub fn load_campaign(env: &Env, campaign_id: u32) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Campaign(campaign_id))
        .ok_or(Error::NotFound)
}

pub fn save_campaign(env: &Env, campaign: &Campaign) {
    env.storage()
        .persistent()
        .set(&DataKey::Campaign(campaign.id), campaign);
}
