use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockWithRewardInitialized {
    pub owner: Address,
    pub admin: Address,
    pub underlying: Address,
    pub reward_token: Address,
    pub start_time: u64,
    pub end_time: u64,
}

pub fn emit_initialized(env: &Env, event: LockWithRewardInitialized) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeWindowUpdated {
    pub start_time: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

pub fn emit_time_window_updated(env: &Env, event: TimeWindowUpdated) {
    let topics = (symbol_short!("set_time"),);
    env.events().publish(topics, event);
}

/// Shared payload for both tier setters; `level1`/`level2` carry amounts or
/// seconds depending on the topic.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TierThresholdsUpdated {
    pub level1: i128,
    pub level2: i128,
    pub timestamp: u64,
}

pub fn emit_amount_thresholds_updated(env: &Env, event: TierThresholdsUpdated) {
    let topics = (symbol_short!("set_amt"),);
    env.events().publish(topics, event);
}

pub fn emit_lock_times_updated(env: &Env, event: TierThresholdsUpdated) {
    let topics = (symbol_short!("set_dur"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminUpdated {
    pub previous_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

pub fn emit_admin_updated(env: &Env, event: AdminUpdated) {
    let topics = (symbol_short!("set_adm"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsLocked {
    pub user: Address,
    pub amount: i128,
    pub total_locked: i128,
    pub duration_multiplier_bps: i128,
    pub timestamp: u64,
}

pub fn emit_funds_locked(env: &Env, event: FundsLocked) {
    let topics = (symbol_short!("locked"), event.user.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub user: Address,
    pub amount: i128,
    pub forfeited_bonus: i128,
    pub timestamp: u64,
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawn) {
    let topics = (symbol_short!("withdrew"), event.user.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimed {
    pub user: Address,
    pub principal: i128,
    pub bonus: i128,
    pub timestamp: u64,
}

pub fn emit_reward_claimed(env: &Env, event: RewardClaimed) {
    let topics = (symbol_short!("claimed"), event.user.clone());
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsFunded {
    pub from: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_rewards_funded(env: &Env, event: RewardsFunded) {
    let topics = (symbol_short!("funded"),);
    env.events().publish(topics, event);
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SurplusRecovered {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

pub fn emit_surplus_recovered(env: &Env, event: SurplusRecovered) {
    let topics = (symbol_short!("recover"),);
    env.events().publish(topics, event);
}
