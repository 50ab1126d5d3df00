//! Storage keys and typed accessors.
//!
//! Contract-wide state (roles, tokens, configuration, totals) lives in
//! instance storage. Lock positions are per-user persistent entries whose TTL
//! is extended on every write.

use soroban_sdk::{contracttype, Address, Env};

use crate::constants::{
    INSTANCE_TTL_EXTEND_TO, INSTANCE_TTL_THRESHOLD, POSITION_TTL_EXTEND_TO, POSITION_TTL_THRESHOLD,
};
use crate::{Error, LockPosition};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Admin,
    Underlying,
    RewardToken,
    Config,
    TotalLocked,
    RewardLiability,
    Position(Address),
}

/// Admin-tunable lock window and tier boundaries.
///
/// Frozen once the ledger reaches `start_time`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub start_time: u64,
    pub end_time: u64,
    pub level1_amount_threshold: i128,
    pub level2_amount_threshold: i128,
    pub level1_lock_time: u64,
    pub level2_lock_time: u64,
}

impl Config {
    pub fn has_started(&self, now: u64) -> bool {
        now >= self.start_time
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now > self.end_time
    }
}

/// Keeps config, roles and totals alive across long lock windows.
pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn read_config(env: &Env) -> Result<Config, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_underlying(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Underlying)
        .ok_or(Error::NotInitialized)
}

pub fn read_reward_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::RewardToken)
        .ok_or(Error::NotInitialized)
}

pub fn write_tokens(env: &Env, underlying: &Address, reward_token: &Address) {
    env.storage().instance().set(&DataKey::Underlying, underlying);
    env.storage()
        .instance()
        .set(&DataKey::RewardToken, reward_token);
}

pub fn read_position(env: &Env, user: &Address) -> Option<LockPosition> {
    env.storage()
        .persistent()
        .get(&DataKey::Position(user.clone()))
}

pub fn write_position(env: &Env, user: &Address, position: &LockPosition) {
    let key = DataKey::Position(user.clone());
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, POSITION_TTL_THRESHOLD, POSITION_TTL_EXTEND_TO);
}

pub fn remove_position(env: &Env, user: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Position(user.clone()));
}

pub fn read_total_locked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0)
}

pub fn write_total_locked(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalLocked, &total);
}

pub fn read_reward_liability(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::RewardLiability)
        .unwrap_or(0)
}

pub fn write_reward_liability(env: &Env, liability: i128) {
    env.storage()
        .instance()
        .set(&DataKey::RewardLiability, &liability);
}
