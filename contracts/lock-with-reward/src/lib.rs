//! # Lock With Reward Contract
//!
//! Users lock an underlying token during an admin-configured window and,
//! once the window closes, withdraw their principal together with a bonus
//! paid in a separate reward token.
//!
//! ## Lifecycle
//!
//! ```text
//!   init ──► configuration (admin, while now < start_time)
//!              │ set_time / set_level_amount_threshold / set_level_lock_time
//!              ▼
//!   start_time ──► lock window [start_time, end_time]
//!              │ lock (additive) / withdraw (principal only, bonus forfeited)
//!              ▼
//!   end_time ──► claim_and_withdraw (principal + bonus)
//! ```
//!
//! ## Bonus
//!
//! The bonus is the locked amount scaled by two tier multipliers, see
//! [`bonus`]. The duration tier is fixed per deposit at lock time, so the
//! claimable value does not drift while the window runs.
//!
//! ## Roles
//!
//! - **Owner**: deploying identity, rotates the admin, sweeps surplus rewards.
//! - **Admin**: configures the window and tier thresholds before start.
#![no_std]

pub mod bonus;
pub mod constants;
pub mod events;
mod rbac;
mod security;
pub mod storage;

use events::{
    emit_amount_thresholds_updated, emit_funds_locked, emit_funds_withdrawn, emit_initialized,
    emit_lock_times_updated, emit_reward_claimed, emit_rewards_funded, emit_surplus_recovered,
    emit_time_window_updated, FundsLocked, FundsWithdrawn, LockWithRewardInitialized,
    RewardClaimed, RewardsFunded, SurplusRecovered, TierThresholdsUpdated, TimeWindowUpdated,
};
use rbac::Role;
use security::reentrancy_guard::ReentrancyGuard;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, token, Address, Env};

pub use storage::Config;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    ConfigurationFrozen = 4,
    InvalidTimeWindow = 5,
    InvalidThreshold = 6,
    InvalidAmount = 7,
    LockTimeNotStarted = 8,
    LockTimeHasPassed = 9,
    LockTimeNotEnded = 10,
    NothingLocked = 11,
    InsufficientRewards = 12,
    InvalidTokenPair = 13,
    Overflow = 14,
    ReentrantCall = 15,
}

impl Error {
    /// Human-readable revert reason.
    ///
    /// The configuration message keeps its historical spelling; off-chain
    /// tooling matches on it.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "Already initialized",
            Error::NotInitialized => "Not initialized",
            Error::Unauthorized => "Caller is not authorized",
            Error::ConfigurationFrozen => "Configuartion cannot be changed after starting",
            Error::InvalidTimeWindow => "Start time must be before end time",
            Error::InvalidThreshold => "Level 1 must be positive and below level 2",
            Error::InvalidAmount => "Amount must be greater than zero",
            Error::LockTimeNotStarted => "Lock time not started",
            Error::LockTimeHasPassed => "Lock time has passed",
            Error::LockTimeNotEnded => "Lock time has not ended",
            Error::NothingLocked => "Nothing locked",
            Error::InsufficientRewards => "Insufficient reward balance",
            Error::InvalidTokenPair => "Underlying and reward token must differ",
            Error::Overflow => "Arithmetic overflow",
            Error::ReentrantCall => "Reentrant call",
        }
    }
}

/// A user's accumulated lock.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockPosition {
    /// Principal locked across all deposits, in underlying base units.
    pub amount: i128,
    /// Σ deposit × duration multiplier (bps), see [`bonus::claimable`].
    pub weighted_amount: i128,
    pub first_locked_at: u64,
    pub last_locked_at: u64,
}

#[contract]
pub struct LockWithRewardContract;

#[contractimpl]
impl LockWithRewardContract {
    // ========================================================================
    // Initialization
    // ========================================================================

    /// Initialize the contract with its roles, token pair and lock window.
    ///
    /// Tier thresholds start at the defaults in [`constants`] and can be
    /// changed by the admin until `start_time`.
    pub fn init(
        env: Env,
        owner: Address,
        admin: Address,
        underlying: Address,
        reward_token: Address,
        start_time: u64,
        end_time: u64,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if start_time >= end_time {
            return Err(Error::InvalidTimeWindow);
        }
        if underlying == reward_token {
            return Err(Error::InvalidTokenPair);
        }

        rbac::init_roles(&env, &owner, &admin);
        storage::write_tokens(&env, &underlying, &reward_token);
        storage::write_config(
            &env,
            &Config {
                start_time,
                end_time,
                level1_amount_threshold: constants::DEFAULT_LEVEL1_AMOUNT_THRESHOLD,
                level2_amount_threshold: constants::DEFAULT_LEVEL2_AMOUNT_THRESHOLD,
                level1_lock_time: constants::DEFAULT_LEVEL1_LOCK_TIME,
                level2_lock_time: constants::DEFAULT_LEVEL2_LOCK_TIME,
            },
        );
        storage::write_total_locked(&env, 0);
        storage::write_reward_liability(&env, 0);
        storage::extend_instance(&env);

        emit_initialized(
            &env,
            LockWithRewardInitialized {
                owner,
                admin,
                underlying,
                reward_token,
                start_time,
                end_time,
            },
        );

        Ok(())
    }

    // ========================================================================
    // Admin configuration
    // ========================================================================

    /// Move the lock window. Admin only, before the current `start_time`.
    pub fn set_time(env: Env, caller: Address, start_time: u64, end_time: u64) -> Result<(), Error> {
        let mut config = Self::configurable(&env, &caller)?;
        if start_time >= end_time {
            return Err(Error::InvalidTimeWindow);
        }

        config.start_time = start_time;
        config.end_time = end_time;
        storage::write_config(&env, &config);

        emit_time_window_updated(
            &env,
            TimeWindowUpdated {
                start_time,
                end_time,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Set the cumulative amounts at which the 1.5x and 2.0x amount tiers begin.
    pub fn set_level_amount_threshold(
        env: Env,
        caller: Address,
        level1: i128,
        level2: i128,
    ) -> Result<(), Error> {
        let mut config = Self::configurable(&env, &caller)?;
        if level1 <= 0 || level1 >= level2 {
            return Err(Error::InvalidThreshold);
        }

        config.level1_amount_threshold = level1;
        config.level2_amount_threshold = level2;
        storage::write_config(&env, &config);

        emit_amount_thresholds_updated(
            &env,
            TierThresholdsUpdated {
                level1,
                level2,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Set the remaining-commitment durations at which the 1.3x and 1.6x
    /// duration tiers begin.
    pub fn set_level_lock_time(
        env: Env,
        caller: Address,
        level1: u64,
        level2: u64,
    ) -> Result<(), Error> {
        let mut config = Self::configurable(&env, &caller)?;
        if level1 == 0 || level1 >= level2 {
            return Err(Error::InvalidThreshold);
        }

        config.level1_lock_time = level1;
        config.level2_lock_time = level2;
        storage::write_config(&env, &config);

        emit_lock_times_updated(
            &env,
            TierThresholdsUpdated {
                level1: i128::from(level1),
                level2: i128::from(level2),
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Hand the admin role to another address. Owner only.
    pub fn set_admin(env: Env, owner: Address, new_admin: Address) -> Result<(), Error> {
        rbac::require_owner(&env, &owner)?;
        rbac::grant_admin(&env, &new_admin);
        storage::extend_instance(&env);
        Ok(())
    }

    // ========================================================================
    // User actions
    // ========================================================================

    /// Lock `amount` of the underlying token.
    ///
    /// The user must have approved the contract as spender for at least
    /// `amount`. Repeated locks add to the same position. Fails with
    /// `InsufficientRewards` if the reward pool could not pay every
    /// outstanding bonus after this deposit.
    pub fn lock(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        user.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = storage::read_config(&env)?;
        let now = env.ledger().timestamp();
        if !config.has_started(now) {
            return Err(Error::LockTimeNotStarted);
        }
        if config.has_ended(now) {
            return Err(Error::LockTimeHasPassed);
        }

        let _guard = ReentrancyGuard::enter(&env)?;
        let underlying = storage::read_underlying(&env)?;

        let duration_bps =
            bonus::duration_multiplier_bps(&config, bonus::lock_duration(&config, now));
        let weight = bonus::weigh_deposit(amount, duration_bps)?;

        let previous = storage::read_position(&env, &user);
        let previous_claimable = match &previous {
            Some(position) => bonus::claimable(&config, position)?,
            None => 0,
        };
        let position = match previous {
            Some(mut position) => {
                position.amount = position.amount.checked_add(amount).ok_or(Error::Overflow)?;
                position.weighted_amount = position
                    .weighted_amount
                    .checked_add(weight)
                    .ok_or(Error::Overflow)?;
                position.last_locked_at = now;
                position
            }
            None => LockPosition {
                amount,
                weighted_amount: weight,
                first_locked_at: now,
                last_locked_at: now,
            },
        };
        let claimable = bonus::claimable(&config, &position)?;

        let total_locked = storage::read_total_locked(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let liability = (storage::read_reward_liability(&env) - previous_claimable)
            .checked_add(claimable)
            .ok_or(Error::Overflow)?;

        // Every advertised bonus must stay backed by the pool
        let contract = env.current_contract_address();
        let reward = token::Client::new(&env, &storage::read_reward_token(&env)?);
        if liability > reward.balance(&contract) {
            return Err(Error::InsufficientRewards);
        }

        storage::write_position(&env, &user, &position);
        storage::write_total_locked(&env, total_locked);
        storage::write_reward_liability(&env, liability);
        storage::extend_instance(&env);

        // Pull the approved principal into the contract
        token::Client::new(&env, &underlying).transfer_from(&contract, &user, &contract, &amount);

        emit_funds_locked(
            &env,
            FundsLocked {
                user,
                amount,
                total_locked: position.amount,
                duration_multiplier_bps: duration_bps,
                timestamp: now,
            },
        );

        Ok(())
    }

    /// Return the whole principal and close the position. The bonus is
    /// forfeited.
    pub fn withdraw(env: Env, user: Address) -> Result<(), Error> {
        user.require_auth();
        let config = storage::read_config(&env)?;
        let _guard = ReentrancyGuard::enter(&env)?;

        let position = storage::read_position(&env, &user).ok_or(Error::NothingLocked)?;
        let forfeited_bonus = bonus::claimable(&config, &position)?;
        Self::close_position(&env, &user, &position, forfeited_bonus);
        storage::extend_instance(&env);

        let underlying = storage::read_underlying(&env)?;
        token::Client::new(&env, &underlying).transfer(
            &env.current_contract_address(),
            &user,
            &position.amount,
        );

        emit_funds_withdrawn(
            &env,
            FundsWithdrawn {
                user,
                amount: position.amount,
                forfeited_bonus,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// After `end_time`, return the principal and pay the bonus in the
    /// reward token.
    pub fn claim_and_withdraw(env: Env, user: Address) -> Result<(), Error> {
        user.require_auth();
        let config = storage::read_config(&env)?;
        let now = env.ledger().timestamp();
        if !config.has_ended(now) {
            return Err(Error::LockTimeNotEnded);
        }
        let _guard = ReentrancyGuard::enter(&env)?;

        let position = storage::read_position(&env, &user).ok_or(Error::NothingLocked)?;
        let bonus_amount = bonus::claimable(&config, &position)?;

        let contract = env.current_contract_address();
        let reward = token::Client::new(&env, &storage::read_reward_token(&env)?);
        if reward.balance(&contract) < bonus_amount {
            return Err(Error::InsufficientRewards);
        }

        Self::close_position(&env, &user, &position, bonus_amount);
        storage::extend_instance(&env);

        let underlying = token::Client::new(&env, &storage::read_underlying(&env)?);
        underlying.transfer(&contract, &user, &position.amount);
        if bonus_amount > 0 {
            reward.transfer(&contract, &user, &bonus_amount);
        }

        emit_reward_claimed(
            &env,
            RewardClaimed {
                user,
                principal: position.amount,
                bonus: bonus_amount,
                timestamp: now,
            },
        );
        Ok(())
    }

    // ========================================================================
    // Reward pool
    // ========================================================================

    /// Deposit reward tokens that back future claims.
    pub fn fund_rewards(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let reward_token = storage::read_reward_token(&env)?;
        token::Client::new(&env, &reward_token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        storage::extend_instance(&env);

        emit_rewards_funded(
            &env,
            RewardsFunded {
                from,
                amount,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// After `end_time`, send reward tokens beyond the outstanding liability
    /// to `to`. Owner only. Returns the amount moved.
    pub fn recover_surplus_rewards(env: Env, owner: Address, to: Address) -> Result<i128, Error> {
        rbac::require_owner(&env, &owner)?;
        let config = storage::read_config(&env)?;
        if !config.has_ended(env.ledger().timestamp()) {
            return Err(Error::LockTimeNotEnded);
        }
        let _guard = ReentrancyGuard::enter(&env)?;

        let contract = env.current_contract_address();
        let reward = token::Client::new(&env, &storage::read_reward_token(&env)?);
        let surplus = reward.balance(&contract) - storage::read_reward_liability(&env);
        if surplus <= 0 {
            return Ok(0);
        }

        reward.transfer(&contract, &to, &surplus);
        storage::extend_instance(&env);

        emit_surplus_recovered(
            &env,
            SurplusRecovered {
                to,
                amount: surplus,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(surplus)
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Bonus the user would receive from `claim_and_withdraw`.
    pub fn get_claimable(env: Env, user: Address) -> Result<i128, Error> {
        let config = storage::read_config(&env)?;
        match storage::read_position(&env, &user) {
            Some(position) => bonus::claimable(&config, &position),
            None => Ok(0),
        }
    }

    pub fn total_locked_amount(env: Env, user: Address) -> i128 {
        storage::read_position(&env, &user)
            .map(|position| position.amount)
            .unwrap_or(0)
    }

    pub fn get_position(env: Env, user: Address) -> Option<LockPosition> {
        storage::read_position(&env, &user)
    }

    /// Principal held across all open positions.
    pub fn total_locked(env: Env) -> i128 {
        storage::read_total_locked(&env)
    }

    /// Bonus owed across all open positions.
    pub fn reward_liability(env: Env) -> i128 {
        storage::read_reward_liability(&env)
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::read_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        rbac::get_role_holder(&env, Role::Owner).ok_or(Error::NotInitialized)
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        rbac::get_role_holder(&env, Role::Admin).ok_or(Error::NotInitialized)
    }

    pub fn underlying(env: Env) -> Result<Address, Error> {
        storage::read_underlying(&env)
    }

    pub fn reward_token(env: Env) -> Result<Address, Error> {
        storage::read_reward_token(&env)
    }

    pub fn start_time(env: Env) -> Result<u64, Error> {
        Ok(storage::read_config(&env)?.start_time)
    }

    pub fn end_time(env: Env) -> Result<u64, Error> {
        Ok(storage::read_config(&env)?.end_time)
    }

    pub fn level1_amount_threshold(env: Env) -> Result<i128, Error> {
        Ok(storage::read_config(&env)?.level1_amount_threshold)
    }

    pub fn level2_amount_threshold(env: Env) -> Result<i128, Error> {
        Ok(storage::read_config(&env)?.level2_amount_threshold)
    }

    pub fn level1_lock_time(env: Env) -> Result<u64, Error> {
        Ok(storage::read_config(&env)?.level1_lock_time)
    }

    pub fn level2_lock_time(env: Env) -> Result<u64, Error> {
        Ok(storage::read_config(&env)?.level2_lock_time)
    }
}

impl LockWithRewardContract {
    /// Admin check plus the freeze rule shared by every configuration setter.
    fn configurable(env: &Env, caller: &Address) -> Result<Config, Error> {
        rbac::require_admin(env, caller)?;
        let config = storage::read_config(env)?;
        if config.has_started(env.ledger().timestamp()) {
            return Err(Error::ConfigurationFrozen);
        }
        storage::extend_instance(env);
        Ok(config)
    }

    fn close_position(env: &Env, user: &Address, position: &LockPosition, bonus: i128) {
        storage::remove_position(env, user);
        storage::write_total_locked(env, storage::read_total_locked(env) - position.amount);
        storage::write_reward_liability(env, storage::read_reward_liability(env) - bonus);
    }
}

#[cfg(test)]
mod invariants;
