//! Tiered bonus arithmetic.
//!
//! A position's bonus is `Σ(deposit × duration_bps) × amount_bps / BPS²`:
//! - the duration multiplier is fixed per deposit from the commitment left
//!   until `end_time` at the moment of locking,
//! - the amount multiplier follows the user's cumulative locked amount.
//!
//! Configuration is frozen before the first deposit can happen, so a
//! position's claimable value never moves after its last `lock`.

use crate::constants::{
    BASE_AMOUNT_MULTIPLIER_BPS, BASE_LOCK_TIME_MULTIPLIER_BPS, BPS_DENOMINATOR,
    LEVEL1_AMOUNT_MULTIPLIER_BPS, LEVEL1_LOCK_TIME_MULTIPLIER_BPS, LEVEL2_AMOUNT_MULTIPLIER_BPS,
    LEVEL2_LOCK_TIME_MULTIPLIER_BPS,
};
use crate::storage::Config;
use crate::{Error, LockPosition};

pub fn amount_multiplier_bps(config: &Config, amount: i128) -> i128 {
    if amount >= config.level2_amount_threshold {
        LEVEL2_AMOUNT_MULTIPLIER_BPS
    } else if amount >= config.level1_amount_threshold {
        LEVEL1_AMOUNT_MULTIPLIER_BPS
    } else {
        BASE_AMOUNT_MULTIPLIER_BPS
    }
}

pub fn duration_multiplier_bps(config: &Config, duration: u64) -> i128 {
    if duration >= config.level2_lock_time {
        LEVEL2_LOCK_TIME_MULTIPLIER_BPS
    } else if duration >= config.level1_lock_time {
        LEVEL1_LOCK_TIME_MULTIPLIER_BPS
    } else {
        BASE_LOCK_TIME_MULTIPLIER_BPS
    }
}

/// Seconds a deposit made at `now` stays committed.
pub fn lock_duration(config: &Config, now: u64) -> u64 {
    config.end_time.saturating_sub(now)
}

/// Duration-weighted contribution of a single deposit.
pub fn weigh_deposit(amount: i128, duration_bps: i128) -> Result<i128, Error> {
    amount.checked_mul(duration_bps).ok_or(Error::Overflow)
}

/// Reward-token amount owed for a position.
pub fn claimable(config: &Config, position: &LockPosition) -> Result<i128, Error> {
    let amount_bps = amount_multiplier_bps(config, position.amount);
    let scaled = position
        .weighted_amount
        .checked_mul(amount_bps)
        .ok_or(Error::Overflow)?;
    Ok(scaled / (BPS_DENOMINATOR * BPS_DENOMINATOR))
}
