//! Time manipulation helpers.
//!
//! Provides functions to manipulate time in tests.

use soroban_sdk::{testutils::Ledger, Env};

/// Gets the current ledger timestamp.
pub fn current_time(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Advances the ledger timestamp by the specified number of seconds.
///
/// # Example
/// ```rust,no_run
/// # use soroban_sdk::Env;
/// # use test_utils::time::advance_time;
/// # let env = Env::default();
/// advance_time(&env, 3600); // Advance by 1 hour
/// ```
pub fn advance_time(env: &Env, seconds: u64) {
    let current = env.ledger().timestamp();
    env.ledger().set_timestamp(current + seconds);
}

/// Sets the ledger timestamp to a specific value.
pub fn set_ledger_time(env: &Env, timestamp: u64) {
    env.ledger().set_timestamp(timestamp);
}

/// Ledger sequence far enough ahead for an allowance to outlive a test.
pub fn allowance_expiration(env: &Env) -> u32 {
    env.ledger().sequence() + 10_000
}
