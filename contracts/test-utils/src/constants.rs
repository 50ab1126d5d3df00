//! Time and amount units shared by the test suites.
//!
//! Amounts are 18-decimal base units, so `ONE_THOUSAND` is one thousand
//! whole tokens.

use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use lock_with_reward::constants::MANTISSA;

pub const ONE_DAY: u64 = 24 * 60 * 60;
pub const ONE_YEAR_IN_SECS: u64 = 365 * ONE_DAY;
pub const ONE_GWEI: i128 = 1_000_000_000;

pub const ONE_THOUSAND: i128 = 1_000 * MANTISSA;
pub const TWO_THOUSAND: i128 = 2_000 * MANTISSA;
pub const ONE_HUNDRED_THOUSAND: i128 = 100_000 * MANTISSA;
pub const NINE_HUNDRED_THOUSAND: i128 = 900_000 * MANTISSA;
pub const ONE_MILLION: i128 = 1_000_000 * MANTISSA;
pub const ONE_TRILLION: i128 = 1_000_000_000 * MANTISSA;

/// Length of the window the lifecycle tests open: a little over 20 days.
pub const LOCK_WINDOW_SECS: u64 = 1_730_000;

/// How far the "after the window" phases jump forward.
pub const PAST_WINDOW_SECS: u64 = 2_000_000;

/// Wall-clock Unix time in seconds, captured once per test binary.
///
/// Every fixture starts its ledger at this instant so tests can express
/// windows relative to it.
pub fn unix_time_in_second() -> u64 {
    static SNAPSHOT: OnceLock<u64> = OnceLock::new();
    *SNAPSHOT.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    })
}
