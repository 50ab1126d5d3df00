//! Fixed-point scales, tier multipliers and default configuration.

/// One whole token in base units (18-decimal fixed point).
pub const MANTISSA: i128 = 1_000_000_000_000_000_000;

/// Denominator for every multiplier expressed in basis points.
pub const BPS_DENOMINATOR: i128 = 10_000;

pub const ONE_DAY: u64 = 24 * 60 * 60;

// Amount tier multipliers, applied to the cumulative locked amount.
pub const BASE_AMOUNT_MULTIPLIER_BPS: i128 = 10_000;
pub const LEVEL1_AMOUNT_MULTIPLIER_BPS: i128 = 15_000;
pub const LEVEL2_AMOUNT_MULTIPLIER_BPS: i128 = 20_000;

// Duration tier multipliers, fixed per deposit at lock time.
pub const BASE_LOCK_TIME_MULTIPLIER_BPS: i128 = 10_000;
pub const LEVEL1_LOCK_TIME_MULTIPLIER_BPS: i128 = 13_000;
pub const LEVEL2_LOCK_TIME_MULTIPLIER_BPS: i128 = 16_000;

pub const DEFAULT_LEVEL1_AMOUNT_THRESHOLD: i128 = 100 * MANTISSA;
pub const DEFAULT_LEVEL2_AMOUNT_THRESHOLD: i128 = 10_000 * MANTISSA;
pub const DEFAULT_LEVEL1_LOCK_TIME: u64 = 7 * ONE_DAY;
pub const DEFAULT_LEVEL2_LOCK_TIME: u64 = 30 * ONE_DAY;

/// Roughly one day of ledgers at 5s close time.
pub const POSITION_TTL_THRESHOLD: u32 = 17_280;
pub const POSITION_TTL_EXTEND_TO: u32 = 30 * POSITION_TTL_THRESHOLD;

/// Instance entries (config, roles, totals) are kept alive for about 30 days
/// past every state-changing call.
pub const INSTANCE_TTL_THRESHOLD: u32 = POSITION_TTL_THRESHOLD;
pub const INSTANCE_TTL_EXTEND_TO: u32 = 30 * INSTANCE_TTL_THRESHOLD;
