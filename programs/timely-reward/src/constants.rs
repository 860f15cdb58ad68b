//! Program-wide constants.

/// Seconds per day (UTC). Accrual granularity of the daily rate.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Max live schedules stored in the rewards PDA.
pub const MAX_SCHEDULES: usize = 64;

/// Memo attached to every claim payout.
pub const CLAIM_MEMO: &str = "timely reward claim";
