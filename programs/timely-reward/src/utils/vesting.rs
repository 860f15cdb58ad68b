//! Linear vesting accounting. Pure functions, no accounts, no clock access.
//!
//! Accrual model:
//! - `daily_rate = quantity / unlock_days`, truncating division fixed once at
//!   schedule creation. The truncation loss is permanent: a quantity not evenly
//!   divisible by `unlock_days` can never be claimed in full.
//! - Each claim pays `dt * daily_rate / 86400` for `dt` seconds since the
//!   `last_claim` watermark, truncated per call and clamped to the remaining
//!   balance. Sub-day claims are allowed at any cadence; frequent small claims
//!   truncate more often than one large claim.

use crate::constants::SECONDS_PER_DAY;
use crate::error::RewardError;
use crate::state::RewardSchedule;

/// Per-day unlock amount, fixed at schedule creation.
pub fn daily_rate(quantity: u64, unlock_days: u16) -> Result<u64, RewardError> {
    if unlock_days == 0 {
        return Err(RewardError::ZeroUnlockDays);
    }
    Ok(quantity / unlock_days as u64)
}

/// Unlocked-but-unclaimed amount at `now`, clamped to the remaining balance.
///
/// Claiming before `unlock_start` is a hard failure, not a zero payout. At or
/// after it, `dt = now - last_claim` is non-negative (the watermark only ever
/// advances to a past `now`), and the result never exceeds
/// `remaining_rewards`, so the balance cannot go negative.
pub fn claimable_amount(schedule: &RewardSchedule, now: i64) -> Result<u64, RewardError> {
    if now < schedule.unlock_start {
        return Err(RewardError::NotUnlockedYet);
    }
    let dt = now.saturating_sub(schedule.last_claim).max(0) as u128;
    let accrued = dt
        .checked_mul(schedule.daily_rate as u128)
        .ok_or(RewardError::MathOverflow)?
        / SECONDS_PER_DAY as u128;
    Ok(accrued.min(schedule.remaining_rewards as u128) as u64)
}

/// Vault funding required for a batch: one full `quantity` per recipient.
pub fn total_deposit(quantity: u64, recipients: usize) -> Result<u64, RewardError> {
    let total = (quantity as u128)
        .checked_mul(recipients as u128)
        .ok_or(RewardError::MathOverflow)?;
    u64::try_from(total).map_err(|_| RewardError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const DAY: i64 = SECONDS_PER_DAY;

    fn schedule(remaining: u64, unlock_start: i64, rate: u64, last_claim: i64) -> RewardSchedule {
        RewardSchedule {
            user: Pubkey::new_from_array([7u8; 32]),
            remaining_rewards: remaining,
            unlock_start,
            daily_rate: rate,
            last_claim,
        }
    }

    #[test]
    fn daily_rate_truncates() {
        // 1000.00000000 over 10 days => 100.00000000 per day.
        assert_eq!(daily_rate(100_000_000_000, 10).unwrap(), 10_000_000_000);
        // 100 over 3 days => 33; at most 99 ever claimable via the rate.
        assert_eq!(daily_rate(100, 3).unwrap(), 33);
        assert_eq!(daily_rate(5, 10).unwrap(), 0);
        assert!(matches!(
            daily_rate(100, 0),
            Err(RewardError::ZeroUnlockDays)
        ));
    }

    #[test]
    fn rejects_claim_before_unlock() {
        let s = schedule(1_000, 10 * DAY, 100, 10 * DAY);
        assert!(matches!(
            claimable_amount(&s, 10 * DAY - 1),
            Err(RewardError::NotUnlockedYet)
        ));
    }

    #[test]
    fn claim_exactly_at_unlock_start_pays_zero() {
        let s = schedule(1_000, 10 * DAY, 100, 10 * DAY);
        assert_eq!(claimable_amount(&s, 10 * DAY).unwrap(), 0);
    }

    #[test]
    fn one_full_day_pays_one_daily_rate() {
        // addreward([alice], 1000.00000000, now+1d, 10): one day past unlock
        // start pays exactly one daily rate.
        let s = schedule(100_000_000_000, DAY, 10_000_000_000, DAY);
        assert_eq!(claimable_amount(&s, 2 * DAY).unwrap(), 10_000_000_000);
    }

    #[test]
    fn sub_day_accrual_truncates_in_aggregate() {
        // 1000.00000000 over 7 days, claimed 10 hours after unlock start:
        // rate = 14285714285, payable = 36000 * rate / 86400 = 5952380952,
        // leaving 940.47619048.
        let rate = daily_rate(100_000_000_000, 7).unwrap();
        assert_eq!(rate, 14_285_714_285);
        let s = schedule(100_000_000_000, 0, rate, 0);
        let payable = claimable_amount(&s, 10 * 3600).unwrap();
        assert_eq!(payable, 5_952_380_952);
        assert_eq!(100_000_000_000 - payable, 94_047_619_048);
    }

    #[test]
    fn clamps_to_remaining_balance() {
        let s = schedule(250, 0, 100, 0);
        // 30 days elapsed would accrue 3000; only the balance is payable.
        assert_eq!(claimable_amount(&s, 30 * DAY).unwrap(), 250);
    }

    #[test]
    fn back_to_back_claims_pay_zero() {
        // Watermark advanced to now: a second claim with no time elapsed
        // accrues nothing.
        let s = schedule(900, 0, 100, 5 * DAY);
        assert_eq!(claimable_amount(&s, 5 * DAY).unwrap(), 0);
    }

    #[test]
    fn truncation_never_double_counts() {
        // Two half-day claims pay no more than one full-day claim.
        let rate = 101;
        let whole = claimable_amount(&schedule(10_000, 0, rate, 0), DAY).unwrap();

        let first = claimable_amount(&schedule(10_000, 0, rate, 0), DAY / 2).unwrap();
        let second =
            claimable_amount(&schedule(10_000 - first, 0, rate, DAY / 2), DAY).unwrap();
        assert!(first + second <= whole);
        assert_eq!(whole, rate);
    }

    #[test]
    fn full_period_claims_out_truncated_total() {
        // 100 over 3 days at rate 33: well past the end, everything the rate
        // can ever unlock is 99, clamped by remaining = 100 only at 100.
        let s = schedule(100, 0, 33, 0);
        assert_eq!(claimable_amount(&s, 3 * DAY).unwrap(), 99);
        // A couple more days eventually covers the truncation remainder too,
        // since accrual keeps running against the balance.
        assert_eq!(claimable_amount(&s, 5 * DAY).unwrap(), 100);
    }

    #[test]
    fn total_deposit_is_per_recipient() {
        assert_eq!(total_deposit(500, 3).unwrap(), 1_500);
        assert!(matches!(
            total_deposit(u64::MAX, 2),
            Err(RewardError::MathOverflow)
        ));
    }
}
