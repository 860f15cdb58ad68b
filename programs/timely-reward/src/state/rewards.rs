use anchor_lang::prelude::*;

use crate::constants::MAX_SCHEDULES;
use crate::error::RewardError;

/// A single per-user vesting schedule.
///
/// `remaining_rewards` only ever decreases; the row is removed outright once it
/// reaches zero on a full claim. `last_claim` is the accrual watermark: it
/// starts at `unlock_start` and advances to the claim time on every partial
/// claim, so paid-out seconds are never counted twice.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardSchedule {
    pub user: Pubkey,
    pub remaining_rewards: u64,
    pub unlock_start: i64,
    /// Amount unlocked per full day, fixed at creation: `quantity / unlock_days`
    /// with truncating division.
    pub daily_rate: u64,
    pub last_claim: i64,
}

impl RewardSchedule {
    pub const SIZE: usize =
        32 + // user
        8 +  // remaining_rewards
        8 +  // unlock_start
        8 +  // daily_rate
        8;   // last_claim
}

/// PDA holding every live schedule, keyed by user (seeds `[b"rewards"]`).
/// At most one live schedule per user.
#[account]
pub struct Rewards {
    pub schedules: Vec<RewardSchedule>,
}

impl Rewards {
    /// Discriminator + vec length prefix + fixed capacity.
    pub const fn space() -> usize {
        8 + 4 + MAX_SCHEDULES * RewardSchedule::SIZE
    }

    pub fn position(&self, user: &Pubkey) -> Option<usize> {
        self.schedules.iter().position(|s| s.user == *user)
    }
}

/// Validate a whole `add_reward` batch and build the rows to insert.
///
/// Nothing is committed here; the caller only extends the ledger with the
/// returned rows after every entry has passed, which is what makes the batch
/// all-or-nothing. Every recipient gets an independent full `quantity`, not a
/// share of a pooled pot.
pub fn stage_batch(
    existing: &[RewardSchedule],
    recipients: &[Pubkey],
    quantity: u64,
    daily_rate: u64,
    unlock_start: i64,
) -> Result<Vec<RewardSchedule>> {
    let mut staged = Vec::with_capacity(recipients.len());
    for (i, user) in recipients.iter().enumerate() {
        if *user == Pubkey::default() {
            return Err(RewardError::InvalidRecipient.into());
        }
        // No upsert: a live schedule blocks re-adding, and so does a duplicate
        // earlier in the same batch.
        if existing.iter().any(|s| s.user == *user) || recipients[..i].contains(user) {
            return Err(RewardError::AlreadyScheduled.into());
        }
        staged.push(RewardSchedule {
            user: *user,
            remaining_rewards: quantity,
            unlock_start,
            daily_rate,
            last_claim: unlock_start,
        });
    }
    Ok(staged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    fn schedule(user: Pubkey) -> RewardSchedule {
        RewardSchedule {
            user,
            remaining_rewards: 100,
            unlock_start: 1_000,
            daily_rate: 10,
            last_claim: 1_000,
        }
    }

    #[test]
    fn stages_whole_batch() {
        let staged = stage_batch(&[], &[pk(1), pk(2)], 500, 50, 2_000).unwrap();
        assert_eq!(staged.len(), 2);
        for s in &staged {
            assert_eq!(s.remaining_rewards, 500);
            assert_eq!(s.daily_rate, 50);
            assert_eq!(s.unlock_start, 2_000);
            // Watermark starts at unlock start.
            assert_eq!(s.last_claim, 2_000);
        }
        assert_eq!(staged[0].user, pk(1));
        assert_eq!(staged[1].user, pk(2));
    }

    #[test]
    fn rejects_user_with_live_schedule() {
        let existing = [schedule(pk(1))];
        let res = stage_batch(&existing, &[pk(2), pk(1)], 500, 50, 2_000);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_duplicate_within_batch() {
        let res = stage_batch(&[], &[pk(3), pk(3)], 500, 50, 2_000);
        assert!(res.is_err());
    }

    #[test]
    fn rejects_default_pubkey() {
        let res = stage_batch(&[], &[Pubkey::default()], 500, 50, 2_000);
        assert!(res.is_err());
    }

    #[test]
    fn position_finds_user() {
        let rewards = Rewards {
            schedules: vec![schedule(pk(1)), schedule(pk(2))],
        };
        assert_eq!(rewards.position(&pk(2)), Some(1));
        assert_eq!(rewards.position(&pk(9)), None);
    }
}
