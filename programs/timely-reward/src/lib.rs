use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod timely_reward {
    use super::*;

    /// Pause or unpause schedule creation and claims. Creates the config
    /// singleton with defaults on first use.
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    /// Configure the SPL mint rewards are paid in. Creates the config
    /// singleton with defaults on first use. Existing schedules keep vesting;
    /// claims always pay in the currently configured mint.
    pub fn set_token(ctx: Context<SetToken>) -> Result<()> {
        instructions::set_token::set_token(ctx)
    }

    /// Create one linearly-unlocking schedule per recipient, each for the full
    /// `quantity`, and escrow the total in the program vault. All-or-nothing:
    /// any invalid entry aborts the whole batch.
    pub fn add_reward(
        ctx: Context<AddReward>,
        recipients: Vec<Pubkey>,
        quantity: u64,
        unlock_start: i64,
        unlock_days: u16,
    ) -> Result<()> {
        instructions::add_reward::add_reward(ctx, recipients, quantity, unlock_start, unlock_days)
    }

    /// Pay out the caller's unlocked-but-unclaimed rewards. A partial claim
    /// advances the watermark; a full claim removes the schedule.
    pub fn claim(ctx: Context<Claim>, user: Pubkey) -> Result<()> {
        instructions::claim::claim(ctx, user)
    }
}
