use anchor_lang::prelude::*;

use crate::error::RewardError;
use crate::state::Config;

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let config = &mut ctx.accounts.config;

    // First touch creates the singleton with defaults and records the admin.
    if config.admin == Pubkey::default() {
        config.admin = ctx.accounts.admin.key();
    }
    require_keys_eq!(
        ctx.accounts.admin.key(),
        config.admin,
        RewardError::UnauthorizedAdmin
    );

    config.paused = paused;

    emit!(PausedSet {
        admin: config.admin,
        paused,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Config::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PausedSet {
    pub admin: Pubkey,
    pub paused: bool,
}
