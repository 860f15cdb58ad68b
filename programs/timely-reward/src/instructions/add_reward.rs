use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::MAX_SCHEDULES;
use crate::error::RewardError;
use crate::state::{stage_batch, Config, Rewards};
use crate::utils::vesting;

pub fn add_reward(
    ctx: Context<AddReward>,
    recipients: Vec<Pubkey>,
    quantity: u64,
    unlock_start: i64,
    unlock_days: u16,
) -> Result<()> {
    let config = &ctx.accounts.config;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        config.admin,
        RewardError::UnauthorizedAdmin
    );
    require!(config.token_configured(), RewardError::NotInitialized);
    require!(!config.paused, RewardError::Paused);
    require_keys_eq!(
        ctx.accounts.mint.key(),
        config.token_mint,
        RewardError::SymbolMismatch
    );
    require_keys_eq!(
        ctx.accounts.funder_wallet.mint,
        config.token_mint,
        RewardError::SymbolMismatch
    );
    require_keys_eq!(
        ctx.accounts.funder_wallet.owner,
        ctx.accounts.admin.key(),
        RewardError::InvalidTokenAccount
    );

    require!(!recipients.is_empty(), RewardError::EmptyRecipients);
    require!(quantity > 0, RewardError::InvalidQuantity);
    require!(unlock_days > 0, RewardError::ZeroUnlockDays);
    let now = Clock::get()?.unix_timestamp;
    require!(unlock_start > now, RewardError::UnlockStartNotFuture);

    let rate = vesting::daily_rate(quantity, unlock_days)?;

    let rewards = &mut ctx.accounts.rewards;
    require!(
        rewards.schedules.len() + recipients.len() <= MAX_SCHEDULES,
        RewardError::ScheduleListFull
    );

    // Validate the whole batch before committing any row; every recipient gets
    // an independent full allocation.
    let staged = stage_batch(&rewards.schedules, &recipients, quantity, rate, unlock_start)?;

    // Escrow one full quantity per recipient. A failed transfer aborts the
    // batch along with the rows staged above.
    let deposit = vesting::total_deposit(quantity, recipients.len())?;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_wallet.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        deposit,
    )?;

    rewards.schedules.extend(staged);

    emit!(RewardsAdded {
        admin: config.admin,
        recipient_count: recipients.len() as u16,
        quantity_each: quantity,
        deposit,
        unlock_start,
        unlock_days,
        daily_rate: rate,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddReward<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = admin,
        space = Rewards::space(),
        seeds = [b"rewards"],
        bump
    )]
    pub rewards: Box<Account<'info, Rewards>>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vault", mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_wallet: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct RewardsAdded {
    pub admin: Pubkey,
    pub recipient_count: u16,
    pub quantity_each: u64,
    pub deposit: u64,
    pub unlock_start: i64,
    pub unlock_days: u16,
    pub daily_rate: u64,
}
