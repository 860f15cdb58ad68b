use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::CLAIM_MEMO;
use crate::error::RewardError;
use crate::state::{Config, Rewards};
use crate::utils::vesting;

pub fn claim(ctx: Context<Claim>, user: Pubkey) -> Result<()> {
    // Capture the vault authority before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    require_keys_eq!(
        ctx.accounts.user.key(),
        user,
        RewardError::UnauthorizedUser
    );

    let config = &ctx.accounts.config;
    require!(config.token_configured(), RewardError::NotInitialized);
    require!(!config.paused, RewardError::Paused);

    // Payouts use the mint configured at claim time, not at schedule creation.
    require_keys_eq!(
        ctx.accounts.mint.key(),
        config.token_mint,
        RewardError::SymbolMismatch
    );
    require_keys_eq!(
        ctx.accounts.recipient_wallet.mint,
        config.token_mint,
        RewardError::SymbolMismatch
    );
    require_keys_eq!(
        ctx.accounts.recipient_wallet.owner,
        user,
        RewardError::InvalidTokenAccount
    );

    let now = Clock::get()?.unix_timestamp;

    let rewards = &mut ctx.accounts.rewards;
    let idx = rewards.position(&user).ok_or(RewardError::NoSchedule)?;
    let schedule = rewards.schedules[idx];

    let payable = vesting::claimable_amount(&schedule, now)?;
    let remaining = schedule
        .remaining_rewards
        .checked_sub(payable)
        .ok_or(RewardError::MathOverflow)?;

    let closed = remaining == 0;
    if closed {
        // Full payout: the row is terminal. The user must be re-added via
        // add_reward to receive anything further.
        rewards.schedules.remove(idx);
    } else {
        let row = &mut rewards.schedules[idx];
        row.remaining_rewards = remaining;
        row.last_claim = now;
    }

    require!(
        ctx.accounts.vault.amount >= payable,
        RewardError::InsufficientVaultBalance
    );

    // Exactly one transfer per claim, fired even when payable is zero.
    let signer_seeds: &[&[&[u8]]] = &[&[b"config", &[config_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.recipient_wallet.to_account_info(),
                authority: config_ai,
            },
            signer_seeds,
        ),
        payable,
    )?;
    msg!("{}", CLAIM_MEMO);

    emit!(RewardClaimed {
        user,
        amount: payable,
        remaining,
        closed,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [b"config"], bump)]
    pub config: Account<'info, Config>,

    #[account(mut, seeds = [b"rewards"], bump)]
    pub rewards: Box<Account<'info, Rewards>>,

    #[account(
        mut,
        seeds = [b"vault", mint.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_wallet: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct RewardClaimed {
    pub user: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub closed: bool,
}
