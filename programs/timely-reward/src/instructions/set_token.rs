use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::error::RewardError;
use crate::state::Config;

pub fn set_token(ctx: Context<SetToken>) -> Result<()> {
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

    // Account validation has already proven the mint exists and is a real SPL
    // mint; a missing or non-mint account never reaches this handler.
    config.token_mint = ctx.accounts.mint.key();
    config.token_decimals = ctx.accounts.mint.decimals;

    emit!(TokenSet {
        admin: config.admin,
        mint: config.token_mint,
        decimals: config.token_decimals,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetToken<'info> {
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Config::SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenSet {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub decimals: u8,
}
