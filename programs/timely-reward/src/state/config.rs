use anchor_lang::prelude::*;

/// Configuration singleton PDA (seeds `[b"config"]`).
///
/// Created lazily with defaults by whichever admin action runs first.
/// Also the signing authority for the reward vault.
#[account]
pub struct Config {
    /// Admin authority, recorded when the PDA is first created.
    pub admin: Pubkey,
    /// Global kill-switch for schedule creation and claims.
    pub paused: bool,
    /// SPL mint rewards are denominated in. Default pubkey until `set_token`.
    pub token_mint: Pubkey,
    /// Decimals of the configured mint, captured at `set_token` time.
    pub token_decimals: u8,
}

impl Config {
    pub const SIZE: usize =
        32 + // admin
        1 +  // paused
        32 + // token_mint
        1;   // token_decimals

    /// The reward token must be configured before schedules or claims exist.
    pub fn token_configured(&self) -> bool {
        self.token_mint != Pubkey::default()
    }
}
