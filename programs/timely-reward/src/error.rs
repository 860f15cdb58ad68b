use anchor_lang::prelude::*;

/// Custom error codes for the timely-reward program.
#[error_code]
pub enum RewardError {
    #[msg("this action is restricted to admin only")]
    UnauthorizedAdmin,

    #[msg("user has not authorized this action")]
    UnauthorizedUser,

    #[msg("reward token has not been configured")]
    NotInitialized,

    #[msg("the contract is currently paused")]
    Paused,

    #[msg("recipients list must not be empty")]
    EmptyRecipients,

    #[msg("quantity must be positive")]
    InvalidQuantity,

    #[msg("unlock_days must be greater than zero")]
    ZeroUnlockDays,

    #[msg("unlock_start must be in the future")]
    UnlockStartNotFuture,

    #[msg("token does not match the configured reward token")]
    SymbolMismatch,

    #[msg("invalid recipient account")]
    InvalidRecipient,

    #[msg("user already has rewards scheduled")]
    AlreadyScheduled,

    #[msg("reward schedule list is full")]
    ScheduleListFull,

    #[msg("user has no rewards to claim")]
    NoSchedule,

    #[msg("rewards are not unlocked yet")]
    NotUnlockedYet,

    #[msg("invalid token account")]
    InvalidTokenAccount,

    #[msg("insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("math overflow")]
    MathOverflow,
}
