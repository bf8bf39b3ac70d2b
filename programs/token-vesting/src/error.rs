use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: signer does not match the required authority")]
    Unauthorized,

    #[msg("Invalid schedule: must satisfy start_time <= cliff_time <= end_time")]
    InvalidSchedule,

    #[msg("Invalid company name: must be non-empty and at most 32 bytes")]
    InvalidName,

    #[msg("Account already exists at the derived address")]
    AlreadyExists,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Insufficient treasury funds")]
    InsufficientTreasuryFunds,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Math overflow")]
    MathOverflow,
}
