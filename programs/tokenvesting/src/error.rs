use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
///
/// Duplicate creation (a second vesting account for a company, or a second record for the
/// same beneficiary) is rejected by the runtime when `init` finds the PDA already allocated.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: signer does not match the expected authority")]
    Unauthorized,

    #[msg("Invalid schedule: require start <= cliff <= end, start < end and amount > 0")]
    InvalidSchedule,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Treasury balance is below the claimable amount")]
    InsufficientTreasuryBalance,

    #[msg("Company name must be 1 to 32 bytes")]
    InvalidCompanyName,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
