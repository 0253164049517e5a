use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::schedule::VestingSchedule;

/// Per-beneficiary vesting record PDA under a `VestingAccount`.
#[account]
#[derive(InitSpace, Debug)]
pub struct EmployeeAccount {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    /// Unix seconds.
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    /// Fixed at creation.
    pub total_amount: u64,
    /// Cumulative claimed; never exceeds the vested amount.
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl EmployeeAccount {
    /// Build a fresh record for `beneficiary`, authorized by the vesting account `owner`.
    pub fn open(
        owner: Pubkey,
        signer: Pubkey,
        beneficiary: Pubkey,
        vesting_account: Pubkey,
        schedule: VestingSchedule,
        bump: u8,
    ) -> Result<Self> {
        require_keys_eq!(signer, owner, VestingError::Unauthorized);
        schedule.validate()?;

        Ok(Self {
            beneficiary,
            vesting_account,
            start_time: schedule.start_time,
            cliff_time: schedule.cliff_time,
            end_time: schedule.end_time,
            total_amount: schedule.total_amount,
            total_withdrawn: 0,
            bump,
        })
    }

    pub fn schedule(&self) -> VestingSchedule {
        VestingSchedule {
            start_time: self.start_time,
            cliff_time: self.cliff_time,
            end_time: self.end_time,
            total_amount: self.total_amount,
        }
    }

    /// Validate a claim by `signer` at `now` and book it.
    ///
    /// Returns the amount the caller must transfer out of the treasury. The record is only
    /// touched once every check has passed.
    pub fn settle_claim(&mut self, signer: Pubkey, now: i64, treasury_balance: u64) -> Result<u64> {
        require_keys_eq!(signer, self.beneficiary, VestingError::Unauthorized);

        let amount = self.schedule().claimable(now, self.total_withdrawn)?;
        require!(amount > 0, VestingError::NothingToClaim);
        require!(
            treasury_balance >= amount,
            VestingError::InsufficientTreasuryBalance
        );

        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(amount)
    }
}
