use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_VESTING_SEED;
use crate::state::{EmployeeAccount, VestingAccount};

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [
            EMPLOYEE_VESTING_SEED,
            employee_account.beneficiary.as_ref(),
            vesting_account.key().as_ref()
        ],
        bump = employee_account.bump,
        has_one = vesting_account,
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Account<'info, VestingAccount>,
}

impl<'info> EmitVestingQuote<'info> {
    pub fn handle(&self) -> Result<()> {
        let employee = &self.employee_account;
        let now = Clock::get()?.unix_timestamp;

        let schedule = employee.schedule();
        let vested = schedule.vested_amount(now)?;
        let claimable = schedule.claimable(now, employee.total_withdrawn)?;

        emit!(VestingQuote {
            beneficiary: employee.beneficiary,
            vesting_account: employee.vesting_account,
            quoted_at: now,
            vested_amount: vested,
            total_withdrawn: employee.total_withdrawn,
            claimable,
        });

        Ok(())
    }
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub vesting_account: Pubkey,
    pub quoted_at: i64,
    pub vested_amount: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
}
