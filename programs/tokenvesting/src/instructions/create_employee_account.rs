use anchor_lang::prelude::*;

use crate::constants::EMPLOYEE_VESTING_SEED;
use crate::state::{EmployeeAccount, VestingAccount};
use crate::utils::schedule::VestingSchedule;

#[derive(Accounts)]
pub struct CreateEmployeeAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    pub beneficiary: SystemAccount<'info>,

    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    // One record per (beneficiary, vesting account); `init` rejects a second one.
    #[account(
        init,
        payer = owner,
        space = 8 + EmployeeAccount::INIT_SPACE,
        seeds = [
            EMPLOYEE_VESTING_SEED,
            beneficiary.key().as_ref(),
            vesting_account.key().as_ref()
        ],
        bump
    )]
    pub employee_account: Account<'info, EmployeeAccount>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateEmployeeAccount<'info> {
    pub fn handle(
        &mut self,
        schedule: VestingSchedule,
        bumps: &CreateEmployeeAccountBumps,
    ) -> Result<()> {
        *self.employee_account = EmployeeAccount::open(
            self.vesting_account.owner,
            self.owner.key(),
            self.beneficiary.key(),
            self.vesting_account.key(),
            schedule,
            bumps.employee_account,
        )?;

        msg!(
            "Employee vesting created: {} tokens, {} -> {} (cliff {})",
            schedule.total_amount,
            schedule.start_time,
            schedule.end_time,
            schedule.cliff_time
        );
        emit!(EmployeeVestingCreated {
            vesting_account: self.vesting_account.key(),
            beneficiary: self.beneficiary.key(),
            start_time: schedule.start_time,
            cliff_time: schedule.cliff_time,
            end_time: schedule.end_time,
            total_amount: schedule.total_amount,
        });

        Ok(())
    }
}

#[event]
pub struct EmployeeVestingCreated {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub start_time: i64,
    pub cliff_time: i64,
    pub end_time: i64,
    pub total_amount: u64,
}
