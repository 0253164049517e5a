#![allow(clippy::result_large_err)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

pub use instructions::*;
use utils::schedule::VestingSchedule;

declare_id!("AsjZ3kWAUSQRNt2pZVeJkywhZ6gpLpHZmJjduPmKZDZZ");

#[program]
pub mod tokenvesting {
    use super::*;

    pub fn create_vesting_account(
        ctx: Context<CreateVestingAccount>,
        company_name: String,
    ) -> Result<()> {
        ctx.accounts.handle(company_name, &ctx.bumps)
    }

    pub fn fund_treasury(ctx: Context<FundTreasury>, amount: u64) -> Result<()> {
        ctx.accounts.handle(amount)
    }

    pub fn create_employee_vesting_account(
        ctx: Context<CreateEmployeeAccount>,
        start_time: i64,
        end_time: i64,
        cliff_time: i64,
        total_amount: u64,
    ) -> Result<()> {
        let schedule = VestingSchedule {
            start_time,
            cliff_time,
            end_time,
            total_amount,
        };
        ctx.accounts.handle(schedule, &ctx.bumps)
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        ctx.accounts.handle()
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        ctx.accounts.handle()
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::{Discriminator, InstructionData};

    use crate::instruction::CreateEmployeeVestingAccount;

    #[test]
    fn employee_vesting_args_keep_client_order() {
        let ix = CreateEmployeeVestingAccount {
            start_time: 1,
            end_time: 2,
            cliff_time: 3,
            total_amount: 4,
        };
        let data = ix.data();
        let disc = CreateEmployeeVestingAccount::DISCRIMINATOR;
        assert_eq!(&data[..disc.len()], disc);

        let args = &data[disc.len()..];
        assert_eq!(args.len(), 32);
        assert_eq!(args[0..8], 1i64.to_le_bytes());
        assert_eq!(args[8..16], 2i64.to_le_bytes());
        assert_eq!(args[16..24], 3i64.to_le_bytes());
        assert_eq!(args[24..32], 4u64.to_le_bytes());
    }
}
