use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_TREASURY_SEED};
use crate::state::{EmployeeAccount, VestingAccount};

#[derive(Accounts)]
pub struct ClaimTokens<'info> {
    #[account(mut)]
    pub beneficiary: Signer<'info>,

    // Seeded by the stored beneficiary; the signer is checked in the handler.
    #[account(
        mut,
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
        has_one = treasury_token_account,
        has_one = mint,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = beneficiary,
        associated_token::mint = mint,
        associated_token::authority = beneficiary,
        associated_token::token_program = token_program,
    )]
    pub employee_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

impl<'info> ClaimTokens<'info> {
    pub fn handle(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        // Booked before the transfer; a failed CPI aborts the whole instruction.
        let amount = self.employee_account.settle_claim(
            self.beneficiary.key(),
            now,
            self.treasury_token_account.amount,
        )?;

        let va = &self.vesting_account;
        let signer_seeds: &[&[&[u8]]] = &[&[
            VESTING_TREASURY_SEED,
            va.company_name.as_bytes(),
            &[va.treasury_bump],
        ]];
        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.treasury_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.employee_token_account.to_account_info(),
                    authority: self.treasury_token_account.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            self.mint.decimals,
        )?;

        let employee = &self.employee_account;
        msg!(
            "Claimed {} ({} of {} withdrawn)",
            amount,
            employee.total_withdrawn,
            employee.total_amount
        );
        emit!(TokensClaimed {
            vesting_account: va.key(),
            beneficiary: employee.beneficiary,
            amount,
            total_withdrawn: employee.total_withdrawn,
            total_amount: employee.total_amount,
            claimed_at: now,
        });

        Ok(())
    }
}

#[event]
pub struct TokensClaimed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_withdrawn: u64,
    pub total_amount: u64,
    pub claimed_at: i64,
}
