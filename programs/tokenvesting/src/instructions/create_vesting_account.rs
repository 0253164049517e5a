use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::VESTING_TREASURY_SEED;
use crate::state::VestingAccount;

#[derive(Accounts)]
#[instruction(company_name: String)]
pub struct CreateVestingAccount<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    // `init` fails if this company already has a vesting account.
    #[account(
        init,
        payer = signer,
        space = 8 + VestingAccount::INIT_SPACE,
        seeds = [company_name.as_bytes()],
        bump
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = signer,
        token::mint = mint,
        token::authority = treasury_token_account,
        token::token_program = token_program,
        seeds = [VESTING_TREASURY_SEED, company_name.as_bytes()],
        bump
    )]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> CreateVestingAccount<'info> {
    pub fn handle(
        &mut self,
        company_name: String,
        bumps: &CreateVestingAccountBumps,
    ) -> Result<()> {
        VestingAccount::validate_company_name(&company_name)?;

        *self.vesting_account = VestingAccount {
            owner: self.signer.key(),
            mint: self.mint.key(),
            treasury_token_account: self.treasury_token_account.key(),
            company_name,
            treasury_bump: bumps.treasury_token_account,
            bump: bumps.vesting_account,
        };

        let va = &self.vesting_account;
        msg!("Vesting account created for {}", va.company_name);
        emit!(VestingAccountCreated {
            vesting_account: va.key(),
            owner: va.owner,
            mint: va.mint,
            treasury_token_account: va.treasury_token_account,
            company_name: va.company_name.clone(),
        });

        Ok(())
    }
}

#[event]
pub struct VestingAccountCreated {
    pub vesting_account: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub treasury_token_account: Pubkey,
    pub company_name: String,
}
