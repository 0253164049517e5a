use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::state::VestingAccount;

#[derive(Accounts)]
pub struct FundTreasury<'info> {
    #[account(
        seeds = [vesting_account.company_name.as_bytes()],
        bump = vesting_account.bump,
        has_one = treasury_token_account,
        has_one = mint,
    )]
    pub vesting_account: Account<'info, VestingAccount>,

    #[account(mut)]
    pub treasury_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> FundTreasury<'info> {
    pub fn handle(&mut self, amount: u64) -> Result<()> {
        self.vesting_account.check_funding(
            self.owner.key(),
            self.owner_token_account.mint,
            self.owner_token_account.owner,
            amount,
        )?;

        token_interface::transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.owner_token_account.to_account_info(),
                    mint: self.mint.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
            self.mint.decimals,
        )?;

        self.treasury_token_account.reload()?;
        let treasury_balance = self.treasury_token_account.amount;
        msg!("Treasury funded with {}, balance {}", amount, treasury_balance);

        emit!(TreasuryFunded {
            vesting_account: self.vesting_account.key(),
            amount,
            treasury_balance,
        });

        Ok(())
    }
}

#[event]
pub struct TreasuryFunded {
    pub vesting_account: Pubkey,
    pub amount: u64,
    pub treasury_balance: u64,
}
