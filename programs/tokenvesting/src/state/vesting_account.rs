use anchor_lang::prelude::*;

use crate::constants::MAX_COMPANY_NAME_LEN;
use crate::error::VestingError;

/// Per-company vesting configuration PDA, seeded by the company name.
#[account]
#[derive(InitSpace)]
pub struct VestingAccount {
    /// Employer authority; the only signer allowed to fund and add employees.
    pub owner: Pubkey,
    /// Mint of the vested token.
    pub mint: Pubkey,
    /// Treasury token account PDA holding unclaimed tokens.
    pub treasury_token_account: Pubkey,
    #[max_len(32)]
    pub company_name: String,
    pub treasury_bump: u8,
    pub bump: u8,
}

impl VestingAccount {
    pub fn validate_company_name(company_name: &str) -> Result<()> {
        require!(
            !company_name.is_empty() && company_name.len() <= MAX_COMPANY_NAME_LEN,
            VestingError::InvalidCompanyName
        );
        Ok(())
    }

    /// Checks a treasury deposit of `amount` by `signer` from a token account holding
    /// `source_mint` and owned by `source_owner`.
    pub fn check_funding(
        &self,
        signer: Pubkey,
        source_mint: Pubkey,
        source_owner: Pubkey,
        amount: u64,
    ) -> Result<()> {
        require!(amount > 0, VestingError::InvalidAmount);
        require_keys_eq!(signer, self.owner, VestingError::Unauthorized);
        require_keys_eq!(source_mint, self.mint, VestingError::InvalidTokenMint);
        require_keys_eq!(source_owner, signer, VestingError::InvalidTokenAccount);
        Ok(())
    }
}
