//! Address derivation for the program's accounts.
//!
//! On-chain the same seeds are checked by the account constraints; these helpers are for
//! off-chain clients building instructions, and for tests. Collisions are the uniqueness
//! rule: one vesting account per company name, one employee record per
//! (beneficiary, vesting account).

use anchor_lang::prelude::*;

use crate::constants::{EMPLOYEE_VESTING_SEED, VESTING_TREASURY_SEED};

pub fn find_vesting_account_address(company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[company_name.as_bytes()], &crate::ID)
}

pub fn find_treasury_address(company_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VESTING_TREASURY_SEED, company_name.as_bytes()],
        &crate::ID,
    )
}

pub fn find_employee_account_address(
    beneficiary: &Pubkey,
    vesting_account: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            EMPLOYEE_VESTING_SEED,
            beneficiary.as_ref(),
            vesting_account.as_ref(),
        ],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_client_seeds() {
        let (vesting, _) = find_vesting_account_address("coral");
        let (expected, _) = Pubkey::find_program_address(&[b"coral"], &crate::ID);
        assert_eq!(vesting, expected);

        let (treasury, _) = find_treasury_address("coral");
        let (expected, _) =
            Pubkey::find_program_address(&[b"vesting_treasury", b"coral"], &crate::ID);
        assert_eq!(treasury, expected);

        let beneficiary = Pubkey::new_unique();
        let (employee, _) = find_employee_account_address(&beneficiary, &vesting);
        let (expected, _) = Pubkey::find_program_address(
            &[b"employee_vesting", beneficiary.as_ref(), vesting.as_ref()],
            &crate::ID,
        );
        assert_eq!(employee, expected);
    }

    #[test]
    fn deterministic() {
        let (a, bump_a) = find_vesting_account_address("coral");
        let (b, bump_b) = find_vesting_account_address("coral");
        assert_eq!((a, bump_a), (b, bump_b));
        assert_eq!(find_treasury_address("coral"), find_treasury_address("coral"));
    }

    #[test]
    fn one_address_per_company() {
        let (coral, _) = find_vesting_account_address("coral");
        let (reef, _) = find_vesting_account_address("reef");
        assert_ne!(coral, reef);
        assert_ne!(find_treasury_address("coral").0, find_treasury_address("reef").0);
        assert_ne!(coral, find_treasury_address("coral").0);
    }

    #[test]
    fn one_record_per_beneficiary_and_company() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let (coral, _) = find_vesting_account_address("coral");
        let (reef, _) = find_vesting_account_address("reef");

        let alice_coral = find_employee_account_address(&alice, &coral).0;
        assert_eq!(alice_coral, find_employee_account_address(&alice, &coral).0);
        assert_ne!(alice_coral, find_employee_account_address(&bob, &coral).0);
        assert_ne!(alice_coral, find_employee_account_address(&alice, &reef).0);
    }
}
