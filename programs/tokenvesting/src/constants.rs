//! Program-wide constants.

/// Seed prefix of the treasury token account PDA: `["vesting_treasury", company_name]`.
pub const VESTING_TREASURY_SEED: &[u8] = b"vesting_treasury";

/// Seed prefix of the employee record PDA: `["employee_vesting", beneficiary, vesting_account]`.
pub const EMPLOYEE_VESTING_SEED: &[u8] = b"employee_vesting";

/// Company names are used verbatim as a PDA seed, so they share the per-seed limit.
pub const MAX_COMPANY_NAME_LEN: usize = 32;
