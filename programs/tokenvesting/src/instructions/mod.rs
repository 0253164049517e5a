pub mod create_vesting_account;
pub mod fund_treasury;
pub mod create_employee_account;
pub mod claim_tokens;
pub mod emit_vesting_quote;

pub use create_vesting_account::*;
pub use fund_treasury::*;
pub use create_employee_account::*;
pub use claim_tokens::*;
pub use emit_vesting_quote::*;
