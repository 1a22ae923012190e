pub mod vesting_ledger;
pub mod voting_power;

pub use vesting_ledger::*;
pub use voting_power::*;
