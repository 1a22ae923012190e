pub mod initialize_ledger;
pub mod set_vests;
pub mod begin;
pub mod claim;
pub mod transfer_vest;
pub mod vesting_views;
pub mod initialize_voting_power;
pub mod set_authorized;
pub mod adjust_voting_power;

pub use initialize_ledger::*;
pub use set_vests::*;
pub use begin::*;
pub use claim::*;
pub use transfer_vest::*;
pub use vesting_views::*;
pub use initialize_voting_power::*;
pub use set_authorized::*;
pub use adjust_voting_power::*;
