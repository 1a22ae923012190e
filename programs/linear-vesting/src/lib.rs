use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::UserVestInfo;

declare_id!("CtaGrswBoBjKRMCANMRZDSYF2JT64frRACvt12bhQY6u");

#[program]
pub mod linear_vesting {
    use super::*;

    /// Create a vesting ledger and its vault. Pass `voting_power` for a
    /// restricted program, `None` for a standard one.
    pub fn initialize_ledger(
        ctx: Context<InitializeLedger>,
        ledger_id: u64,
        duration: i64,
        voting_power: Option<Pubkey>,
    ) -> Result<()> {
        instructions::initialize_ledger(ctx, ledger_id, duration, voting_power)
    }

    /// Set absolute vest amounts while the ledger is pending.
    pub fn set_vests(ctx: Context<SetVests>, members: Vec<Pubkey>, amounts: Vec<u64>) -> Result<()> {
        instructions::set_vests(ctx, members, amounts)
    }

    /// Pull the committed total into the vault and start the clock.
    pub fn begin(ctx: Context<Begin>) -> Result<()> {
        instructions::begin(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Move unclaimed entitlement between members.
    pub fn transfer_vest(
        ctx: Context<TransferVest>,
        source: Pubkey,
        destination: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::transfer_vest(ctx, source, destination, amount)
    }

    pub fn get_claim(ctx: Context<ReadLedger>, member: Pubkey) -> Result<u64> {
        instructions::get_claim(ctx, member)
    }

    pub fn total(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::total(ctx)
    }

    pub fn user_vest(ctx: Context<ReadLedger>, member: Pubkey) -> Result<UserVestInfo> {
        instructions::user_vest(ctx, member)
    }

    pub fn initialize_voting_power(ctx: Context<InitializeVotingPower>) -> Result<()> {
        instructions::initialize_voting_power(ctx)
    }

    pub fn set_authorized(ctx: Context<SetAuthorized>, account: Pubkey, authorized: bool) -> Result<()> {
        instructions::set_authorized(ctx, account, authorized)
    }

    pub fn mint_voting_power(ctx: Context<AdjustVotingPower>, to: Pubkey, amount: u64) -> Result<()> {
        instructions::mint_voting_power(ctx, to, amount)
    }

    pub fn burn_voting_power(ctx: Context<AdjustVotingPower>, from: Pubkey, amount: u64) -> Result<()> {
        instructions::burn_voting_power(ctx, from, amount)
    }
}
