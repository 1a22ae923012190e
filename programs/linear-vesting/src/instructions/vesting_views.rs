use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::state::{UserVestInfo, VestingLedger};

pub fn get_claim(ctx: Context<ReadLedger>, member: Pubkey) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let claimable = ctx.accounts.ledger.claimable(&member, now)?;
    msg!("get_claim: {} may claim {}", member, claimable);
    Ok(claimable)
}

pub fn total(ctx: Context<ReadLedger>) -> Result<u64> {
    ctx.accounts.ledger.total()
}

pub fn user_vest(ctx: Context<ReadLedger>, member: Pubkey) -> Result<UserVestInfo> {
    Ok(ctx.accounts.ledger.user_vest(&member))
}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.admin.as_ref(), ledger.mint.as_ref(), ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,
}
