use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::ledger::{hook_for, AdminKey, Ledger};
use crate::state::{VestingLedger, VotingPower};

pub fn transfer_vest(
    ctx: Context<TransferVest>,
    source: Pubkey,
    destination: Pubkey,
    amount: u64,
) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;
    let voting_power_key = accounts.voting_power.as_ref().map(|vp| vp.key());
    require!(
        voting_power_key == accounts.ledger.voting_power,
        VestingError::VotingPowerMismatch
    );

    let gate = AdminKey(accounts.ledger.admin);
    let hook = hook_for(ledger_key, accounts.voting_power.as_deref_mut());
    let mut ledger = Ledger::new(&mut accounts.ledger, gate, hook);
    ledger.transfer_vest(&accounts.admin.key(), &source, &destination, amount, now)?;

    let state = ledger.state();
    emit!(VestTransferred {
        ledger: ledger_key,
        source,
        destination,
        amount,
        source_remaining: state.user_vest(&source).amount,
        destination_remaining: state.user_vest(&destination).amount,
        transferred_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferVest<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref(), ledger.mint.as_ref(), ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(mut)]
    pub voting_power: Option<Account<'info, VotingPower>>,

    pub admin: Signer<'info>,
}

#[event]
pub struct VestTransferred {
    pub ledger: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub source_remaining: u64,
    pub destination_remaining: u64,
    pub transferred_at: i64,
}
