use anchor_lang::prelude::*;

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::ledger::{hook_for, AdminKey, Ledger};
use crate::state::{VestingLedger, VotingPower};

pub fn set_vests(ctx: Context<SetVests>, members: Vec<Pubkey>, amounts: Vec<u64>) -> Result<()> {
    let ledger_key = ctx.accounts.ledger.key();
    let accounts = &mut *ctx.accounts;
    let voting_power_key = accounts.voting_power.as_ref().map(|vp| vp.key());
    require!(
        voting_power_key == accounts.ledger.voting_power,
        VestingError::VotingPowerMismatch
    );

    let gate = AdminKey(accounts.ledger.admin);
    let hook = hook_for(ledger_key, accounts.voting_power.as_deref_mut());
    let mut ledger = Ledger::new(&mut accounts.ledger, gate, hook);
    ledger.set_vests(&accounts.admin.key(), &members, &amounts)?;
    let draft_total = ledger.state().total()?;

    emit!(VestsSet {
        ledger: ledger_key,
        members,
        amounts,
        draft_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetVests<'info> {
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
pub struct VestsSet {
    pub ledger: Pubkey,
    pub members: Vec<Pubkey>,
    pub amounts: Vec<u64>,
    pub draft_total: u64,
}
