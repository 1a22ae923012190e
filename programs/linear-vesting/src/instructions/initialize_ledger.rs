use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::state::{LedgerConfig, VestingLedger};

pub fn initialize_ledger(
    ctx: Context<InitializeLedger>,
    ledger_id: u64,
    duration: i64,
    voting_power: Option<Pubkey>,
) -> Result<()> {
    let ledger = VestingLedger::new(LedgerConfig {
        admin: ctx.accounts.admin.key(),
        mint: ctx.accounts.mint.key(),
        vault: ctx.accounts.vault.key(),
        voting_power,
        ledger_id,
        duration,
        bump: ctx.bumps.ledger,
        vault_bump: ctx.bumps.vault,
    })?;
    ctx.accounts.ledger.set_inner(ledger);

    let ledger = &ctx.accounts.ledger;
    msg!(
        "initialize_ledger: id {} duration {}s restricted {}",
        ledger_id,
        duration,
        ledger.voting_power.is_some()
    );

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        admin: ledger.admin,
        mint: ledger.mint,
        vault: ledger.vault,
        voting_power: ledger.voting_power,
        ledger_id,
        duration,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ledger_id: u64)]
pub struct InitializeLedger<'info> {
    #[account(
        init,
        payer = admin,
        space = VestingLedger::space(),
        seeds = [LEDGER_SEED, admin.key().as_ref(), mint.key().as_ref(), ledger_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = ledger,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub voting_power: Option<Pubkey>,
    pub ledger_id: u64,
    pub duration: i64,
}
