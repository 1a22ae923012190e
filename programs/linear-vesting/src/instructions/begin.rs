use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::ledger::{AdminKey, Ledger, NoopHook};
use crate::state::VestingLedger;
use crate::utils::token::TokenVault;

pub fn begin(ctx: Context<Begin>) -> Result<()> {
    // Ledger signer seeds are copied out before `accounts` is reborrowed mutably.
    let ledger_ai = ctx.accounts.ledger.to_account_info();
    let ledger_key = ctx.accounts.ledger.key();
    let admin = ctx.accounts.ledger.admin;
    let mint = ctx.accounts.ledger.mint;
    let id_bytes = ctx.accounts.ledger.ledger_id.to_le_bytes();
    let bump = [ctx.accounts.ledger.bump];
    let seeds: &[&[u8]] = &[LEDGER_SEED, admin.as_ref(), mint.as_ref(), &id_bytes, &bump];
    let signer_seeds = &[seeds];

    let now = Clock::get()?.unix_timestamp;
    let accounts = &mut *ctx.accounts;

    let mut vault = TokenVault {
        token_program: &accounts.token_program,
        vault: &accounts.vault,
        external: &accounts.admin_token_account,
        external_authority: accounts.admin.to_account_info(),
        ledger: ledger_ai,
        ledger_seeds: signer_seeds,
    };
    let gate = AdminKey(accounts.ledger.admin);
    let mut ledger = Ledger::new(&mut accounts.ledger, gate, NoopHook);
    let total = ledger.begin(&accounts.admin.key(), &mut vault, now)?;
    let deadline = ledger.state().deadline()?;

    emit!(VestingBegan {
        ledger: ledger_key,
        total_committed: total,
        start_ts: now,
        deadline,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Begin<'info> {
    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.admin.as_ref(), ledger.mint.as_ref(), ledger.ledger_id.to_le_bytes().as_ref()],
        bump = ledger.bump
    )]
    pub ledger: Box<Account<'info, VestingLedger>>,

    #[account(
        mut,
        address = ledger.vault @ VestingError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingBegan {
    pub ledger: Pubkey,
    pub total_committed: u64,
    pub start_ts: i64,
    pub deadline: i64,
}
