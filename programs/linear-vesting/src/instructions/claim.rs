use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::LEDGER_SEED;
use crate::error::VestingError;
use crate::ledger::{hook_for, AdminKey, Ledger};
use crate::state::{VestingLedger, VotingPower};
use crate::utils::token::TokenVault;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
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
    let voting_power_key = accounts.voting_power.as_ref().map(|vp| vp.key());
    require!(
        voting_power_key == accounts.ledger.voting_power,
        VestingError::VotingPowerMismatch
    );

    let member = accounts.member.key();
    let mut vault = TokenVault {
        token_program: &accounts.token_program,
        vault: &accounts.vault,
        external: &accounts.member_token_account,
        external_authority: accounts.member.to_account_info(),
        ledger: ledger_ai,
        ledger_seeds: signer_seeds,
    };
    let gate = AdminKey(accounts.ledger.admin);
    let hook = hook_for(ledger_key, accounts.voting_power.as_deref_mut());
    let mut ledger = Ledger::new(&mut accounts.ledger, gate, hook);
    let amount = ledger.claim(&member, &mut vault, now)?;
    let remaining = ledger.state().user_vest(&member).amount;

    emit!(VestClaimed {
        ledger: ledger_key,
        member,
        amount,
        remaining,
        claimed_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
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
        constraint = member_token_account.mint == ledger.mint @ VestingError::InvalidTokenMint,
    )]
    pub member_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub voting_power: Option<Account<'info, VotingPower>>,

    pub member: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestClaimed {
    pub ledger: Pubkey,
    pub member: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub claimed_at: i64,
}
