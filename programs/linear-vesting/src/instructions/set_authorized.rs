use anchor_lang::prelude::*;

use crate::constants::VOTING_POWER_SEED;
use crate::state::VotingPower;

/// Grants or revokes mint/burn rights. A restricted ledger's PDA must be
/// granted here before its first `set_vests`.
pub fn set_authorized(ctx: Context<SetAuthorized>, account: Pubkey, authorized: bool) -> Result<()> {
    let voting_power_key = ctx.accounts.voting_power.key();
    let vp = &mut ctx.accounts.voting_power;
    vp.set_authorized(&ctx.accounts.authority.key(), account, authorized)?;

    emit!(AuthorizationSet {
        voting_power: voting_power_key,
        account,
        authorized,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetAuthorized<'info> {
    #[account(
        mut,
        seeds = [VOTING_POWER_SEED, voting_power.authority.as_ref()],
        bump = voting_power.bump
    )]
    pub voting_power: Account<'info, VotingPower>,

    pub authority: Signer<'info>,
}

#[event]
pub struct AuthorizationSet {
    pub voting_power: Pubkey,
    pub account: Pubkey,
    pub authorized: bool,
}
