use anchor_lang::prelude::*;

use crate::constants::VOTING_POWER_SEED;
use crate::state::VotingPower;

pub fn initialize_voting_power(ctx: Context<InitializeVotingPower>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts
        .voting_power
        .set_inner(VotingPower::new(authority, ctx.bumps.voting_power));

    msg!("initialize_voting_power: authority {}", authority);
    emit!(VotingPowerInitialized {
        voting_power: ctx.accounts.voting_power.key(),
        authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVotingPower<'info> {
    #[account(
        init,
        payer = authority,
        space = VotingPower::space(),
        seeds = [VOTING_POWER_SEED, authority.key().as_ref()],
        bump
    )]
    pub voting_power: Account<'info, VotingPower>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VotingPowerInitialized {
    pub voting_power: Pubkey,
    pub authority: Pubkey,
}
