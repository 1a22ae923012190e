use anchor_lang::prelude::*;

use crate::constants::VOTING_POWER_SEED;
use crate::state::VotingPower;

pub fn mint_voting_power(ctx: Context<AdjustVotingPower>, to: Pubkey, amount: u64) -> Result<()> {
    let voting_power_key = ctx.accounts.voting_power.key();
    let minter = ctx.accounts.minter.key();
    let vp = &mut ctx.accounts.voting_power;
    vp.mint(&minter, &to, amount)?;

    emit!(VotingPowerMinted {
        voting_power: voting_power_key,
        minter,
        to,
        amount,
        balance: vp.balance_of(&to),
    });
    Ok(())
}

pub fn burn_voting_power(ctx: Context<AdjustVotingPower>, from: Pubkey, amount: u64) -> Result<()> {
    let voting_power_key = ctx.accounts.voting_power.key();
    let minter = ctx.accounts.minter.key();
    let vp = &mut ctx.accounts.voting_power;
    vp.burn(&minter, &from, amount)?;

    emit!(VotingPowerBurned {
        voting_power: voting_power_key,
        minter,
        from,
        amount,
        balance: vp.balance_of(&from),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AdjustVotingPower<'info> {
    #[account(
        mut,
        seeds = [VOTING_POWER_SEED, voting_power.authority.as_ref()],
        bump = voting_power.bump
    )]
    pub voting_power: Account<'info, VotingPower>,

    /// Must be in the authorized set.
    pub minter: Signer<'info>,
}

#[event]
pub struct VotingPowerMinted {
    pub voting_power: Pubkey,
    pub minter: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

#[event]
pub struct VotingPowerBurned {
    pub voting_power: Pubkey,
    pub minter: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
    pub balance: u64,
}
