use anchor_lang::prelude::*;

use crate::constants::{MAX_AUTHORIZED, MAX_HOLDERS};
use crate::error::VestingError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerBalance {
    pub owner: Pubkey,
    pub amount: u64,
}

impl PowerBalance {
    pub const SIZE: usize = 32 + 8;
}

/// Non-transferable voting-power ledger. Balances only move through
/// `mint`/`burn` by an authorized principal; there is no transfer path.
#[account]
pub struct VotingPower {
    /// May grant and revoke mint/burn authorization.
    pub authority: Pubkey,
    pub bump: u8,
    pub total_supply: u64,
    /// Principals allowed to mint and burn.
    pub authorized: Vec<Pubkey>,
    /// Non-zero balances only.
    pub balances: Vec<PowerBalance>,
}

impl VotingPower {
    pub const fn space() -> usize {
        8 +                                  // discriminator
        32 +                                 // authority
        1 +                                  // bump
        8 +                                  // total_supply
        4 + MAX_AUTHORIZED * 32 +            // authorized
        4 + MAX_HOLDERS * PowerBalance::SIZE // balances
    }

    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            bump,
            total_supply: 0,
            authorized: Vec::with_capacity(MAX_AUTHORIZED),
            balances: Vec::new(),
        }
    }

    pub fn is_authorized(&self, principal: &Pubkey) -> bool {
        self.authorized.contains(principal)
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances
            .iter()
            .find(|b| b.owner == *owner)
            .map(|b| b.amount)
            .unwrap_or(0)
    }

    pub fn set_authorized(&mut self, caller: &Pubkey, account: Pubkey, authorized: bool) -> Result<()> {
        require_keys_eq!(*caller, self.authority, VestingError::UnauthorizedAdmin);
        require!(account != Pubkey::default(), VestingError::InvalidPubkey);

        let present = self.authorized.iter().position(|a| *a == account);
        match (authorized, present) {
            (true, None) => {
                require!(
                    self.authorized.len() < MAX_AUTHORIZED,
                    VestingError::AuthorizedListFull
                );
                self.authorized.push(account);
            }
            (false, Some(idx)) => {
                self.authorized.swap_remove(idx);
            }
            _ => {}
        }
        Ok(())
    }

    pub fn mint(&mut self, principal: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        require!(self.is_authorized(principal), VestingError::UnauthorizedPowerMinter);
        require!(*to != Pubkey::default(), VestingError::InvalidPubkey);
        if amount == 0 {
            return Ok(());
        }

        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        match self.balances.iter_mut().find(|b| b.owner == *to) {
            Some(balance) => {
                balance.amount = balance
                    .amount
                    .checked_add(amount)
                    .ok_or(VestingError::MathOverflow)?;
            }
            None => {
                require!(self.balances.len() < MAX_HOLDERS, VestingError::HolderListFull);
                self.balances.push(PowerBalance { owner: *to, amount });
            }
        }
        self.total_supply = supply;
        Ok(())
    }

    pub fn burn(&mut self, principal: &Pubkey, from: &Pubkey, amount: u64) -> Result<()> {
        require!(self.is_authorized(principal), VestingError::UnauthorizedPowerMinter);
        if amount == 0 {
            return Ok(());
        }

        let idx = self
            .balances
            .iter()
            .position(|b| b.owner == *from)
            .ok_or(VestingError::InsufficientVotingPower)?;
        let left = self.balances[idx]
            .amount
            .checked_sub(amount)
            .ok_or(VestingError::InsufficientVotingPower)?;
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;
        if left == 0 {
            self.balances.swap_remove(idx);
        } else {
            self.balances[idx].amount = left;
        }
        Ok(())
    }
}
