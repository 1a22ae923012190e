use anchor_lang::prelude::*;

use crate::constants::MAX_MEMBERS;
use crate::error::VestingError;
use crate::utils::release;

/// One beneficiary's unclaimed entitlement and its release anchor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestRecord {
    pub member: Pubkey,
    /// Entitlement not yet claimed or transferred away.
    pub remaining_amount: u64,
    /// Anchor for the next linear-release computation (Unix seconds).
    pub last_checkpoint: i64,
}

impl VestRecord {
    pub const SIZE: usize = 32 + 8 + 8;

    pub fn new(member: Pubkey) -> Self {
        Self {
            member,
            remaining_amount: 0,
            last_checkpoint: 0,
        }
    }
}

/// Return value of the `user_vest` view.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserVestInfo {
    pub amount: u64,
    pub last_checkpoint: i64,
}

/// Construction parameters for a ledger instance.
#[derive(Clone, Copy, Debug)]
pub struct LedgerConfig {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,
    pub voting_power: Option<Pubkey>,
    pub ledger_id: u64,
    pub duration: i64,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Single vesting program instance PDA.
#[account]
#[derive(Debug)]
pub struct VestingLedger {
    /// Administrator allowed to set up, begin and transfer vests.
    pub admin: Pubkey,
    /// Underlying asset mint.
    pub mint: Pubkey,
    /// Ledger-owned token account holding the committed pool.
    pub vault: Pubkey,
    /// Bound voting-power mirror (restricted program) or `None` (standard program).
    pub voting_power: Option<Pubkey>,
    /// Distinguishes independent programs over the same mint.
    pub ledger_id: u64,
    /// Release duration in seconds, fixed at construction.
    pub duration: i64,
    /// 0 while pending; the `begin` timestamp once active.
    pub start_ts: i64,
    /// Sum of remaining amounts at `begin`; immutable afterwards.
    pub total_committed: u64,
    pub bump: u8,
    pub vault_bump: u8,
    /// Every account with vesting history, in first-seen order.
    pub members: Vec<VestRecord>,
}

impl VestingLedger {
    pub const fn space() -> usize {
        8 +                             // discriminator
        32 +                            // admin
        32 +                            // mint
        32 +                            // vault
        1 + 32 +                        // voting_power
        8 +                             // ledger_id
        8 +                             // duration
        8 +                             // start_ts
        8 +                             // total_committed
        1 +                             // bump
        1 +                             // vault_bump
        4 + MAX_MEMBERS * VestRecord::SIZE // members
    }

    pub fn new(config: LedgerConfig) -> Result<Self> {
        require!(config.mint != Pubkey::default(), VestingError::InvalidPubkey);
        require!(config.admin != Pubkey::default(), VestingError::InvalidPubkey);
        require!(config.duration > 0, VestingError::InvalidConfig);
        if let Some(voting_power) = config.voting_power {
            require!(voting_power != Pubkey::default(), VestingError::InvalidPubkey);
        }

        Ok(Self {
            admin: config.admin,
            mint: config.mint,
            vault: config.vault,
            voting_power: config.voting_power,
            ledger_id: config.ledger_id,
            duration: config.duration,
            start_ts: 0,
            total_committed: 0,
            bump: config.bump,
            vault_bump: config.vault_bump,
            members: Vec::with_capacity(MAX_MEMBERS),
        })
    }

    pub fn is_active(&self) -> bool {
        self.start_ts != 0
    }

    /// Release deadline shared by every member.
    pub fn deadline(&self) -> Result<i64> {
        Ok(self
            .start_ts
            .checked_add(self.duration)
            .ok_or(VestingError::MathOverflow)?)
    }

    pub fn position(&self, member: &Pubkey) -> Option<usize> {
        self.members.iter().position(|r| r.member == *member)
    }

    pub fn record(&self, member: &Pubkey) -> Option<&VestRecord> {
        self.members.iter().find(|r| r.member == *member)
    }

    pub fn user_vest(&self, member: &Pubkey) -> UserVestInfo {
        self.record(member)
            .map(|r| UserVestInfo {
                amount: r.remaining_amount,
                last_checkpoint: r.last_checkpoint,
            })
            .unwrap_or_default()
    }

    /// Committed total once active; the live draft sum while pending.
    pub fn total(&self) -> Result<u64> {
        if self.is_active() {
            Ok(self.total_committed)
        } else {
            remaining_sum(&self.members)
        }
    }

    /// Amount `member` could claim at `now`.
    pub fn claimable(&self, member: &Pubkey, now: i64) -> Result<u64> {
        require!(self.is_active(), VestingError::NotStarted);
        let Some(record) = self.record(member) else {
            return Ok(0);
        };
        let amount = release::claimable_amount(
            record.remaining_amount,
            record.last_checkpoint,
            self.deadline()?,
            now,
        )?;
        Ok(amount)
    }
}

/// Sum of remaining amounts; fails if the pool would not fit a token amount.
pub fn remaining_sum(records: &[VestRecord]) -> Result<u64> {
    let mut sum: u128 = 0;
    for r in records {
        sum = sum
            .checked_add(r.remaining_amount as u128)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(u64::try_from(sum).map_err(|_| VestingError::MathOverflow)?)
}
