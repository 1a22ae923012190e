//! Vesting state machine: set-up, begin, claim and transfer.
//!
//! Collaborators are injected so the same code drives the standard and the
//! restricted program. Every fallible collaborator call happens before the
//! ledger commits its own state, so a failed operation leaves it unchanged.

use anchor_lang::prelude::*;

use crate::constants::MAX_MEMBERS;
use crate::error::VestingError;
use crate::state::{remaining_sum, VestRecord, VestingLedger};

pub mod hook;

pub use hook::*;

/// Decides whether a caller may run admin-gated operations.
pub trait AdminGate {
    fn is_admin(&self, caller: &Pubkey) -> bool;
}

/// Gate backed by the admin key recorded in the ledger.
pub struct AdminKey(pub Pubkey);

impl AdminGate for AdminKey {
    fn is_admin(&self, caller: &Pubkey) -> bool {
        *caller == self.0
    }
}

/// Underlying fungible asset: pulls into and pays out of the ledger's custody.
pub trait UnderlyingAsset {
    fn pull(&mut self, from: &Pubkey, amount: u64) -> Result<()>;
    fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

pub struct Ledger<'a, G, H> {
    state: &'a mut VestingLedger,
    gate: G,
    hook: H,
}

impl<'a, G: AdminGate, H: AmountHook> Ledger<'a, G, H> {
    pub fn new(state: &'a mut VestingLedger, gate: G, hook: H) -> Self {
        Self { state, gate, hook }
    }

    pub fn state(&self) -> &VestingLedger {
        &*self.state
    }

    fn only_admin(&self, caller: &Pubkey) -> Result<()> {
        require!(self.gate.is_admin(caller), VestingError::UnauthorizedAdmin);
        Ok(())
    }

    /// Sets absolute remaining amounts for `members` while pending.
    pub fn set_vests(&mut self, caller: &Pubkey, members: &[Pubkey], amounts: &[u64]) -> Result<()> {
        self.only_admin(caller)?;
        require!(!self.state.is_active(), VestingError::AlreadyStarted);
        require!(
            members.len() == amounts.len(),
            VestingError::ArgumentCountMismatch
        );
        for (i, member) in members.iter().enumerate() {
            require!(*member != Pubkey::default(), VestingError::InvalidPubkey);
            require!(!members[..i].contains(member), VestingError::DuplicateMember);
        }

        let mut staged = self.state.members.clone();
        let mut deltas = Vec::with_capacity(members.len());
        for (member, &amount) in members.iter().zip(amounts) {
            let idx = match staged.iter().position(|r| r.member == *member) {
                Some(idx) => idx,
                None => {
                    staged.push(VestRecord::new(*member));
                    staged.len() - 1
                }
            };
            let delta = i128::from(amount) - i128::from(staged[idx].remaining_amount);
            staged[idx].remaining_amount = amount;
            deltas.push(delta);
        }
        // Pending records carry no clock, so zero entries hold no state.
        staged.retain(|r| r.remaining_amount > 0);
        require!(staged.len() <= MAX_MEMBERS, VestingError::MemberListFull);
        // The draft must stay pullable as a single token amount.
        remaining_sum(&staged)?;

        for (member, delta) in members.iter().zip(deltas) {
            self.hook.on_amount_changed(member, delta)?;
        }
        self.state.members = staged;

        msg!(
            "set_vests: {} member(s), draft total {}",
            members.len(),
            self.state.total()?
        );
        Ok(())
    }

    /// Pulls the committed total from `caller` and starts the clock.
    pub fn begin<A: UnderlyingAsset>(&mut self, caller: &Pubkey, asset: &mut A, now: i64) -> Result<u64> {
        self.only_admin(caller)?;
        require!(!self.state.is_active(), VestingError::AlreadyStarted);
        require!(now > 0, VestingError::InvalidTimestamp);
        now.checked_add(self.state.duration)
            .ok_or(VestingError::MathOverflow)?;

        let total = remaining_sum(&self.state.members)?;
        asset.pull(caller, total)?;

        self.state.total_committed = total;
        self.state.start_ts = now;
        for record in self.state.members.iter_mut() {
            record.last_checkpoint = now;
        }

        msg!("begin: committed {} until {}", total, self.state.deadline()?);
        Ok(total)
    }

    pub fn get_claim(&self, member: &Pubkey, now: i64) -> Result<u64> {
        self.state.claimable(member, now)
    }

    /// Pays `caller` everything released since its last checkpoint.
    pub fn claim<A: UnderlyingAsset>(&mut self, caller: &Pubkey, asset: &mut A, now: i64) -> Result<u64> {
        let amount = self.state.claimable(caller, now)?;
        require!(amount > 0, VestingError::NothingToClaim);
        let idx = self
            .state
            .position(caller)
            .ok_or(VestingError::NothingToClaim)?;
        let left = self.state.members[idx]
            .remaining_amount
            .checked_sub(amount)
            .ok_or(VestingError::MathOverflow)?;

        asset.pay(caller, amount)?;
        self.hook.on_amount_changed(caller, -i128::from(amount))?;

        let record = &mut self.state.members[idx];
        record.remaining_amount = left;
        record.last_checkpoint = now;

        msg!("claim: {} paid {}, {} remaining", caller, amount, left);
        Ok(amount)
    }

    /// Moves unclaimed entitlement and re-anchors the destination's clock.
    pub fn transfer_vest(
        &mut self,
        caller: &Pubkey,
        source: &Pubkey,
        destination: &Pubkey,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        self.only_admin(caller)?;
        require!(self.state.is_active(), VestingError::NotStarted);

        let source_idx = self
            .state
            .position(source)
            .filter(|&i| amount > 0 && amount <= self.state.members[i].remaining_amount)
            .ok_or(VestingError::InvalidAmount)?;
        require!(*destination != Pubkey::default(), VestingError::InvalidPubkey);
        require_keys_neq!(*source, *destination, VestingError::SelfTransfer);

        let destination_idx = self.state.position(destination);
        // A full list hands a drained slot to a new destination. The source
        // slot qualifies when this transfer empties it.
        let vacant_idx = match destination_idx {
            Some(_) => None,
            None if self.state.members.len() < MAX_MEMBERS => None,
            None => Some(
                self.state
                    .members
                    .iter()
                    .position(|r| r.remaining_amount == 0)
                    .or_else(|| {
                        (self.state.members[source_idx].remaining_amount == amount)
                            .then_some(source_idx)
                    })
                    .ok_or(VestingError::MemberListFull)?,
            ),
        };
        let destination_amount = destination_idx
            .map(|i| self.state.members[i].remaining_amount)
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;

        self.hook.on_amount_changed(source, -i128::from(amount))?;
        self.hook.on_amount_changed(destination, i128::from(amount))?;

        self.state.members[source_idx].remaining_amount -= amount;
        let destination_idx = match (destination_idx, vacant_idx) {
            (Some(idx), _) => idx,
            (None, Some(idx)) => {
                self.state.members[idx] = VestRecord::new(*destination);
                idx
            }
            (None, None) => {
                self.state.members.push(VestRecord::new(*destination));
                self.state.members.len() - 1
            }
        };
        let record = &mut self.state.members[destination_idx];
        record.remaining_amount = destination_amount;
        record.last_checkpoint = now;

        msg!("transfer_vest: {} -> {} amount {}", source, destination, amount);
        Ok(())
    }
}
