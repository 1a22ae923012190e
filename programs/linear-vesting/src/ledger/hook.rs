use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VotingPower;

/// Called whenever a member's remaining amount changes by `delta`.
pub trait AmountHook {
    fn on_amount_changed(&mut self, member: &Pubkey, delta: i128) -> Result<()>;
}

impl<H: AmountHook + ?Sized> AmountHook for Box<H> {
    fn on_amount_changed(&mut self, member: &Pubkey, delta: i128) -> Result<()> {
        (**self).on_amount_changed(member, delta)
    }
}

/// Standard program: no auxiliary state.
pub struct NoopHook;

impl AmountHook for NoopHook {
    fn on_amount_changed(&mut self, _member: &Pubkey, _delta: i128) -> Result<()> {
        Ok(())
    }
}

/// Restricted program: keeps the voting-power balance equal to the
/// remaining amount, acting as `principal` (the ledger PDA).
pub struct MirroredPower<'a> {
    power: &'a mut VotingPower,
    principal: Pubkey,
}

impl<'a> MirroredPower<'a> {
    pub fn new(power: &'a mut VotingPower, principal: Pubkey) -> Self {
        Self { power, principal }
    }
}

impl AmountHook for MirroredPower<'_> {
    fn on_amount_changed(&mut self, member: &Pubkey, delta: i128) -> Result<()> {
        let amount = u64::try_from(delta.unsigned_abs()).map_err(|_| VestingError::MathOverflow)?;
        if delta > 0 {
            self.power.mint(&self.principal, member, amount)
        } else if delta < 0 {
            self.power.burn(&self.principal, member, amount)
        } else {
            Ok(())
        }
    }
}

/// Picks the hook matching the ledger's voting-power binding.
pub fn hook_for<'a>(
    principal: Pubkey,
    voting_power: Option<&'a mut VotingPower>,
) -> Box<dyn AmountHook + 'a> {
    match voting_power {
        Some(power) => Box::new(MirroredPower::new(power, principal)),
        None => Box::new(NoopHook),
    }
}
