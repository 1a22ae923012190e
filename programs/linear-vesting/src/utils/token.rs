//! SPL Token custody for the underlying asset.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::ledger::UnderlyingAsset;

/// Moves tokens between the ledger vault and one external token account.
///
/// Pulls are signed by `external_authority` (the admin signer); payouts are
/// signed by the ledger PDA through `ledger_seeds`.
pub struct TokenVault<'a, 'info> {
    pub token_program: &'a Program<'info, Token>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub external: &'a Account<'info, TokenAccount>,
    pub external_authority: AccountInfo<'info>,
    pub ledger: AccountInfo<'info>,
    pub ledger_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> UnderlyingAsset for TokenVault<'a, 'info> {
    fn pull(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.external.owner, *from, VestingError::InvalidTokenAccount);
        token::transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.external.to_account_info(),
                    to: self.vault.to_account_info(),
                    authority: self.external_authority.clone(),
                },
            ),
            amount,
        )
    }

    fn pay(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        require_keys_eq!(self.external.owner, *to, VestingError::InvalidTokenAccount);
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.external.to_account_info(),
                    authority: self.ledger.clone(),
                },
                self.ledger_seeds,
            ),
            amount,
        )
    }
}
