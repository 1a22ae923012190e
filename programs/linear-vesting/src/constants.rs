//! Program-wide constants.

/// PDA seed for a vesting ledger: `[LEDGER_SEED, admin, mint, ledger_id.to_le_bytes()]`.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// PDA seed for the ledger-owned token vault: `[VAULT_SEED, ledger]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// PDA seed for a voting-power mirror: `[VOTING_POWER_SEED, authority]`.
pub const VOTING_POWER_SEED: &[u8] = b"voting_power";

/// Max vest records stored in one ledger account (history included).
pub const MAX_MEMBERS: usize = 96;

/// Max principals allowed to mint/burn on a voting-power mirror.
pub const MAX_AUTHORIZED: usize = 8;

/// Max accounts holding a non-zero voting-power balance.
pub const MAX_HOLDERS: usize = 128;
