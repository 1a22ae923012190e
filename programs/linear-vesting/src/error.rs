use anchor_lang::prelude::*;

/// Custom error codes for the linear vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: caller may not mint or burn voting power")]
    UnauthorizedPowerMinter,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Vesting has already started")]
    AlreadyStarted,

    #[msg("Vesting hasn't started yet")]
    NotStarted,

    #[msg("Members and amounts must have the same length")]
    ArgumentCountMismatch,

    #[msg("Members not unique")]
    DuplicateMember,

    #[msg("Member list is full")]
    MemberListFull,

    #[msg("Invalid amount specified for transferring vest")]
    InvalidAmount,

    /// Rejected outright rather than treated as a checkpoint reset on the
    /// member's own record, which would re-vest its accrued balance.
    #[msg("Source and destination of a vest transfer must differ")]
    SelfTransfer,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Voting power account does not match the ledger binding")]
    VotingPowerMismatch,

    #[msg("Insufficient voting power to burn")]
    InsufficientVotingPower,

    #[msg("Authorized list is full")]
    AuthorizedListFull,

    #[msg("Voting power holder list is full")]
    HolderListFull,

    #[msg("Math overflow")]
    MathOverflow,
}
