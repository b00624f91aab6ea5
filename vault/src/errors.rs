use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Configuration errors
    InvalidConfig = 4001,
    InvalidVersion = 4002,
    Unauthorized = 4003,
    NoProposedAdmin = 4004,
    Paused = 4005,

    // Amount and lock validation errors
    ZeroAmount = 4010,
    InvalidAmount = 4011,
    InvalidClaims = 4012,
    InvalidLockDuration = 4013,
    ZeroShares = 4014,

    // Record errors
    DepositNotFound = 4020,
    SponsorNotFound = 4021,
    ClaimerNotFound = 4022,
    NotDepositOwner = 4023,
    NotSponsorOwner = 4024,
    NotClaimerOwner = 4025,
    DepositLocked = 4026,

    // Economic guards
    YieldNegative = 4030,
    ClaimerInDebt = 4031,
    InsufficientLiquidity = 4032,

    // Strategy and swap errors
    NoStrategy = 4040,
    StrategyHasAssets = 4041,
    UnsupportedToken = 4042,
    SlippageExceeded = 4043,

    // Should never happen
    InvariantViolation = 4090,
}
