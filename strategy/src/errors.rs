use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Configuration
    InvalidConfig = 5001,
    InvalidVersion = 5002,

    // Authorization
    NotManager = 5010,
    NotOperator = 5011,

    // Amount validation
    ZeroAmount = 5020,
    InvalidAmount = 5021,
    InsufficientAssets = 5022,

    // Async operations
    NotRunning = 5030,
    ResultNotReady = 5031,
    AlreadyReported = 5032,
    WrongOperationKind = 5033,
    ResultNotDelivered = 5034,

    // Oracle/Price
    PriceNotFound = 5040,
    InvalidPrice = 5041,
    StalePrice = 5042,
}
