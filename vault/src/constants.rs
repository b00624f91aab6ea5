// Fixed-point precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places, 100% == SCALAR_7
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000; // shares minted per underlying unit on the first deposit

// Time constants
pub const ONE_DAY_SECONDS: u64 = 86400;
pub const SECONDS_PER_WEEK: u64 = ONE_DAY_SECONDS * 7;

// Lock bounds
pub const MAX_LOCK_DURATION: u64 = SECONDS_PER_WEEK * 24; // deposits and sponsors
pub const MIN_SPONSOR_LOCK_DURATION: u64 = SECONDS_PER_WEEK * 2;

// Storage schema written by this build
pub const SCHEMA_VERSION: u32 = 1;
