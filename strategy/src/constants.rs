// Fixed-point precision
pub const SCALAR_7: i128 = 10_000_000; // 7 decimal places, 100% == SCALAR_7

// Time constants
pub const ONE_HOUR_SECONDS: u64 = 3600;
pub const ONE_DAY_SECONDS: u64 = ONE_HOUR_SECONDS * 24;

// Oracle
pub const MAX_PRICE_AGE: u64 = ONE_HOUR_SECONDS; // Max price age in seconds

// Storage schema written by this build
pub const SCHEMA_VERSION: u32 = 1;
