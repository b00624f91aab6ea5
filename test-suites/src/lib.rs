pub mod mocks;
pub mod setup;
pub mod test_fixture;

pub const SCALAR_7: i128 = 1_0000000;
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;
pub const ONE_HOUR: u64 = 60 * 60;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;
pub const ONE_WEEK: u64 = 7 * ONE_DAY;
