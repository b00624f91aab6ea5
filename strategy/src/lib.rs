#![no_std]
#[cfg(any(test, feature = "testutils"))]
extern crate std;

pub mod base;
pub mod constants;
pub mod cycle;
mod errors;
pub mod events;
pub mod fees;
mod interface;
pub mod migration;
pub mod operations;
pub mod storage;

pub use cycle::YieldCycle;
pub use errors::StrategyError;
pub use interface::{Strategy, StrategyClient};
pub use operations::{AsyncOperation, OperationKind};
