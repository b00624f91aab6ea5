#![no_std]

mod constants;
mod contract;
mod dependencies;
mod errors;
mod events;
pub mod storage;
pub mod testutils;
mod types;
mod vault;

pub use constants::*;
pub use contract::*;
pub use errors::VaultError;
pub use types::*;
