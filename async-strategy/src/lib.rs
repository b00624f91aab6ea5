#![no_std]

mod contract;
mod events;
mod price;
mod settlement;
mod storage;

pub use contract::*;
