#![no_std]

mod contract;
mod dependencies;
mod storage;
mod position;

pub use contract::*;
