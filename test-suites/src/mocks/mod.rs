mod pool;
mod swap;

pub use pool::{MockYieldPool, MockYieldPoolClient};
pub use swap::{MockSwap, MockSwapClient};
