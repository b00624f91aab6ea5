mod strategy;
mod swap;

pub use strategy::Client as StrategyClient;
pub use swap::Client as SwapClient;
