use soroban_sdk::{contractclient, Address, Env};

/// Yield pool interface - only the calls the strategy depends on
#[contractclient(name = "Client")]
pub trait YieldPool {
    /// Pull `amount` of underlying from `from` and credit it to `from`'s position
    fn deposit(e: Env, from: Address, amount: i128);

    /// Pay `amount` of underlying out of `owner`'s position to `owner`
    fn withdraw(e: Env, owner: Address, amount: i128);

    /// Current underlying value of `owner`'s position, yield included
    fn balance(e: Env, owner: Address) -> i128;
}
