use soroban_sdk::{contractclient, Address, Env};

/// Yield source that realizes profit and loss in discrete steps
#[contractclient(name = "Client")]
pub trait YieldPool {
    /// Pull `amount` of underlying from `from` and credit it to `from`'s position
    fn deposit(e: Env, from: Address, amount: i128);

    /// Pay `amount` of underlying out of `owner`'s position to `owner`
    fn withdraw(e: Env, owner: Address, amount: i128);

    /// Last realized underlying value of `owner`'s position
    fn balance(e: Env, owner: Address) -> i128;
}
