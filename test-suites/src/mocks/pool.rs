use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol};

#[derive(Clone)]
#[contracttype]
enum PoolKey {
    Balance(Address),
}

/// Yield pool that books deposits 1:1 and lets tests move each owner's
/// balance to simulate profit and loss
///
/// Profit only pays out if the test also mints the matching underlying to
/// the pool.
#[contract]
pub struct MockYieldPool;

#[contractimpl]
impl MockYieldPool {
    pub fn __constructor(e: Env, underlying: Address) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, "Underlying"), &underlying);
    }

    pub fn deposit(e: Env, from: Address, amount: i128) {
        from.require_auth();
        token(&e).transfer(&from, &e.current_contract_address(), &amount);
        let balance = Self::balance(e.clone(), from.clone());
        set_balance(&e, &from, balance + amount);
    }

    pub fn withdraw(e: Env, owner: Address, amount: i128) {
        owner.require_auth();
        let balance = Self::balance(e.clone(), owner.clone());
        assert!(amount <= balance, "withdraw exceeds balance");
        set_balance(&e, &owner, balance - amount);
        token(&e).transfer(&e.current_contract_address(), &owner, &amount);
    }

    pub fn balance(e: Env, owner: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PoolKey::Balance(owner))
            .unwrap_or(0)
    }

    /// Move `owner`'s booked balance by `delta` without moving tokens
    pub fn accrue(e: Env, owner: Address, delta: i128) {
        let balance = Self::balance(e.clone(), owner.clone());
        set_balance(&e, &owner, balance + delta);
    }
}

fn token(e: &Env) -> TokenClient<'_> {
    let underlying: Address = e
        .storage()
        .instance()
        .get(&Symbol::new(e, "Underlying"))
        .unwrap();
    TokenClient::new(e, &underlying)
}

fn set_balance(e: &Env, owner: &Address, balance: i128) {
    e.storage()
        .persistent()
        .set(&PoolKey::Balance(owner.clone()), &balance);
}
