use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

use crate::SCALAR_7;

/// Swap adapter paying a fixed rate (SCALAR_7) out of its own inventory
///
/// Tests fund the adapter with the tokens it pays out. The minimum output is
/// ignored so the caller's own slippage check can be exercised.
#[contract]
pub struct MockSwap;

#[contractimpl]
impl MockSwap {
    pub fn __constructor(e: Env, underlying: Address, rate: i128) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, "Underlying"), &underlying);
        e.storage().instance().set(&Symbol::new(&e, "Rate"), &rate);
    }

    pub fn set_rate(e: Env, rate: i128) {
        e.storage().instance().set(&Symbol::new(&e, "Rate"), &rate);
    }

    pub fn swap_into_underlying(
        e: Env,
        _token: Address,
        amount_in: i128,
        _min_amount_out: i128,
        to: Address,
    ) -> i128 {
        let out = amount_in.fixed_mul_floor(&e, &rate(&e), &SCALAR_7);
        TokenClient::new(&e, &underlying(&e)).transfer(&e.current_contract_address(), &to, &out);
        out
    }

    pub fn swap_from_underlying(
        e: Env,
        token: Address,
        amount_in: i128,
        _min_amount_out: i128,
        to: Address,
    ) -> i128 {
        let out = amount_in.fixed_mul_floor(&e, &SCALAR_7, &rate(&e));
        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &out);
        out
    }
}

fn underlying(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, "Underlying"))
        .unwrap()
}

fn rate(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, "Rate"))
        .unwrap()
}
