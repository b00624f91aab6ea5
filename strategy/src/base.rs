//! Wiring, roles and money movement shared by every strategy variant.

use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, vec, Address, Env, IntoVal, Symbol, Val, Vec};

use crate::constants::{SCALAR_7, SCHEMA_VERSION};
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::{fees, storage};

pub fn execute_initialize(
    e: &Env,
    vault: &Address,
    underlying: &Address,
    admin: &Address,
    manager: &Address,
    treasury: &Address,
    perf_fee_pct: i128,
) {
    require_valid_fee_pct(e, perf_fee_pct);
    storage::set_vault(e, vault);
    storage::set_underlying(e, underlying);
    storage::set_admin(e, admin);
    storage::set_manager(e, manager);
    storage::set_treasury(e, treasury);
    storage::set_perf_fee_pct(e, perf_fee_pct);
    storage::set_cost_basis(e, 0);
    storage::set_version(e, SCHEMA_VERSION);
}

/// Require the vault's authorization and return its address
pub fn require_vault(e: &Env) -> Address {
    let vault = storage::get_vault(e);
    vault.require_auth();
    vault
}

/// Require the admin's authorization and return its address
pub fn require_admin(e: &Env) -> Address {
    let admin = storage::get_admin(e);
    admin.require_auth();
    admin
}

/// Require `caller` to be the manager (or the admin) and to have authorized the call
///
/// ### Panics
/// If `caller` holds neither role
pub fn require_manager(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != storage::get_manager(e) && *caller != storage::get_admin(e) {
        panic_with_error!(e, StrategyError::NotManager);
    }
}

/// Reject non-positive amounts
pub fn require_positive(e: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }
}

/// Underlying held by the strategy contract itself
pub fn underlying_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_underlying(e)).balance(&e.current_contract_address())
}

/// Send `amount` of underlying held by the strategy to the vault
pub fn send_to_vault(e: &Env, amount: i128) {
    if amount <= 0 {
        return;
    }
    TokenClient::new(e, &storage::get_underlying(e)).transfer(
        &e.current_contract_address(),
        &storage::get_vault(e),
        &amount,
    );
}

/// Pre-authorize a `transfer` of `amount` of `token` from this contract to
/// `to`, for a protocol that pulls funds inside its own call
pub fn authorize_transfer(e: &Env, token: &Address, to: &Address, amount: i128) {
    let args: Vec<Val> = vec![
        e,
        e.current_contract_address().into_val(e),
        to.into_val(e),
        amount.into_val(e),
    ];
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: token.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);
}

/// Pay the performance fee on `proceeds` redeemed at `cost` and forward the
/// rest to the vault
///
/// ### Returns
/// The amount sent to the vault
pub fn settle_redemption(e: &Env, proceeds: i128, cost: i128) -> i128 {
    let (to_vault, fee) = fees::split_proceeds(e, proceeds, cost, storage::get_perf_fee_pct(e));
    if fee > 0 {
        let treasury = storage::get_treasury(e);
        TokenClient::new(e, &storage::get_underlying(e)).transfer(
            &e.current_contract_address(),
            &treasury,
            &fee,
        );
        StrategyEvents::performance_fee(e, treasury, proceeds - cost, fee);
    }
    log!(e, "settle redemption: proceeds {}, cost {}, fee {}", proceeds, cost, fee);
    send_to_vault(e, to_vault);
    to_vault
}

pub fn execute_set_manager(e: &Env, manager: &Address) {
    storage::set_manager(e, manager);
    StrategyEvents::set_manager(e, manager.clone());
}

pub fn execute_set_fee_config(e: &Env, treasury: &Address, perf_fee_pct: i128) {
    require_valid_fee_pct(e, perf_fee_pct);
    storage::set_treasury(e, treasury);
    storage::set_perf_fee_pct(e, perf_fee_pct);
    StrategyEvents::set_fee_config(e, treasury.clone(), perf_fee_pct);
}

fn require_valid_fee_pct(e: &Env, perf_fee_pct: i128) {
    if !(0..=SCALAR_7).contains(&perf_fee_pct) {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
}
