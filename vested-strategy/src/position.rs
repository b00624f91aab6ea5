//! Pool position reported through a linear vesting cycle.
//!
//! The pool realizes profit in lumps. Every mutating call first feeds the
//! pool's value into the cycle, so gains vest over `cycle.duration` while
//! losses show up at once. Principal moving in or out shifts the cycle
//! without vesting.

use soroban_sdk::{log, panic_with_error, Address, Env};
use strategy::events::StrategyEvents;
use strategy::{base, fees, storage as strategy_storage, StrategyError, YieldCycle};

use crate::dependencies::PoolClient;
use crate::storage;

#[allow(clippy::too_many_arguments)]
pub fn execute_initialize(
    e: &Env,
    vault: &Address,
    underlying: &Address,
    pool: &Address,
    admin: &Address,
    manager: &Address,
    treasury: &Address,
    perf_fee_pct: i128,
    cycle_duration: u64,
) {
    require_valid_duration(e, cycle_duration);
    base::execute_initialize(e, vault, underlying, admin, manager, treasury, perf_fee_pct);
    storage::set_pool(e, pool);
    strategy_storage::set_cycle(e, &YieldCycle::new(cycle_duration, e.ledger().timestamp()));
}

pub fn pool_value(e: &Env) -> i128 {
    PoolClient::new(e, &storage::get_pool(e)).balance(&e.current_contract_address())
}

/// Restart the cycle if the pool value moved since the last update
pub fn sync_cycle(e: &Env) -> YieldCycle {
    let mut cycle = strategy_storage::get_cycle(e);
    if cycle.update(pool_value(e), e.ledger().timestamp()) {
        strategy_storage::set_cycle(e, &cycle);
        StrategyEvents::cycle_update(e, cycle.start_amount, cycle.end_amount, cycle.start_timestamp);
    }
    cycle
}

pub fn execute_invest(e: &Env) -> i128 {
    let amount = base::underlying_balance(e);
    if amount <= 0 {
        return 0;
    }
    let mut cycle = sync_cycle(e);
    cycle.shift(amount);
    strategy_storage::set_cycle(e, &cycle);
    strategy_storage::set_cost_basis(e, strategy_storage::get_cost_basis(e) + amount);

    let pool = storage::get_pool(e);
    base::authorize_transfer(e, &strategy_storage::get_underlying(e), &pool, amount);
    PoolClient::new(e, &pool).deposit(&e.current_contract_address(), &amount);

    StrategyEvents::invest(e, amount);
    amount
}

/// Send `amount` of underlying to the vault
///
/// Redemptions are priced at the vested value, so unvested profit stays in
/// the pool and keeps vesting for the remaining position.
pub fn execute_withdraw_to_vault(e: &Env, amount: i128) -> i128 {
    let from_idle = base::underlying_balance(e).min(amount);
    base::send_to_vault(e, from_idle);
    let mut sent = from_idle;

    let remaining = amount - from_idle;
    if remaining > 0 {
        let mut cycle = sync_cycle(e);
        let vested = cycle.reported_value(e.ledger().timestamp());
        if vested > 0 {
            let cost_basis = strategy_storage::get_cost_basis(e);
            let fee_pct = strategy_storage::get_perf_fee_pct(e);
            let gross = fees::gross_for_net(e, remaining, vested, cost_basis, fee_pct);
            let cost = fees::cost_portion(e, cost_basis, gross, vested);
            strategy_storage::set_cost_basis(e, cost_basis - cost);
            cycle.shift(-gross);
            strategy_storage::set_cycle(e, &cycle);

            PoolClient::new(e, &storage::get_pool(e))
                .withdraw(&e.current_contract_address(), &gross);
            sent += base::settle_redemption(e, gross, cost);
        }
    }

    log!(e, "withdraw to vault: requested {}, sent {}", amount, sent);
    StrategyEvents::withdraw_to_vault(e, amount, sent);
    sent
}

/// Feed externally realized profit or loss into the cycle
///
/// ### Returns
/// The vested value after the update
pub fn execute_harvest(e: &Env) -> i128 {
    sync_cycle(e).reported_value(e.ledger().timestamp())
}

pub fn execute_set_cycle_duration(e: &Env, duration: u64) {
    require_valid_duration(e, duration);
    let mut cycle = sync_cycle(e);
    // restart from the vested value so the new length only applies going forward
    let now = e.ledger().timestamp();
    cycle.start_amount = cycle.reported_value(now);
    cycle.distribution_amount = cycle.end_amount - cycle.start_amount;
    cycle.start_timestamp = now;
    cycle.duration = duration;
    strategy_storage::set_cycle(e, &cycle);
    StrategyEvents::cycle_update(e, cycle.start_amount, cycle.end_amount, cycle.start_timestamp);
}

/// Idle underlying plus the vested pool value, net of the unrealized performance fee
pub fn invested_assets(e: &Env) -> i128 {
    let vested = strategy_storage::get_cycle(e).reported_value(e.ledger().timestamp());
    let net = fees::net_value(
        e,
        vested,
        strategy_storage::get_cost_basis(e),
        strategy_storage::get_perf_fee_pct(e),
    );
    base::underlying_balance(e) + net
}

pub fn has_assets(e: &Env) -> bool {
    base::underlying_balance(e) > 0 || pool_value(e) > 0
}

fn require_valid_duration(e: &Env, duration: u64) {
    if duration == 0 {
        panic_with_error!(e, StrategyError::InvalidConfig);
    }
}
