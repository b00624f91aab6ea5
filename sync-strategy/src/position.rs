use soroban_sdk::{log, Address, Env};
use strategy::events::StrategyEvents;
use strategy::{base, fees, storage as strategy_storage};

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
) {
    base::execute_initialize(e, vault, underlying, admin, manager, treasury, perf_fee_pct);
    storage::set_pool(e, pool);
}

/// Underlying value of the pool position held by the strategy
pub fn position_value(e: &Env) -> i128 {
    PoolClient::new(e, &storage::get_pool(e)).balance(&e.current_contract_address())
}

/// Deposit all idle underlying into the pool
///
/// ### Returns
/// The amount deposited
pub fn execute_invest(e: &Env) -> i128 {
    let amount = base::underlying_balance(e);
    if amount <= 0 {
        return 0;
    }
    let pool = storage::get_pool(e);
    strategy_storage::set_cost_basis(e, strategy_storage::get_cost_basis(e) + amount);

    base::authorize_transfer(e, &strategy_storage::get_underlying(e), &pool, amount);
    PoolClient::new(e, &pool).deposit(&e.current_contract_address(), &amount);

    StrategyEvents::invest(e, amount);
    amount
}

/// Send `amount` of underlying to the vault, redeeming from the pool what the
/// idle balance does not cover
///
/// The redeemed amount is grossed up so the vault receives `amount` after the
/// performance fee. A position too small to cover `amount` is redeemed in full.
///
/// ### Returns
/// The amount sent to the vault
pub fn execute_withdraw_to_vault(e: &Env, amount: i128) -> i128 {
    let from_idle = base::underlying_balance(e).min(amount);
    base::send_to_vault(e, from_idle);
    let mut sent = from_idle;

    let remaining = amount - from_idle;
    let value = position_value(e);
    if remaining > 0 && value > 0 {
        let cost_basis = strategy_storage::get_cost_basis(e);
        let fee_pct = strategy_storage::get_perf_fee_pct(e);
        let gross = fees::gross_for_net(e, remaining, value, cost_basis, fee_pct);
        let cost = fees::cost_portion(e, cost_basis, gross, value);
        strategy_storage::set_cost_basis(e, cost_basis - cost);

        PoolClient::new(e, &storage::get_pool(e)).withdraw(&e.current_contract_address(), &gross);
        sent += base::settle_redemption(e, gross, cost);
    }

    log!(e, "withdraw to vault: requested {}, sent {}", amount, sent);
    StrategyEvents::withdraw_to_vault(e, amount, sent);
    sent
}

/// Idle underlying plus the pool position, net of the unrealized performance fee
pub fn invested_assets(e: &Env) -> i128 {
    let net = fees::net_value(
        e,
        position_value(e),
        strategy_storage::get_cost_basis(e),
        strategy_storage::get_perf_fee_pct(e),
    );
    base::underlying_balance(e) + net
}

pub fn has_assets(e: &Env) -> bool {
    base::underlying_balance(e) > 0 || position_value(e) > 0
}
