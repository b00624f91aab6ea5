//! Deposits and redemptions that settle through an off-chain operator.
//!
//! `invest` and `withdraw_to_vault` only open operations and hand funds to the
//! operator. The operator reports what it settled with `notify_*_result` and
//! the manager resolves the operation with `finish_*`, which is when cost
//! basis moves and proceeds reach the vault.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};
use strategy::events::StrategyEvents;
use strategy::operations::{self, OperationKind};
use strategy::{base, fees, storage as strategy_storage, StrategyError};

use crate::price::{PriceCache, ReceiptPrice};
use crate::storage;

#[allow(clippy::too_many_arguments)]
pub fn execute_initialize(
    e: &Env,
    vault: &Address,
    underlying: &Address,
    receipt_token: &Address,
    oracle: &Address,
    operator: &Address,
    admin: &Address,
    manager: &Address,
    treasury: &Address,
    perf_fee_pct: i128,
) {
    base::execute_initialize(e, vault, underlying, admin, manager, treasury, perf_fee_pct);
    storage::set_receipt_token(e, receipt_token);
    storage::set_oracle(e, oracle);
    storage::set_operator(e, operator);
}

/// Amounts held by the strategy that belong to operations not finished yet
struct Unfinished {
    receipts: i128, // receipt tokens delivered for reported deposits
    proceeds: i128, // underlying delivered for reported redemptions
}

fn unfinished(e: &Env) -> Unfinished {
    let mut totals = Unfinished {
        receipts: 0,
        proceeds: 0,
    };
    for operation in operations::pending_operations(e).iter() {
        if let Some(result) = operation.result {
            match operation.kind {
                OperationKind::Deposit => totals.receipts += result,
                OperationKind::Redeem => totals.proceeds += result,
            }
        }
    }
    totals
}

pub fn receipt_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_receipt_token(e)).balance(&e.current_contract_address())
}

/// Accept the current oracle price while the strategy holds receipt tokens
fn refresh_price(e: &Env) {
    if receipt_balance(e) > 0 {
        ReceiptPrice::load(e).accept(e);
    }
}

/// Send idle underlying to the operator and open a deposit operation
///
/// ### Returns
/// The amount sent
pub fn execute_invest(e: &Env) -> i128 {
    refresh_price(e);
    let amount = base::underlying_balance(e) - unfinished(e).proceeds;
    if amount <= 0 {
        return 0;
    }
    let operator = storage::get_operator(e);
    let id = operations::init_operation(e, OperationKind::Deposit, &operator, amount, 0);

    TokenClient::new(e, &strategy_storage::get_underlying(e)).transfer(
        &e.current_contract_address(),
        &operator,
        &amount,
    );

    log!(e, "deposit {} opened: {}", id, amount);
    StrategyEvents::invest(e, amount);
    amount
}

/// Net underlying already on its way back to the vault: redemptions in
/// flight at the oracle price and reported proceeds not yet forwarded
fn incoming_redemptions(e: &Env, prices: &mut PriceCache) -> i128 {
    let fee_pct = strategy_storage::get_perf_fee_pct(e);
    let mut incoming = 0;
    for operation in operations::pending_operations(e).iter() {
        match (operation.kind, operation.result) {
            (OperationKind::Redeem, None) => {
                let in_flight = prices.get(e).to_underlying(e, operation.amount);
                incoming += fees::net_value(e, in_flight, operation.cost_basis, fee_pct);
            }
            (OperationKind::Redeem, Some(proceeds)) => {
                let (to_vault, _) = fees::split_proceeds(e, proceeds, operation.cost_basis, fee_pct);
                incoming += to_vault;
            }
            _ => {}
        }
    }
    incoming
}

/// Pay what free underlying covers right away and open a redeem operation
/// for whatever redemptions already in flight will not cover
///
/// ### Returns
/// The amount sent to the vault in this call
pub fn execute_withdraw_to_vault(e: &Env, amount: i128) -> i128 {
    let pending = unfinished(e);
    let free = (base::underlying_balance(e) - pending.proceeds).max(0);
    let sent = free.min(amount);
    base::send_to_vault(e, sent);

    let mut prices = PriceCache::default();
    let remaining = amount - sent - incoming_redemptions(e, &mut prices);
    let held = receipt_balance(e) - pending.receipts;
    if remaining > 0 && held > 0 {
        let price = prices.get(e);
        price.accept(e);

        let value = price.to_underlying(e, held);
        let cost_basis = strategy_storage::get_cost_basis(e);
        let fee_pct = strategy_storage::get_perf_fee_pct(e);
        let gross = fees::gross_for_net(e, remaining, value, cost_basis, fee_pct);
        let receipts = price.to_receipts_ceil(e, gross).min(held);
        let cost = fees::cost_portion(e, cost_basis, receipts, held);
        strategy_storage::set_cost_basis(e, cost_basis - cost);
        storage::set_receipts_held(e, (storage::get_receipts_held(e) - receipts).max(0));

        let operator = storage::get_operator(e);
        let id = operations::init_operation(e, OperationKind::Redeem, &operator, receipts, cost);
        TokenClient::new(e, &storage::get_receipt_token(e)).transfer(
            &e.current_contract_address(),
            &operator,
            &receipts,
        );
        log!(e, "redeem {} opened: {} receipts at cost {}", id, receipts, cost);
    }

    StrategyEvents::withdraw_to_vault(e, amount, sent);
    sent
}

/// Record the receipt tokens a deposit settled for
///
/// ### Panics
/// `ResultNotDelivered` if the strategy does not hold the reported receipts
/// on top of those it already accounts for
pub fn execute_report_deposit(e: &Env, operator: &Address, id: u32, settled_amount: i128) {
    operations::report_result(e, id, OperationKind::Deposit, operator, settled_amount);
    if receipt_balance(e) < storage::get_receipts_held(e) + unfinished(e).receipts {
        panic_with_error!(e, StrategyError::ResultNotDelivered);
    }
}

/// Record the underlying a redemption settled for
///
/// ### Panics
/// `ResultNotDelivered` if the strategy does not hold the reported proceeds
/// on top of those of other unfinished redemptions
pub fn execute_report_redeem(e: &Env, operator: &Address, id: u32, settled_amount: i128) {
    operations::report_result(e, id, OperationKind::Redeem, operator, settled_amount);
    if base::underlying_balance(e) < unfinished(e).proceeds {
        panic_with_error!(e, StrategyError::ResultNotDelivered);
    }
}

/// Resolve a settled deposit, moving its amount into the cost basis
///
/// ### Returns
/// The receipt tokens the deposit settled for
pub fn execute_finish_deposit(e: &Env, id: u32) -> i128 {
    refresh_price(e);
    let (operation, result) = operations::resolve_operation(e, id, OperationKind::Deposit);
    strategy_storage::set_cost_basis(e, strategy_storage::get_cost_basis(e) + operation.amount);
    storage::set_receipts_held(e, storage::get_receipts_held(e) + result);
    result
}

/// Resolve a settled redemption, paying the fee and forwarding the proceeds
///
/// ### Returns
/// The underlying sent to the vault
pub fn execute_finish_redeem(e: &Env, id: u32) -> i128 {
    refresh_price(e);
    let (operation, result) = operations::resolve_operation(e, id, OperationKind::Redeem);
    base::settle_redemption(e, result, operation.cost_basis)
}

/// Everything the strategy will return to the vault, net of performance fees
///
/// Deposits still in flight count at face value. Receipt tokens, held or in
/// flight, are valued at the oracle price, which is only loaded when there
/// are any.
pub fn invested_assets(e: &Env) -> i128 {
    let fee_pct = strategy_storage::get_perf_fee_pct(e);
    let mut prices = PriceCache::default();
    let mut value = base::underlying_balance(e);
    let mut cost_basis = strategy_storage::get_cost_basis(e);

    for operation in operations::pending_operations(e).iter() {
        match (operation.kind, operation.result) {
            (OperationKind::Deposit, None) => value += operation.amount,
            // the receipts are already in the balance below
            (OperationKind::Deposit, Some(_)) => cost_basis += operation.amount,
            (OperationKind::Redeem, None) => {
                let in_flight = prices.get(e).to_underlying(e, operation.amount);
                value += fees::net_value(e, in_flight, operation.cost_basis, fee_pct);
            }
            (OperationKind::Redeem, Some(proceeds)) => {
                // the proceeds are already in the underlying balance
                let (to_vault, _) = fees::split_proceeds(e, proceeds, operation.cost_basis, fee_pct);
                value += to_vault - proceeds;
            }
        }
    }

    let held = receipt_balance(e);
    if held > 0 {
        let held_value = prices.get(e).to_underlying(e, held);
        value += fees::net_value(e, held_value, cost_basis, fee_pct);
    }
    value.max(0)
}

pub fn has_assets(e: &Env) -> bool {
    base::underlying_balance(e) > 0
        || receipt_balance(e) > 0
        || !strategy_storage::get_pending_operations(e).is_empty()
}
