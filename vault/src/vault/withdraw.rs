use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::ledger::{ensure_liquidity, transfer_underlying, Ledger};

/// Withdraw the full principal of each deposit to `to`
///
/// With `force` set, claimers in debt take their share of the loss instead
/// of blocking the withdrawal.
///
/// ### Returns
/// The underlying paid
pub fn execute_withdraw(
    e: &Env,
    owner: &Address,
    to: &Address,
    deposit_ids: &Vec<u32>,
    force: bool,
) -> i128 {
    let mut ledger = Ledger::load(e);
    let mut paid = 0;
    for id in deposit_ids.iter() {
        paid += withdraw_from_deposit(e, &mut ledger, owner, id, None, force);
    }
    settle(e, &ledger, to, paid)
}

/// Withdraw `amounts[i]` of principal from `deposit_ids[i]` to `to`
///
/// ### Returns
/// The underlying paid
pub fn execute_partial_withdraw(
    e: &Env,
    owner: &Address,
    to: &Address,
    deposit_ids: &Vec<u32>,
    amounts: &Vec<i128>,
) -> i128 {
    if deposit_ids.len() != amounts.len() {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    let mut ledger = Ledger::load(e);
    let mut paid = 0;
    for (id, amount) in deposit_ids.iter().zip(amounts.iter()) {
        paid += withdraw_from_deposit(e, &mut ledger, owner, id, Some(amount), false);
    }
    settle(e, &ledger, to, paid)
}

fn settle(e: &Env, ledger: &Ledger, to: &Address, paid: i128) -> i128 {
    ledger.store(e);
    ensure_liquidity(e, paid);
    transfer_underlying(e, to, paid);
    paid
}

/// Take `amount` (default: everything) of principal out of a deposit
///
/// A claimer that is not in debt is paid the principal in full, burning just
/// enough shares to cover it so its yield stays claimable. A claimer in
/// debt burns the principal's pro-rata part of its shares and is paid what
/// those shares are worth.
///
/// ### Panics
/// - `DepositNotFound`, `NotDepositOwner`, `DepositLocked` for an unusable deposit
/// - `InvalidAmount` if `amount` is not within the deposit's principal
/// - `YieldNegative` if the claimer is in debt and `force` is not set
fn withdraw_from_deposit(
    e: &Env,
    ledger: &mut Ledger,
    owner: &Address,
    id: u32,
    amount: Option<i128>,
    force: bool,
) -> i128 {
    let mut deposit = match storage::get_deposit(e, id) {
        Some(deposit) => deposit,
        None => panic_with_error!(e, VaultError::DepositNotFound),
    };
    if deposit.owner != *owner {
        panic_with_error!(e, VaultError::NotDepositOwner);
    }
    if e.ledger().timestamp() < deposit.locked_until {
        panic_with_error!(e, VaultError::DepositLocked);
    }
    let amount = amount.unwrap_or(deposit.amount);
    if amount <= 0 || amount > deposit.amount {
        panic_with_error!(e, VaultError::InvalidAmount);
    }

    let mut claimer = ledger.load_claimer(e, deposit.claimer_id);
    let (burned, paid) = if ledger.is_in_debt(e, &claimer) {
        if !force {
            panic_with_error!(e, VaultError::YieldNegative);
        }
        let burned = claimer
            .shares
            .fixed_mul_ceil(e, &amount, &claimer.principal)
            .min(claimer.shares);
        (burned, ledger.value_of(e, burned))
    } else {
        (ledger.shares_to_burn(e, amount).min(claimer.shares), amount)
    };

    claimer.principal -= amount;
    claimer.shares -= burned;
    ledger.cache_claimer(&claimer);
    ledger.totals.total_shares -= burned;
    ledger.totals.total_principal -= amount;
    ledger.idle -= paid;

    deposit.amount -= amount;
    if deposit.amount == 0 {
        storage::del_deposit(e, id);
    } else {
        storage::set_deposit(e, &deposit);
    }

    VaultEvents::withdraw(e, owner.clone(), id, amount, burned, paid);
    paid
}
