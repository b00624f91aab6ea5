use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::SCALAR_7;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::ledger::{ensure_liquidity, transfer_underlying, Ledger};

/// Pay out a claimer's yield, less the performance fee, to `to`
///
/// The shares covering the yield are burned, so the claimer is left holding
/// exactly its principal's worth and nobody else's value moves.
///
/// ### Returns
/// The yield claimed, fee included, or 0 if there was none
pub fn execute_claim_yield(e: &Env, claimer_id: u32, to: &Address) -> i128 {
    let mut ledger = Ledger::load(e);
    let mut claimer = ledger.load_claimer(e, claimer_id);
    claimer.owner.require_auth();

    let amount = ledger.claimable_yield(e, &claimer);
    if amount <= 0 {
        return 0;
    }
    let burned = ledger.shares_to_burn(e, amount).min(claimer.shares);
    claimer.shares -= burned;
    claimer.claimed += amount;
    ledger.cache_claimer(&claimer);
    ledger.totals.total_shares -= burned;
    ledger.idle -= amount;
    ledger.store(e);

    let config = storage::get_config(e);
    let fee = amount.fixed_mul_floor(e, &config.perf_fee_pct, &SCALAR_7);
    ensure_liquidity(e, amount);
    transfer_underlying(e, to, amount - fee);
    transfer_underlying(e, &config.treasury, fee);

    VaultEvents::claim_yield(e, claimer_id, to.clone(), amount, fee);
    amount
}

/// Hand a claimer, and the right to its yield, to `new_owner`
///
/// ### Panics
/// `ClaimerNotFound` if the claimer does not exist
pub fn execute_transfer_claimer(e: &Env, claimer_id: u32, new_owner: &Address) {
    let mut claimer = match storage::get_claimer(e, claimer_id) {
        Some(claimer) => claimer,
        None => panic_with_error!(e, VaultError::ClaimerNotFound),
    };
    claimer.owner.require_auth();
    let previous = claimer.owner.clone();
    claimer.owner = new_owner.clone();
    storage::set_claimer(e, &claimer);
    VaultEvents::transfer_claimer(e, claimer_id, previous, new_owner.clone());
}
