use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, vec, Address, Env, Vec};

use crate::constants::{MAX_LOCK_DURATION, SCALAR_7};
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{ClaimParams, Deposit};
use crate::vault::convert::receive_underlying;
use crate::vault::ledger::Ledger;

/// Deposit principal, creating one deposit record per claim
///
/// Shares are priced off the snapshot taken before any funds arrive. Each
/// split gets `amount * pct` rounded down and the last split gets what is
/// left, so the splits add up to the amount received.
///
/// ### Returns
/// The ids of the deposits created, in claim order
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit(
    e: &Env,
    from: &Address,
    token: &Address,
    amount: i128,
    lock_duration: u64,
    claims: &Vec<ClaimParams>,
    min_amount_out: i128,
) -> Vec<u32> {
    if storage::get_paused(e) {
        panic_with_error!(e, VaultError::Paused);
    }
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let config = storage::get_config(e);
    if lock_duration < config.min_lock_period || lock_duration > MAX_LOCK_DURATION {
        panic_with_error!(e, VaultError::InvalidLockDuration);
    }
    require_valid_claims(e, claims);

    let mut ledger = Ledger::load(e);
    let received = receive_underlying(e, from, token, amount, min_amount_out);
    let locked_until = e.ledger().timestamp() + lock_duration;

    let mut deposit_ids = vec![e];
    let mut remaining = received;
    let last = claims.len() - 1;
    for (index, claim) in claims.iter().enumerate() {
        let split = if index as u32 == last {
            remaining
        } else {
            received.fixed_mul_floor(e, &claim.pct, &SCALAR_7)
        };
        remaining -= split;

        let mut claimer = ledger.load_or_create_claimer(e, &claim.beneficiary);
        if ledger.is_in_debt(e, &claimer) {
            panic_with_error!(e, VaultError::ClaimerInDebt);
        }
        let shares = ledger.shares_for_amount(e, split);
        if shares <= 0 {
            panic_with_error!(e, VaultError::ZeroShares);
        }

        claimer.principal += split;
        claimer.shares += shares;
        ledger.cache_claimer(&claimer);
        ledger.totals.total_shares += shares;
        ledger.totals.total_principal += split;
        ledger.idle += split;

        let deposit = Deposit {
            id: storage::bump_deposit_id(e),
            owner: from.clone(),
            claimer_id: claimer.id,
            amount: split,
            shares,
            locked_until,
        };
        storage::set_deposit(e, &deposit);
        VaultEvents::deposit(
            e,
            from.clone(),
            deposit.id,
            claimer.id,
            split,
            shares,
            locked_until,
        );
        deposit_ids.push_back(deposit.id);
    }

    ledger.store(e);
    deposit_ids
}

/// Require claims that split exactly 100% into positive parts
fn require_valid_claims(e: &Env, claims: &Vec<ClaimParams>) {
    if claims.is_empty() {
        panic_with_error!(e, VaultError::InvalidClaims);
    }
    let mut total_pct: i128 = 0;
    for claim in claims.iter() {
        if claim.pct <= 0 {
            panic_with_error!(e, VaultError::InvalidClaims);
        }
        total_pct += claim.pct;
    }
    if total_pct != SCALAR_7 {
        panic_with_error!(e, VaultError::InvalidClaims);
    }
}
