use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::constants::{MAX_LOCK_DURATION, MIN_SPONSOR_LOCK_DURATION};
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::Sponsor;
use crate::vault::convert::receive_underlying;
use crate::vault::ledger::{ensure_liquidity, transfer_underlying, Ledger};

/// Add principal that earns no yield and mints no shares
///
/// ### Returns
/// The id of the sponsor record
pub fn execute_sponsor(
    e: &Env,
    from: &Address,
    token: &Address,
    amount: i128,
    lock_duration: u64,
    min_amount_out: i128,
) -> u32 {
    if storage::get_paused(e) {
        panic_with_error!(e, VaultError::Paused);
    }
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if !(MIN_SPONSOR_LOCK_DURATION..=MAX_LOCK_DURATION).contains(&lock_duration) {
        panic_with_error!(e, VaultError::InvalidLockDuration);
    }

    let mut ledger = Ledger::load(e);
    let received = receive_underlying(e, from, token, amount, min_amount_out);
    ledger.totals.total_sponsored += received;
    ledger.idle += received;

    let sponsor = Sponsor {
        id: storage::bump_sponsor_id(e),
        depositor: from.clone(),
        amount: received,
        locked_until: e.ledger().timestamp() + lock_duration,
    };
    storage::set_sponsor(e, &sponsor);
    ledger.store(e);

    VaultEvents::sponsor(e, from.clone(), sponsor.id, received, sponsor.locked_until);
    sponsor.id
}

/// Return sponsored principal after its lock
///
/// Sponsors are repaid in full while the vault holds at least the total
/// sponsored. Below that they share the shortfall pro rata.
///
/// ### Returns
/// The underlying paid
pub fn execute_unsponsor(e: &Env, from: &Address, to: &Address, sponsor_ids: &Vec<u32>) -> i128 {
    let mut ledger = Ledger::load(e);
    let now = e.ledger().timestamp();
    let mut paid = 0;
    for id in sponsor_ids.iter() {
        let sponsor = match storage::get_sponsor(e, id) {
            Some(sponsor) => sponsor,
            None => panic_with_error!(e, VaultError::SponsorNotFound),
        };
        if sponsor.depositor != *from {
            panic_with_error!(e, VaultError::NotSponsorOwner);
        }
        if now < sponsor.locked_until {
            panic_with_error!(e, VaultError::DepositLocked);
        }

        let total_underlying = ledger.total_underlying(e);
        let total_sponsored = ledger.totals.total_sponsored;
        let payout = if total_underlying >= total_sponsored {
            sponsor.amount
        } else {
            sponsor
                .amount
                .fixed_mul_floor(e, &total_underlying.max(0), &total_sponsored)
        };

        ledger.totals.total_sponsored -= sponsor.amount;
        ledger.idle -= payout;
        storage::del_sponsor(e, id);
        VaultEvents::unsponsor(e, from.clone(), id, sponsor.amount, payout);
        paid += payout;
    }

    ledger.store(e);
    ensure_liquidity(e, paid);
    transfer_underlying(e, to, paid);
    paid
}
