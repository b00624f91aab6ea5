use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{map, panic_with_error, vec, Address, Env, Map, Vec};

use crate::constants::{SCALAR_18, SCALAR_7};
use crate::dependencies::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{Claimer, VaultTotals};

/// Snapshot of the vault's accounting for a single operation
///
/// Balances are read once when the ledger is loaded and kept current as the
/// operation moves principal in or out, so every share conversion within the
/// operation uses the same price. Nothing is written until `store`, which
/// callers run before any outgoing transfer.
pub struct Ledger {
    pub totals: VaultTotals,
    pub idle: i128,     // Underlying held by the vault
    pub invested: i128, // Underlying reported by the strategy
    investment_fee_pct: i128,
    claimers: Map<u32, Claimer>,
    claimers_to_store: Vec<u32>,
}

impl Ledger {
    pub fn load(e: &Env) -> Self {
        let config = storage::get_config(e);
        let idle = TokenClient::new(e, &storage::get_underlying(e))
            .balance(&e.current_contract_address());
        let invested = match storage::get_strategy(e) {
            Some(strategy) => StrategyClient::new(e, &strategy).invested_assets(),
            None => 0,
        };
        Ledger {
            totals: storage::get_totals(e),
            idle,
            invested,
            investment_fee_pct: config.investment_fee_pct,
            claimers: map![e],
            claimers_to_store: vec![e],
        }
    }

    /// Idle underlying plus strategy assets valued net of the exit cost
    pub fn total_underlying(&self, e: &Env) -> i128 {
        let exit_cost = if self.invested > 0 {
            self.invested
                .fixed_mul_floor(e, &self.investment_fee_pct, &SCALAR_7)
        } else {
            0
        };
        self.idle + self.invested - exit_cost
    }

    /// Underlying backing the shares, i.e. everything not sponsored
    pub fn shares_underlying(&self, e: &Env) -> i128 {
        (self.total_underlying(e) - self.totals.total_sponsored).max(0)
    }

    /// Shares minted for `amount` at the current price, rounded down
    pub fn shares_for_amount(&self, e: &Env, amount: i128) -> i128 {
        let total_shares = self.totals.total_shares;
        if total_shares == 0 {
            return amount * SCALAR_18;
        }
        let backing = self.shares_underlying(e);
        if backing <= 0 {
            return 0;
        }
        amount.fixed_mul_floor(e, &total_shares, &backing)
    }

    /// Shares that must be burned to take `amount` out, rounded up
    pub fn shares_to_burn(&self, e: &Env, amount: i128) -> i128 {
        let backing = self.shares_underlying(e);
        if backing <= 0 {
            return self.totals.total_shares;
        }
        amount.fixed_mul_ceil(e, &self.totals.total_shares, &backing)
    }

    /// Underlying value of `shares`, rounded down
    pub fn value_of(&self, e: &Env, shares: i128) -> i128 {
        if shares <= 0 || self.totals.total_shares <= 0 {
            return 0;
        }
        shares.fixed_mul_floor(e, &self.shares_underlying(e), &self.totals.total_shares)
    }

    /// Yield the claimer can take without touching principal
    pub fn claimable_yield(&self, e: &Env, claimer: &Claimer) -> i128 {
        (self.value_of(e, claimer.shares) - claimer.principal).max(0)
    }

    /// Whether the claimer's shares are worth less than its principal
    ///
    /// The value is rounded up so share rounding alone never puts a claimer in debt
    pub fn is_in_debt(&self, e: &Env, claimer: &Claimer) -> bool {
        if claimer.principal <= 0 {
            return false;
        }
        if self.totals.total_shares <= 0 {
            return true;
        }
        let value = claimer.shares.fixed_mul_ceil(
            e,
            &self.shares_underlying(e),
            &self.totals.total_shares,
        );
        value < claimer.principal
    }

    /// Underlying per SCALAR_18 shares, in SCALAR_7
    pub fn price_per_share(&self, e: &Env) -> i128 {
        if self.totals.total_shares <= 0 {
            return SCALAR_7;
        }
        self.shares_underlying(e)
            .fixed_mul_floor(e, &(SCALAR_18 * SCALAR_7), &self.totals.total_shares)
    }

    /********** Claimers **********/

    /// Fetch a claimer through the cache
    ///
    /// ### Panics
    /// If the claimer does not exist
    pub fn load_claimer(&mut self, e: &Env, id: u32) -> Claimer {
        if let Some(claimer) = self.claimers.get(id) {
            return claimer;
        }
        match storage::get_claimer(e, id) {
            Some(claimer) => claimer,
            None => panic_with_error!(e, VaultError::ClaimerNotFound),
        }
    }

    /// Fetch the claimer for `beneficiary`, creating it on first use
    pub fn load_or_create_claimer(&mut self, e: &Env, beneficiary: &Address) -> Claimer {
        if let Some(id) = storage::get_claimer_id(e, beneficiary) {
            return self.load_claimer(e, id);
        }
        let id = storage::bump_claimer_id(e);
        storage::set_claimer_id(e, beneficiary, id);
        let claimer = Claimer {
            id,
            beneficiary: beneficiary.clone(),
            owner: beneficiary.clone(),
            principal: 0,
            shares: 0,
            claimed: 0,
        };
        self.cache_claimer(&claimer);
        VaultEvents::new_claimer(e, beneficiary.clone(), id);
        claimer
    }

    pub fn cache_claimer(&mut self, claimer: &Claimer) {
        self.claimers.set(claimer.id, claimer.clone());
        if !self.claimers_to_store.contains(claimer.id) {
            self.claimers_to_store.push_back(claimer.id);
        }
    }

    /// Write the totals and every cached claimer
    ///
    /// ### Panics
    /// `InvariantViolation` if any total or claimer balance went negative
    pub fn store(&self, e: &Env) {
        let totals = &self.totals;
        if totals.total_shares < 0 || totals.total_principal < 0 || totals.total_sponsored < 0 {
            panic_with_error!(e, VaultError::InvariantViolation);
        }
        for id in self.claimers_to_store.iter() {
            if let Some(claimer) = self.claimers.get(id) {
                if claimer.principal < 0 || claimer.shares < 0 {
                    panic_with_error!(e, VaultError::InvariantViolation);
                }
                storage::set_claimer(e, &claimer);
            }
        }
        storage::set_totals(e, totals);
    }
}

/// Make sure the vault holds `amount` of underlying, pulling the shortfall
/// from the strategy
///
/// ### Panics
/// `InsufficientLiquidity` if the vault still holds less than `amount`
pub fn ensure_liquidity(e: &Env, amount: i128) {
    let token = TokenClient::new(e, &storage::get_underlying(e));
    let vault = e.current_contract_address();
    let idle = token.balance(&vault);
    if idle >= amount {
        return;
    }
    if let Some(strategy) = storage::get_strategy(e) {
        StrategyClient::new(e, &strategy).withdraw_to_vault(&(amount - idle));
    }
    if token.balance(&vault) < amount {
        panic_with_error!(e, VaultError::InsufficientLiquidity);
    }
}

/// Send `amount` of underlying held by the vault to `to`
pub fn transfer_underlying(e: &Env, to: &Address, amount: i128) {
    if amount <= 0 {
        return;
    }
    TokenClient::new(e, &storage::get_underlying(e)).transfer(
        &e.current_contract_address(),
        to,
        &amount,
    );
}
