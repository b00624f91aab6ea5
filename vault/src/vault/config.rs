use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{MAX_LOCK_DURATION, SCALAR_7, SCHEMA_VERSION};
use crate::dependencies::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{VaultConfig, VaultTotals};

pub fn execute_initialize(e: &Env, admin: &Address, underlying: &Address, config: &VaultConfig) {
    require_valid_config(e, config);
    storage::set_admin(e, admin);
    storage::set_underlying(e, underlying);
    storage::set_config(e, config);
    storage::set_totals(e, &VaultTotals::default());
    storage::set_paused(e, false);
    storage::set_version(e, SCHEMA_VERSION);
}

pub fn execute_set_config(e: &Env, config: &VaultConfig) {
    require_valid_config(e, config);
    storage::set_config(e, config);
    VaultEvents::set_config(e, config.clone());
}

/// Point the vault at a new strategy
///
/// ### Panics
/// `StrategyHasAssets` if the current strategy still holds or awaits funds
pub fn execute_set_strategy(e: &Env, strategy: &Address) {
    if let Some(current) = storage::get_strategy(e) {
        if StrategyClient::new(e, &current).has_assets() {
            panic_with_error!(e, VaultError::StrategyHasAssets);
        }
    }
    storage::set_strategy(e, strategy);
    VaultEvents::set_strategy(e, strategy.clone());
}

pub fn execute_add_pool(e: &Env, token: &Address, adapter: &Address) {
    if *token == storage::get_underlying(e) {
        panic_with_error!(e, VaultError::UnsupportedToken);
    }
    storage::set_pool(e, token, adapter);
    VaultEvents::add_pool(e, token.clone(), adapter.clone());
}

pub fn execute_remove_pool(e: &Env, token: &Address) {
    if storage::get_pool(e, token).is_none() {
        panic_with_error!(e, VaultError::UnsupportedToken);
    }
    storage::del_pool(e, token);
    VaultEvents::remove_pool(e, token.clone());
}

pub fn execute_set_paused(e: &Env, paused: bool) {
    storage::set_paused(e, paused);
    VaultEvents::set_paused(e, paused);
}

pub fn execute_propose_admin(e: &Env, admin: &Address, new_admin: &Address) {
    storage::set_proposed_admin(e, new_admin);
    VaultEvents::propose_admin(e, admin.clone(), new_admin.clone());
}

/// Hand the admin role to the proposed admin, who must authorize
///
/// ### Panics
/// `NoProposedAdmin` if nobody was proposed
pub fn execute_accept_admin(e: &Env) {
    let proposed = match storage::get_proposed_admin(e) {
        Some(admin) => admin,
        None => panic_with_error!(e, VaultError::NoProposedAdmin),
    };
    proposed.require_auth();
    storage::set_admin(e, &proposed);
    storage::del_proposed_admin(e);
    VaultEvents::accept_admin(e, proposed);
}

/// Step stored data forward to the schema this build writes
///
/// ### Panics
/// `InvalidVersion` if storage was written by a newer build
pub fn execute_migrate(e: &Env) -> u32 {
    let stored = storage::get_version(e);
    if stored > SCHEMA_VERSION {
        panic_with_error!(e, VaultError::InvalidVersion);
    }
    if stored < SCHEMA_VERSION {
        storage::set_version(e, SCHEMA_VERSION);
        VaultEvents::migrate(e, stored, SCHEMA_VERSION);
    }
    SCHEMA_VERSION
}

/// Require a valid vault configuration
///
/// ### Panics
/// `InvalidConfig` if a percentage is outside 0..=100% (the investment fee
/// must stay below 100%) or the minimum lock exceeds the maximum
fn require_valid_config(e: &Env, config: &VaultConfig) {
    let pct = 0..=SCALAR_7;
    if !pct.contains(&config.invest_pct)
        || !pct.contains(&config.perf_fee_pct)
        || !(0..SCALAR_7).contains(&config.investment_fee_pct)
        || config.min_lock_period > MAX_LOCK_DURATION
    {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::default_config;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{contract, contractimpl};

    #[contract]
    pub struct ConfigHost;

    #[contractimpl]
    impl ConfigHost {
        pub fn ping(_e: Env) {}
    }

    #[test]
    fn test_initialize_writes_current_version() {
        let e = Env::default();
        let host = e.register(ConfigHost, ());
        let admin = Address::generate(&e);
        let underlying = Address::generate(&e);
        e.as_contract(&host, || {
            execute_initialize(&e, &admin, &underlying, &default_config(&e));
            assert_eq!(storage::get_version(&e), SCHEMA_VERSION);
            assert_eq!(storage::get_totals(&e), VaultTotals::default());
            assert_eq!(execute_migrate(&e), SCHEMA_VERSION);
        });
    }

    #[test]
    fn test_migrate_from_unversioned_storage() {
        let e = Env::default();
        let host = e.register(ConfigHost, ());
        e.as_contract(&host, || {
            assert_eq!(storage::get_version(&e), 0);
            assert_eq!(execute_migrate(&e), SCHEMA_VERSION);
            assert_eq!(storage::get_version(&e), SCHEMA_VERSION);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #4002)")]
    fn test_migrate_rejects_newer_storage() {
        let e = Env::default();
        let host = e.register(ConfigHost, ());
        e.as_contract(&host, || {
            storage::set_version(&e, SCHEMA_VERSION + 1);
            execute_migrate(&e);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #4001)")]
    fn test_invest_pct_above_100_is_rejected() {
        let e = Env::default();
        let host = e.register(ConfigHost, ());
        let mut config = default_config(&e);
        config.invest_pct = SCALAR_7 + 1;
        e.as_contract(&host, || {
            require_valid_config(&e, &config);
        });
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #4001)")]
    fn test_full_investment_fee_is_rejected() {
        let e = Env::default();
        let host = e.register(ConfigHost, ());
        let mut config = default_config(&e);
        config.investment_fee_pct = SCALAR_7;
        e.as_contract(&host, || {
            require_valid_config(&e, &config);
        });
    }
}
