use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env};
use strategy::events::StrategyEvents;
use strategy::{base, migration, storage as strategy_storage, Strategy};

use crate::{position, storage};

#[contract]
pub struct SyncStrategyContract;

#[contractclient(name = "SyncStrategyClient")]
pub trait SyncStrategy {
    /// Returns the pool the strategy deposits into
    fn pool(e: Env) -> Address;

    /// Returns the vault the strategy serves
    fn vault(e: Env) -> Address;

    /// Returns the underlying cost of the current pool position
    fn cost_basis(e: Env) -> i128;

    /// (Admin only) Replace the manager
    ///
    /// ### Arguments
    /// * `manager` - The new manager address
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn set_manager(e: Env, manager: Address);

    /// (Admin only) Update where performance fees go and how large they are
    ///
    /// ### Arguments
    /// * `treasury` - The address receiving performance fees
    /// * `perf_fee_pct` - The fee on realized profit (SCALAR_7)
    ///
    /// ### Panics
    /// - If the caller is not the admin
    /// - `InvalidConfig` if `perf_fee_pct` is outside 0..=100%
    fn set_fee_config(e: Env, treasury: Address, perf_fee_pct: i128);

    /// (Admin only) Step stored data forward to the current schema version
    ///
    /// ### Returns
    /// The schema version after migration
    ///
    /// ### Panics
    /// `InvalidVersion` if storage was written by a newer version
    fn migrate(e: Env) -> u32;

    /// (Admin only) Upgrade the contract to a new WASM binary
    ///
    /// ### Arguments
    /// * `wasm_hash` - The hash of the new WASM binary
    ///
    /// ### Panics
    /// If the caller is not the admin
    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl SyncStrategyContract {
    /// Constructor for initializing the contract when deployed
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        e: Env,
        vault: Address,
        underlying: Address,
        pool: Address,
        admin: Address,
        manager: Address,
        treasury: Address,
        perf_fee_pct: i128,
    ) {
        position::execute_initialize(
            &e,
            &vault,
            &underlying,
            &pool,
            &admin,
            &manager,
            &treasury,
            perf_fee_pct,
        );
        strategy_storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Strategy for SyncStrategyContract {
    fn invest(e: Env) {
        strategy_storage::extend_instance(&e);
        base::require_vault(&e);
        position::execute_invest(&e);
    }

    fn withdraw_to_vault(e: Env, amount: i128) {
        strategy_storage::extend_instance(&e);
        base::require_vault(&e);
        base::require_positive(&e, amount);
        position::execute_withdraw_to_vault(&e, amount);
    }

    fn invested_assets(e: Env) -> i128 {
        position::invested_assets(&e)
    }

    fn has_assets(e: Env) -> bool {
        position::has_assets(&e)
    }
}

#[contractimpl]
impl SyncStrategy for SyncStrategyContract {
    fn pool(e: Env) -> Address {
        storage::get_pool(&e)
    }

    fn vault(e: Env) -> Address {
        strategy_storage::get_vault(&e)
    }

    fn cost_basis(e: Env) -> i128 {
        strategy_storage::get_cost_basis(&e)
    }

    fn set_manager(e: Env, manager: Address) {
        strategy_storage::extend_instance(&e);
        base::require_admin(&e);
        base::execute_set_manager(&e, &manager);
    }

    fn set_fee_config(e: Env, treasury: Address, perf_fee_pct: i128) {
        strategy_storage::extend_instance(&e);
        base::require_admin(&e);
        base::execute_set_fee_config(&e, &treasury, perf_fee_pct);
    }

    fn migrate(e: Env) -> u32 {
        strategy_storage::extend_instance(&e);
        base::require_admin(&e);
        migration::execute_migrate(&e)
    }

    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>) {
        strategy_storage::extend_instance(&e);
        let admin = base::require_admin(&e);

        e.deployer().update_current_contract_wasm(wasm_hash.clone());
        StrategyEvents::upgrade_wasm(&e, admin, wasm_hash);
    }
}
