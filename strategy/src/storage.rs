use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol, Vec};

use crate::cycle::YieldCycle;
use crate::operations::AsyncOperation;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days

/********** Storage Types **********/

const VAULT_KEY: &str = "Vault";
const UNDERLYING_KEY: &str = "Underlying";
const ADMIN_KEY: &str = "Admin";
const MANAGER_KEY: &str = "Manager";
const TREASURY_KEY: &str = "Treasury";
const PERF_FEE_KEY: &str = "PerfFee";
const COST_BASIS_KEY: &str = "CostBasis";
const VERSION_KEY: &str = "Version";
const OP_COUNTER_KEY: &str = "OpCtr";
const PENDING_OPS_KEY: &str = "PendingOps";
const CYCLE_KEY: &str = "Cycle";

#[derive(Clone)]
#[contracttype]
pub enum StrategyDataKey {
    // A pending async operation by its stable id
    Operation(u32),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

fn get_address(e: &Env, key: &str) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, key))
        .unwrap_optimized()
}

fn set_address(e: &Env, key: &str, address: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, key), address);
}

/********** Roles & Wiring **********/

pub fn get_vault(e: &Env) -> Address {
    get_address(e, VAULT_KEY)
}

pub fn set_vault(e: &Env, vault: &Address) {
    set_address(e, VAULT_KEY, vault);
}

pub fn get_underlying(e: &Env) -> Address {
    get_address(e, UNDERLYING_KEY)
}

pub fn set_underlying(e: &Env, underlying: &Address) {
    set_address(e, UNDERLYING_KEY, underlying);
}

pub fn get_admin(e: &Env) -> Address {
    get_address(e, ADMIN_KEY)
}

pub fn set_admin(e: &Env, admin: &Address) {
    set_address(e, ADMIN_KEY, admin);
}

pub fn get_manager(e: &Env) -> Address {
    get_address(e, MANAGER_KEY)
}

pub fn set_manager(e: &Env, manager: &Address) {
    set_address(e, MANAGER_KEY, manager);
}

pub fn get_treasury(e: &Env) -> Address {
    get_address(e, TREASURY_KEY)
}

pub fn set_treasury(e: &Env, treasury: &Address) {
    set_address(e, TREASURY_KEY, treasury);
}

/********** Fees & Accounting **********/

/// Fetch the performance fee rate (SCALAR_7)
pub fn get_perf_fee_pct(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, PERF_FEE_KEY))
        .unwrap_or(0)
}

pub fn set_perf_fee_pct(e: &Env, pct: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, PERF_FEE_KEY), &pct);
}

/// Fetch the underlying cost of the position currently held by the strategy
pub fn get_cost_basis(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, COST_BASIS_KEY))
        .unwrap_or(0)
}

pub fn set_cost_basis(e: &Env, cost_basis: i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, COST_BASIS_KEY), &cost_basis);
}

/********** Schema Version **********/

/// Fetch the storage schema version, 0 if it was never written
pub fn get_version(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, VERSION_KEY))
        .unwrap_or(0)
}

pub fn set_version(e: &Env, version: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, VERSION_KEY), &version);
}

/********** Async Operations **********/

/// Increment the operation counter and return the new id
///
/// Ids are never reused, so removing one operation never changes how any
/// other pending operation is addressed
pub fn bump_operation_id(e: &Env) -> u32 {
    let key = Symbol::new(e, OP_COUNTER_KEY);
    let next = e.storage().instance().get::<Symbol, u32>(&key).unwrap_or(0) + 1;
    e.storage().instance().set::<Symbol, u32>(&key, &next);
    next
}

/// Fetch an operation by id, if it is still pending
pub fn get_operation(e: &Env, id: u32) -> Option<AsyncOperation> {
    let key = StrategyDataKey::Operation(id);
    let operation = e
        .storage()
        .persistent()
        .get::<StrategyDataKey, AsyncOperation>(&key);
    if operation.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    operation
}

pub fn set_operation(e: &Env, operation: &AsyncOperation) {
    let key = StrategyDataKey::Operation(operation.id);
    e.storage()
        .persistent()
        .set::<StrategyDataKey, AsyncOperation>(&key, operation);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn remove_operation(e: &Env, id: u32) {
    e.storage()
        .persistent()
        .remove(&StrategyDataKey::Operation(id));
}

/// Fetch the ids of all pending operations, oldest first
pub fn get_pending_operations(e: &Env) -> Vec<u32> {
    e.storage()
        .instance()
        .get::<Symbol, Vec<u32>>(&Symbol::new(e, PENDING_OPS_KEY))
        .unwrap_or(Vec::new(e))
}

pub fn set_pending_operations(e: &Env, ids: &Vec<u32>) {
    e.storage()
        .instance()
        .set::<Symbol, Vec<u32>>(&Symbol::new(e, PENDING_OPS_KEY), ids);
}

/********** Yield Cycle **********/

/// Fetch the current yield distribution cycle
///
/// ### Panics
/// If the strategy was deployed without a cycle
pub fn get_cycle(e: &Env) -> YieldCycle {
    e.storage()
        .instance()
        .get::<Symbol, YieldCycle>(&Symbol::new(e, CYCLE_KEY))
        .unwrap_optimized()
}

pub fn set_cycle(e: &Env, cycle: &YieldCycle) {
    e.storage()
        .instance()
        .set::<Symbol, YieldCycle>(&Symbol::new(e, CYCLE_KEY), cycle);
}
