use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::operations::OperationKind;

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when the strategy deploys underlying into its yield source
    ///
    /// - topics - `["invest"]`
    /// - data - `amount: i128`
    pub fn invest(e: &Env, amount: i128) {
        let topics = (Symbol::new(e, "invest"),);
        e.events().publish(topics, amount);
    }

    /// Emitted when underlying is sent back to the vault
    ///
    /// - topics - `["withdraw_to_vault"]`
    /// - data - `[requested: i128, sent: i128]`
    ///
    /// ### Arguments
    /// * requested - The amount the vault asked for
    /// * sent - The amount transferred in this call (0 while a redeem is pending)
    pub fn withdraw_to_vault(e: &Env, requested: i128, sent: i128) {
        let topics = (Symbol::new(e, "withdraw_to_vault"),);
        e.events().publish(topics, (requested, sent));
    }

    /// Emitted when a performance fee is paid out of realized profit
    ///
    /// - topics - `["performance_fee", treasury: Address]`
    /// - data - `[profit: i128, fee: i128]`
    pub fn performance_fee(e: &Env, treasury: Address, profit: i128, fee: i128) {
        let topics = (Symbol::new(e, "performance_fee"), treasury);
        e.events().publish(topics, (profit, fee));
    }

    /// Emitted when an async operation is registered
    ///
    /// - topics - `["init_operation", operator: Address]`
    /// - data - `[id: u32, kind: OperationKind, amount: i128]`
    pub fn init_operation(e: &Env, operator: Address, id: u32, kind: OperationKind, amount: i128) {
        let topics = (Symbol::new(e, "init_operation"), operator);
        e.events().publish(topics, (id, kind, amount));
    }

    /// Emitted when the operator reports the settled amount of an operation
    ///
    /// - topics - `["operation_result", operator: Address]`
    /// - data - `[id: u32, result: i128]`
    pub fn operation_result(e: &Env, operator: Address, id: u32, result: i128) {
        let topics = (Symbol::new(e, "operation_result"), operator);
        e.events().publish(topics, (id, result));
    }

    /// Emitted when a settled operation is resolved and leaves the queue
    ///
    /// - topics - `["finish_operation"]`
    /// - data - `[id: u32, kind: OperationKind, amount: i128, result: i128]`
    pub fn finish_operation(e: &Env, id: u32, kind: OperationKind, amount: i128, result: i128) {
        let topics = (Symbol::new(e, "finish_operation"),);
        e.events().publish(topics, (id, kind, amount, result));
    }

    /// Emitted when the yield distribution cycle restarts
    ///
    /// - topics - `["cycle_update"]`
    /// - data - `[start_amount: i128, end_amount: i128, start_timestamp: u64]`
    pub fn cycle_update(e: &Env, start_amount: i128, end_amount: i128, start_timestamp: u64) {
        let topics = (Symbol::new(e, "cycle_update"),);
        e.events()
            .publish(topics, (start_amount, end_amount, start_timestamp));
    }

    /// Emitted when the manager is replaced
    ///
    /// - topics - `["set_manager"]`
    /// - data - `manager: Address`
    pub fn set_manager(e: &Env, manager: Address) {
        let topics = (Symbol::new(e, "set_manager"),);
        e.events().publish(topics, manager);
    }

    /// Emitted when fee parameters change
    ///
    /// - topics - `["set_fee_config"]`
    /// - data - `[treasury: Address, perf_fee_pct: i128]`
    pub fn set_fee_config(e: &Env, treasury: Address, perf_fee_pct: i128) {
        let topics = (Symbol::new(e, "set_fee_config"),);
        e.events().publish(topics, (treasury, perf_fee_pct));
    }

    /// Emitted when storage is migrated to a new schema version
    ///
    /// - topics - `["migrate"]`
    /// - data - `[from: u32, to: u32]`
    pub fn migrate(e: &Env, from: u32, to: u32) {
        let topics = (Symbol::new(e, "migrate"),);
        e.events().publish(topics, (from, to));
    }

    /// Emitted when the contract code is replaced
    ///
    /// - topics - `["upgrade_wasm", admin: Address]`
    /// - data - `wasm_hash: BytesN<32>`
    pub fn upgrade_wasm(e: &Env, admin: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"), admin);
        e.events().publish(topics, wasm_hash);
    }
}
