use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env, Vec};
use strategy::events::StrategyEvents;
use strategy::operations;
use strategy::{base, migration, storage as strategy_storage, AsyncOperation, Strategy};

use crate::events::AsyncStrategyEvents;
use crate::{settlement, storage};

#[contract]
pub struct AsyncStrategyContract;

#[contractclient(name = "AsyncStrategyClient")]
pub trait AsyncStrategy {
    /// Returns the token the operator issues for settled deposits
    fn receipt_token(e: Env) -> Address;

    /// Returns the oracle pricing the receipt token in underlying
    fn oracle(e: Env) -> Address;

    /// Returns the operator new operations are sent to
    fn operator(e: Env) -> Address;

    /// Returns the underlying cost of the settled receipt tokens held
    fn cost_basis(e: Env) -> i128;

    /// Returns the timestamp of the newest oracle price the strategy accepted
    fn last_price_timestamp(e: Env) -> u64;

    /// Fetch a pending operation by id
    ///
    /// ### Arguments
    /// * `id` - The id returned when the operation was opened
    ///
    /// ### Returns
    /// The operation, or None once it is finished
    fn operation(e: Env, id: u32) -> Option<AsyncOperation>;

    /// Returns every pending operation, oldest first
    fn pending_operations(e: Env) -> Vec<AsyncOperation>;

    /// (Operator only) Report how many receipt tokens a deposit settled for.
    /// The receipt tokens must be transferred to the strategy first.
    ///
    /// ### Arguments
    /// * `operator` - The operator the deposit was sent to
    /// * `id` - The deposit operation id
    /// * `settled_amount` - The receipt tokens issued
    ///
    /// ### Panics
    /// - `NotRunning` if no operation `id` is pending
    /// - `WrongOperationKind` if `id` is a redemption
    /// - `NotOperator` if `operator` did not receive the deposit
    /// - `AlreadyReported` if a result was already recorded
    /// - `ResultNotDelivered` if the receipt tokens have not arrived
    fn notify_deposit_result(e: Env, operator: Address, id: u32, settled_amount: i128);

    /// (Operator only) Report how much underlying a redemption settled for.
    /// The underlying must be transferred to the strategy first.
    ///
    /// ### Arguments
    /// * `operator` - The operator the receipt tokens were sent to
    /// * `id` - The redeem operation id
    /// * `settled_amount` - The underlying paid out
    ///
    /// ### Panics
    /// - `NotRunning` if no operation `id` is pending
    /// - `WrongOperationKind` if `id` is a deposit
    /// - `NotOperator` if `operator` did not receive the receipt tokens
    /// - `AlreadyReported` if a result was already recorded
    /// - `ResultNotDelivered` if the underlying has not arrived
    fn notify_redeem_result(e: Env, operator: Address, id: u32, settled_amount: i128);

    /// (Manager or admin) Resolve a reported deposit
    ///
    /// ### Arguments
    /// * `caller` - The manager or admin
    /// * `id` - The deposit operation id
    ///
    /// ### Returns
    /// The receipt tokens the deposit settled for
    ///
    /// ### Panics
    /// - `NotRunning` if no operation `id` is pending
    /// - `ResultNotReady` if the operator has not reported yet
    fn finish_deposit(e: Env, caller: Address, id: u32) -> i128;

    /// (Manager or admin) Resolve a reported redemption, paying the
    /// performance fee and sending the rest to the vault
    ///
    /// ### Arguments
    /// * `caller` - The manager or admin
    /// * `id` - The redeem operation id
    ///
    /// ### Returns
    /// The underlying sent to the vault
    ///
    /// ### Panics
    /// - `NotRunning` if no operation `id` is pending
    /// - `ResultNotReady` if the operator has not reported yet
    fn finish_redeem(e: Env, caller: Address, id: u32) -> i128;

    /// (Admin only) Replace the operator for new operations. Pending
    /// operations still settle with the operator they were sent to.
    fn set_operator(e: Env, operator: Address);

    /// (Admin only) Replace the receipt price oracle
    fn set_oracle(e: Env, oracle: Address);

    /// (Admin only) Replace the manager
    fn set_manager(e: Env, manager: Address);

    /// (Admin only) Update where performance fees go and how large they are
    ///
    /// ### Panics
    /// `InvalidConfig` if `perf_fee_pct` is outside 0..=100%
    fn set_fee_config(e: Env, treasury: Address, perf_fee_pct: i128);

    /// (Admin only) Step stored data forward to the current schema version
    fn migrate(e: Env) -> u32;

    /// (Admin only) Upgrade the contract to a new WASM binary
    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl AsyncStrategyContract {
    /// Constructor for initializing the contract when deployed
    #[allow(clippy::too_many_arguments)]
    pub fn __constructor(
        e: Env,
        vault: Address,
        underlying: Address,
        receipt_token: Address,
        oracle: Address,
        operator: Address,
        admin: Address,
        manager: Address,
        treasury: Address,
        perf_fee_pct: i128,
    ) {
        settlement::execute_initialize(
            &e,
            &vault,
            &underlying,
            &receipt_token,
            &oracle,
            &operator,
            &admin,
            &manager,
            &treasury,
            perf_fee_pct,
        );
        strategy_storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Strategy for AsyncStrategyContract {
    fn invest(e: Env) {
        strategy_storage::extend_instance(&e);
        base::require_vault(&e);
        settlement::execute_invest(&e);
    }

    fn withdraw_to_vault(e: Env, amount: i128) {
        strategy_storage::extend_instance(&e);
        base::require_vault(&e);
        base::require_positive(&e, amount);
        settlement::execute_withdraw_to_vault(&e, amount);
    }

    fn invested_assets(e: Env) -> i128 {
        settlement::invested_assets(&e)
    }

    fn has_assets(e: Env) -> bool {
        settlement::has_assets(&e)
    }
}

#[contractimpl]
impl AsyncStrategy for AsyncStrategyContract {
    fn receipt_token(e: Env) -> Address {
        storage::get_receipt_token(&e)
    }

    fn oracle(e: Env) -> Address {
        storage::get_oracle(&e)
    }

    fn operator(e: Env) -> Address {
        storage::get_operator(&e)
    }

    fn cost_basis(e: Env) -> i128 {
        strategy_storage::get_cost_basis(&e)
    }

    fn last_price_timestamp(e: Env) -> u64 {
        storage::get_last_price_timestamp(&e)
    }

    fn operation(e: Env, id: u32) -> Option<AsyncOperation> {
        strategy_storage::get_operation(&e, id)
    }

    fn pending_operations(e: Env) -> Vec<AsyncOperation> {
        operations::pending_operations(&e)
    }

    fn notify_deposit_result(e: Env, operator: Address, id: u32, settled_amount: i128) {
        strategy_storage::extend_instance(&e);
        operator.require_auth();
        settlement::execute_report_deposit(&e, &operator, id, settled_amount);
    }

    fn notify_redeem_result(e: Env, operator: Address, id: u32, settled_amount: i128) {
        strategy_storage::extend_instance(&e);
        operator.require_auth();
        settlement::execute_report_redeem(&e, &operator, id, settled_amount);
    }

    fn finish_deposit(e: Env, caller: Address, id: u32) -> i128 {
        strategy_storage::extend_instance(&e);
        base::require_manager(&e, &caller);
        settlement::execute_finish_deposit(&e, id)
    }

    fn finish_redeem(e: Env, caller: Address, id: u32) -> i128 {
        strategy_storage::extend_instance(&e);
        base::require_manager(&e, &caller);
        settlement::execute_finish_redeem(&e, id)
    }

    fn set_operator(e: Env, operator: Address) {
        strategy_storage::extend_instance(&e);
        base::require_admin(&e);
        storage::set_operator(&e, &operator);
        AsyncStrategyEvents::set_operator(&e, operator);
    }

    fn set_oracle(e: Env, oracle: Address) {
        strategy_storage::extend_instance(&e);
        base::require_admin(&e);
        storage::set_oracle(&e, &oracle);
        AsyncStrategyEvents::set_oracle(&e, oracle);
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
