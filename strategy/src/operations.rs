//! Queue of strategy operations that settle through an external operator.
//!
//! Each operation gets a monotonic id at creation and keeps it until it is
//! resolved. Operations settle in any order; resolving one never readdresses
//! another.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;

/// The direction of an async round trip
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
#[contracttype]
pub enum OperationKind {
    Deposit = 0,
    Redeem = 1,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AsyncOperation {
    pub id: u32,                // Stable id returned at creation
    pub kind: OperationKind,    // Deposit or redeem
    pub operator: Address,      // The only address allowed to report the result
    pub amount: i128,           // Underlying sent (deposit) or receipt tokens sent (redeem)
    pub cost_basis: i128,       // Underlying cost of the redeemed portion, 0 for deposits
    pub result: Option<i128>,   // Settled amount reported by the operator
}

/// Register a new pending operation and return its id
pub fn init_operation(
    e: &Env,
    kind: OperationKind,
    operator: &Address,
    amount: i128,
    cost_basis: i128,
) -> u32 {
    if amount <= 0 {
        panic_with_error!(e, StrategyError::ZeroAmount);
    }
    let id = storage::bump_operation_id(e);
    let operation = AsyncOperation {
        id,
        kind,
        operator: operator.clone(),
        amount,
        cost_basis,
        result: None,
    };
    storage::set_operation(e, &operation);

    let mut pending = storage::get_pending_operations(e);
    pending.push_back(id);
    storage::set_pending_operations(e, &pending);

    StrategyEvents::init_operation(e, operator.clone(), id, kind, amount);
    id
}

/// Record the settled amount the operator reports for operation `id`
///
/// ### Panics
/// - `NotRunning` if no operation `id` is pending
/// - `WrongOperationKind` if the operation is not of `kind`
/// - `NotOperator` if `operator` did not start the operation
/// - `AlreadyReported` if a result was already recorded
pub fn report_result(
    e: &Env,
    id: u32,
    kind: OperationKind,
    operator: &Address,
    result: i128,
) -> AsyncOperation {
    if result < 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }
    let mut operation = load_running(e, id, kind);
    if operation.operator != *operator {
        panic_with_error!(e, StrategyError::NotOperator);
    }
    if operation.result.is_some() {
        panic_with_error!(e, StrategyError::AlreadyReported);
    }
    operation.result = Some(result);
    storage::set_operation(e, &operation);

    StrategyEvents::operation_result(e, operator.clone(), id, result);
    operation
}

/// Remove a settled operation from the queue and return it with its result
///
/// ### Panics
/// - `NotRunning` if no operation `id` is pending
/// - `WrongOperationKind` if the operation is not of `kind`
/// - `ResultNotReady` if the operator has not reported yet
pub fn resolve_operation(e: &Env, id: u32, kind: OperationKind) -> (AsyncOperation, i128) {
    let operation = load_running(e, id, kind);
    let result = match operation.result {
        Some(result) => result,
        None => panic_with_error!(e, StrategyError::ResultNotReady),
    };

    storage::remove_operation(e, id);
    let mut pending = storage::get_pending_operations(e);
    if let Some(index) = pending.first_index_of(id) {
        pending.remove(index);
    }
    storage::set_pending_operations(e, &pending);

    StrategyEvents::finish_operation(e, id, kind, operation.amount, result);
    (operation, result)
}

/// All pending operations, oldest first
pub fn pending_operations(e: &Env) -> Vec<AsyncOperation> {
    let mut operations = Vec::new(e);
    for id in storage::get_pending_operations(e).iter() {
        if let Some(operation) = storage::get_operation(e, id) {
            operations.push_back(operation);
        }
    }
    operations
}

fn load_running(e: &Env, id: u32, kind: OperationKind) -> AsyncOperation {
    let operation = match storage::get_operation(e, id) {
        Some(operation) => operation,
        None => panic_with_error!(e, StrategyError::NotRunning),
    };
    if operation.kind != kind {
        panic_with_error!(e, StrategyError::WrongOperationKind);
    }
    operation
}
