use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, Env};

use crate::constants::SCALAR_7;
use crate::dependencies::StrategyClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::ledger::Ledger;

/// Move underlying between the vault and the strategy towards
/// `invest_pct` of the non-sponsored underlying
///
/// ### Returns
/// The underlying sent to the strategy, negative when withdrawal was requested
///
/// ### Panics
/// `NoStrategy` if no strategy is set
pub fn execute_update_invested(e: &Env) -> i128 {
    let strategy = match storage::get_strategy(e) {
        Some(strategy) => strategy,
        None => panic_with_error!(e, VaultError::NoStrategy),
    };
    let ledger = Ledger::load(e);
    let config = storage::get_config(e);
    let target = ledger
        .shares_underlying(e)
        .fixed_mul_floor(e, &config.invest_pct, &SCALAR_7);
    let strategy_client = StrategyClient::new(e, &strategy);

    let moved = if ledger.invested < target {
        let amount = (target - ledger.invested).min(ledger.idle);
        if amount > 0 {
            TokenClient::new(e, &storage::get_underlying(e)).transfer(
                &e.current_contract_address(),
                &strategy,
                &amount,
            );
            strategy_client.invest();
        }
        amount
    } else if ledger.invested > target {
        let excess = ledger.invested - target;
        strategy_client.withdraw_to_vault(&excess);
        -excess
    } else {
        0
    };

    log!(e, "update invested: target {}, invested {}, moved {}", target, ledger.invested, moved);
    VaultEvents::update_invested(e, strategy, target, ledger.invested, moved);
    moved
}
