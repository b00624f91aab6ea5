use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};

use crate::dependencies::SwapClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;

/// Pull `amount` of `token` from `from` into the vault as underlying
///
/// Tokens other than the underlying go through the swap adapter registered
/// for them. The amount received is measured on the vault's balance.
///
/// ### Returns
/// The underlying received
///
/// ### Panics
/// - `UnsupportedToken` if no adapter is registered for `token`
/// - `SlippageExceeded` if less than `min_amount_out` arrives
pub fn receive_underlying(
    e: &Env,
    from: &Address,
    token: &Address,
    amount: i128,
    min_amount_out: i128,
) -> i128 {
    let underlying = storage::get_underlying(e);
    let vault = e.current_contract_address();
    if *token == underlying {
        TokenClient::new(e, &underlying).transfer(from, &vault, &amount);
        return amount;
    }

    let adapter = match storage::get_pool(e, token) {
        Some(adapter) => adapter,
        None => panic_with_error!(e, VaultError::UnsupportedToken),
    };
    let underlying_client = TokenClient::new(e, &underlying);
    let balance_before = underlying_client.balance(&vault);

    TokenClient::new(e, token).transfer(from, &adapter, &amount);
    SwapClient::new(e, &adapter).swap_into_underlying(token, &amount, &min_amount_out, &vault);

    let received = underlying_client.balance(&vault) - balance_before;
    if received < min_amount_out || received <= 0 {
        panic_with_error!(e, VaultError::SlippageExceeded);
    }
    log!(e, "swapped {} into {} underlying", amount, received);
    VaultEvents::swap(e, token.clone(), amount, received);
    received
}
