use soroban_sdk::{contractclient, Address, Env};

/// Swap adapter interface for input tokens other than the underlying
#[contractclient(name = "Client")]
pub trait SwapAdapter {
    /// Swap `amount_in` of `token`, already transferred to the adapter, into
    /// underlying sent to `to`
    ///
    /// Returns the underlying sent
    fn swap_into_underlying(
        e: Env,
        token: Address,
        amount_in: i128,
        min_amount_out: i128,
        to: Address,
    ) -> i128;

    /// Swap `amount_in` of underlying, already transferred to the adapter,
    /// into `token` sent to `to`
    ///
    /// Returns the `token` amount sent
    fn swap_from_underlying(
        e: Env,
        token: Address,
        amount_in: i128,
        min_amount_out: i128,
        to: Address,
    ) -> i128;
}
