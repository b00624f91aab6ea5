use soroban_sdk::{contractclient, Env};

/// Capability set every strategy exposes to the vault.
///
/// Synchronous strategies settle `invest` and `withdraw_to_vault` inside the
/// call. Asynchronous strategies register an operation and settle later, so
/// the vault must never assume funds moved when the call returns.
#[contractclient(name = "StrategyClient")]
pub trait Strategy {
    /// (Vault only) Deploy the underlying currently held by the strategy
    fn invest(e: Env);

    /// (Vault only) Return `amount` of underlying to the vault
    ///
    /// ### Arguments
    /// * `amount` - The amount of underlying the vault wants back, net of fees
    fn withdraw_to_vault(e: Env, amount: i128);

    /// Value of everything the strategy manages, in underlying, net of any
    /// unrealized performance fee
    fn invested_assets(e: Env) -> i128;

    /// Whether the strategy still holds or expects any assets
    fn has_assets(e: Env) -> bool;
}
