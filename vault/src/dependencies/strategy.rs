use soroban_sdk::{contractclient, Env};

/// Strategy client interface - the four calls the vault makes
#[contractclient(name = "Client")]
pub trait StrategyInterface {
    /// Deploy the underlying the vault has transferred to the strategy
    fn invest(e: Env);

    /// Return `amount` of underlying to the vault, or start doing so
    fn withdraw_to_vault(e: Env, amount: i128);

    /// Underlying the strategy will return to the vault, net of its fees
    fn invested_assets(e: Env) -> i128;

    /// Whether the strategy holds or awaits anything
    fn has_assets(e: Env) -> bool;
}
