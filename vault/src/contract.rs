use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, BytesN, Env, Vec};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::types::{ClaimParams, Claimer, Deposit, Role, Sponsor, VaultConfig, VaultTotals};
use crate::storage;
use crate::vault::{self, Ledger};

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /********** Views **********/

    /// Returns the admin
    fn admin(e: Env) -> Address;

    /// Returns the underlying token all principal and yield is denominated in
    fn underlying(e: Env) -> Address;

    /// Returns the current strategy, if one is set
    fn strategy(e: Env) -> Option<Address>;

    /// Returns the vault configuration
    fn config(e: Env) -> VaultConfig;

    /// Returns the running share, principal and sponsor totals
    fn totals(e: Env) -> VaultTotals;

    /// Returns the idle underlying plus the strategy's assets net of the
    /// investment fee
    fn total_underlying(e: Env) -> i128;

    /// Returns the non-sponsored underlying per SCALAR_18 shares, in SCALAR_7.
    /// Starts at 1_0000000 and only drops when the strategy realizes a loss.
    fn price_per_share(e: Env) -> i128;

    /// Fetch a deposit
    ///
    /// ### Panics
    /// `DepositNotFound` if the deposit does not exist or was withdrawn
    fn get_deposit(e: Env, deposit_id: u32) -> Deposit;

    /// Fetch a sponsor
    ///
    /// ### Panics
    /// `SponsorNotFound` if the sponsor does not exist or was returned
    fn get_sponsor(e: Env, sponsor_id: u32) -> Sponsor;

    /// Fetch a claimer
    ///
    /// ### Panics
    /// `ClaimerNotFound` if the claimer does not exist
    fn get_claimer(e: Env, claimer_id: u32) -> Claimer;

    /// Returns the claimer id created for `beneficiary`, if any
    fn claimer_id(e: Env, beneficiary: Address) -> Option<u32>;

    /// Returns the yield a claimer could claim right now, fee included
    ///
    /// ### Panics
    /// `ClaimerNotFound` if the claimer does not exist
    fn claimable_yield(e: Env, claimer_id: u32) -> i128;

    /// Returns the swap adapter registered for `token`, if any
    fn pool(e: Env, token: Address) -> Option<Address>;

    /// Returns whether `account` holds `role`
    fn has_role(e: Env, role: Role, account: Address) -> bool;

    /// Returns whether deposits and sponsoring are paused
    fn is_paused(e: Env) -> bool;

    /********** Principal **********/

    /// Deposit principal whose yield goes to one or more beneficiaries
    ///
    /// `token` is swapped into underlying through its registered adapter
    /// unless it is the underlying. One deposit record is created per claim,
    /// all owned by `from`.
    ///
    /// # Arguments
    /// * `from` - The depositor and owner of the deposits (must authorize)
    /// * `token` - The token deposited
    /// * `amount` - The amount of `token` deposited
    /// * `lock_duration` - Seconds before the principal can be withdrawn
    /// * `claims` - Beneficiaries and their share of the deposit (SCALAR_7, must sum to 100%)
    /// * `min_amount_out` - The least underlying a swap may produce
    ///
    /// # Returns
    /// The ids of the deposits created, in claim order
    ///
    /// # Panics
    /// - `Paused` while deposits are paused
    /// - `ZeroAmount` if amount <= 0
    /// - `InvalidLockDuration` if the lock is outside [min_lock_period, 24 weeks]
    /// - `InvalidClaims` if the claims are empty, hold a non-positive share or do not sum to 100%
    /// - `ClaimerInDebt` if a beneficiary's shares are worth less than its principal
    /// - `ZeroShares` if a split is too small to mint shares
    /// - `UnsupportedToken` / `SlippageExceeded` from the swap
    fn deposit(
        e: Env,
        from: Address,
        token: Address,
        amount: i128,
        lock_duration: u64,
        claims: Vec<ClaimParams>,
        min_amount_out: i128,
    ) -> Vec<u32>;

    /// Withdraw the whole principal of unlocked deposits
    ///
    /// # Arguments
    /// * `owner` - The owner of the deposits (must authorize)
    /// * `to` - The address receiving the underlying
    /// * `deposit_ids` - The deposits to withdraw
    ///
    /// # Returns
    /// The underlying paid
    ///
    /// # Panics
    /// - `DepositNotFound`, `NotDepositOwner` or `DepositLocked` for any unusable deposit
    /// - `YieldNegative` if a deposit's claimer is in debt; use `force_withdraw`
    /// - `InsufficientLiquidity` if the vault cannot free enough underlying
    fn withdraw(e: Env, owner: Address, to: Address, deposit_ids: Vec<u32>) -> i128;

    /// Withdraw the whole principal of unlocked deposits even if their
    /// claimer is in debt. The loss is taken pro rata: the owner receives
    /// what the principal's share of the claimer's shares is worth.
    ///
    /// # Returns
    /// The underlying paid
    fn force_withdraw(e: Env, owner: Address, to: Address, deposit_ids: Vec<u32>) -> i128;

    /// Withdraw part of the principal of unlocked deposits
    ///
    /// # Arguments
    /// * `owner` - The owner of the deposits (must authorize)
    /// * `to` - The address receiving the underlying
    /// * `deposit_ids` - The deposits to withdraw from
    /// * `amounts` - The principal to take from each deposit
    ///
    /// # Returns
    /// The underlying paid
    ///
    /// # Panics
    /// - `InvalidAmount` if the lists differ in length or an amount exceeds its deposit
    /// - Same as `withdraw` otherwise
    fn partial_withdraw(
        e: Env,
        owner: Address,
        to: Address,
        deposit_ids: Vec<u32>,
        amounts: Vec<i128>,
    ) -> i128;

    /// (Sponsor role) Add principal that earns no yield for the sponsor
    ///
    /// # Arguments
    /// * `from` - The sponsor (must authorize and hold the Sponsor role)
    /// * `token` - The token sponsored
    /// * `amount` - The amount of `token` sponsored
    /// * `lock_duration` - Seconds before the sponsor can be returned, 2 to 24 weeks
    /// * `min_amount_out` - The least underlying a swap may produce
    ///
    /// # Returns
    /// The id of the sponsor record
    fn sponsor(
        e: Env,
        from: Address,
        token: Address,
        amount: i128,
        lock_duration: u64,
        min_amount_out: i128,
    ) -> u32;

    /// Return sponsored principal after its lock. Sponsors absorb any loss
    /// that leaves the vault below the total sponsored.
    ///
    /// # Returns
    /// The underlying paid
    ///
    /// # Panics
    /// - `SponsorNotFound`, `NotSponsorOwner` or `DepositLocked` for any unusable sponsor
    fn unsponsor(e: Env, from: Address, to: Address, sponsor_ids: Vec<u32>) -> i128;

    /********** Yield **********/

    /// (Claimer owner) Claim a claimer's yield. The performance fee goes to
    /// the treasury and the rest to `to`.
    ///
    /// # Returns
    /// The yield claimed, fee included, or 0 if there was none
    fn claim_yield(e: Env, claimer_id: u32, to: Address) -> i128;

    /// (Claimer owner) Hand a claimer, and the right to its yield, to `new_owner`
    fn transfer_claimer(e: Env, claimer_id: u32, new_owner: Address);

    /// (Keeper role) Rebalance the strategy towards `invest_pct` of the
    /// non-sponsored underlying
    ///
    /// # Returns
    /// The underlying sent to the strategy, negative when withdrawal was requested
    ///
    /// # Panics
    /// - `Unauthorized` if the caller is not a keeper
    /// - `NoStrategy` if no strategy is set
    fn update_invested(e: Env, caller: Address) -> i128;

    /********** Settings **********/

    /// (Settings role) Replace the vault configuration
    ///
    /// # Panics
    /// `InvalidConfig` if a percentage or the minimum lock is out of range
    fn set_config(e: Env, caller: Address, config: VaultConfig);

    /// (Settings role) Register the swap adapter for an input token
    fn add_pool(e: Env, caller: Address, token: Address, adapter: Address);

    /// (Settings role) Remove the swap adapter for an input token
    fn remove_pool(e: Env, caller: Address, token: Address);

    /// (Settings role) Pause or resume deposits and sponsoring. Withdrawals,
    /// claims and unsponsoring stay open.
    fn set_paused(e: Env, caller: Address, paused: bool);

    /// (Admin only) Replace the strategy
    ///
    /// # Panics
    /// `StrategyHasAssets` if the current strategy still holds or awaits funds
    fn set_strategy(e: Env, strategy: Address);

    /// (Admin only) Grant a role
    fn grant_role(e: Env, role: Role, account: Address);

    /// (Admin only) Revoke a role
    fn revoke_role(e: Env, role: Role, account: Address);

    /// (Admin only) Set a new address to become the admin. This must be
    /// accepted by the new admin w/ `accept_admin` to take effect.
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role
    ///
    /// # Panics
    /// `NoProposedAdmin` if no admin was proposed
    fn accept_admin(e: Env);

    /// (Admin only) Step stored data forward to the current schema version
    ///
    /// # Panics
    /// `InvalidVersion` if storage was written by a newer version
    fn migrate(e: Env) -> u32;

    /// (Admin only) Upgrade the contract to a new WASM binary
    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl VaultContract {
    /// Initializes the vault
    ///
    /// # Arguments
    /// * `admin` - Holds every role and manages the permission table
    /// * `underlying` - The token principal and yield are denominated in
    /// * `config` - The initial configuration
    ///
    /// # Panics
    /// - `InvalidConfig` if the configuration is out of range
    pub fn __constructor(e: Env, admin: Address, underlying: Address, config: VaultConfig) {
        vault::execute_initialize(&e, &admin, &underlying, &config);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn admin(e: Env) -> Address {
        storage::get_admin(&e)
    }

    fn underlying(e: Env) -> Address {
        storage::get_underlying(&e)
    }

    fn strategy(e: Env) -> Option<Address> {
        storage::get_strategy(&e)
    }

    fn config(e: Env) -> VaultConfig {
        storage::get_config(&e)
    }

    fn totals(e: Env) -> VaultTotals {
        storage::get_totals(&e)
    }

    fn total_underlying(e: Env) -> i128 {
        Ledger::load(&e).total_underlying(&e)
    }

    fn price_per_share(e: Env) -> i128 {
        Ledger::load(&e).price_per_share(&e)
    }

    fn get_deposit(e: Env, deposit_id: u32) -> Deposit {
        match storage::get_deposit(&e, deposit_id) {
            Some(deposit) => deposit,
            None => panic_with_error!(e, VaultError::DepositNotFound),
        }
    }

    fn get_sponsor(e: Env, sponsor_id: u32) -> Sponsor {
        match storage::get_sponsor(&e, sponsor_id) {
            Some(sponsor) => sponsor,
            None => panic_with_error!(e, VaultError::SponsorNotFound),
        }
    }

    fn get_claimer(e: Env, claimer_id: u32) -> Claimer {
        match storage::get_claimer(&e, claimer_id) {
            Some(claimer) => claimer,
            None => panic_with_error!(e, VaultError::ClaimerNotFound),
        }
    }

    fn claimer_id(e: Env, beneficiary: Address) -> Option<u32> {
        storage::get_claimer_id(&e, &beneficiary)
    }

    fn claimable_yield(e: Env, claimer_id: u32) -> i128 {
        let mut ledger = Ledger::load(&e);
        let claimer = ledger.load_claimer(&e, claimer_id);
        ledger.claimable_yield(&e, &claimer)
    }

    fn pool(e: Env, token: Address) -> Option<Address> {
        storage::get_pool(&e, &token)
    }

    fn has_role(e: Env, role: Role, account: Address) -> bool {
        account == storage::get_admin(&e) || storage::has_role(&e, role, &account)
    }

    fn is_paused(e: Env) -> bool {
        storage::get_paused(&e)
    }

    fn deposit(
        e: Env,
        from: Address,
        token: Address,
        amount: i128,
        lock_duration: u64,
        claims: Vec<ClaimParams>,
        min_amount_out: i128,
    ) -> Vec<u32> {
        storage::extend_instance(&e);
        from.require_auth();
        vault::execute_deposit(&e, &from, &token, amount, lock_duration, &claims, min_amount_out)
    }

    fn withdraw(e: Env, owner: Address, to: Address, deposit_ids: Vec<u32>) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();
        vault::execute_withdraw(&e, &owner, &to, &deposit_ids, false)
    }

    fn force_withdraw(e: Env, owner: Address, to: Address, deposit_ids: Vec<u32>) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();
        vault::execute_withdraw(&e, &owner, &to, &deposit_ids, true)
    }

    fn partial_withdraw(
        e: Env,
        owner: Address,
        to: Address,
        deposit_ids: Vec<u32>,
        amounts: Vec<i128>,
    ) -> i128 {
        storage::extend_instance(&e);
        owner.require_auth();
        vault::execute_partial_withdraw(&e, &owner, &to, &deposit_ids, &amounts)
    }

    fn sponsor(
        e: Env,
        from: Address,
        token: Address,
        amount: i128,
        lock_duration: u64,
        min_amount_out: i128,
    ) -> u32 {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Sponsor, &from);
        vault::execute_sponsor(&e, &from, &token, amount, lock_duration, min_amount_out)
    }

    fn unsponsor(e: Env, from: Address, to: Address, sponsor_ids: Vec<u32>) -> i128 {
        storage::extend_instance(&e);
        from.require_auth();
        vault::execute_unsponsor(&e, &from, &to, &sponsor_ids)
    }

    fn claim_yield(e: Env, claimer_id: u32, to: Address) -> i128 {
        storage::extend_instance(&e);
        vault::execute_claim_yield(&e, claimer_id, &to)
    }

    fn transfer_claimer(e: Env, claimer_id: u32, new_owner: Address) {
        storage::extend_instance(&e);
        vault::execute_transfer_claimer(&e, claimer_id, &new_owner);
    }

    fn update_invested(e: Env, caller: Address) -> i128 {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Keeper, &caller);
        vault::execute_update_invested(&e)
    }

    fn set_config(e: Env, caller: Address, config: VaultConfig) {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Settings, &caller);
        vault::execute_set_config(&e, &config);
    }

    fn add_pool(e: Env, caller: Address, token: Address, adapter: Address) {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Settings, &caller);
        vault::execute_add_pool(&e, &token, &adapter);
    }

    fn remove_pool(e: Env, caller: Address, token: Address) {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Settings, &caller);
        vault::execute_remove_pool(&e, &token);
    }

    fn set_paused(e: Env, caller: Address, paused: bool) {
        storage::extend_instance(&e);
        vault::require_role(&e, Role::Settings, &caller);
        vault::execute_set_paused(&e, paused);
    }

    fn set_strategy(e: Env, strategy: Address) {
        storage::extend_instance(&e);
        vault::require_admin(&e);
        vault::execute_set_strategy(&e, &strategy);
    }

    fn grant_role(e: Env, role: Role, account: Address) {
        storage::extend_instance(&e);
        vault::require_admin(&e);
        vault::execute_grant_role(&e, role, &account);
    }

    fn revoke_role(e: Env, role: Role, account: Address) {
        storage::extend_instance(&e);
        vault::require_admin(&e);
        vault::execute_revoke_role(&e, role, &account);
    }

    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = vault::require_admin(&e);
        vault::execute_propose_admin(&e, &admin, &new_admin);
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        vault::execute_accept_admin(&e);
    }

    fn migrate(e: Env) -> u32 {
        storage::extend_instance(&e);
        vault::require_admin(&e);
        vault::execute_migrate(&e)
    }

    fn upgrade_wasm(e: Env, wasm_hash: BytesN<32>) {
        storage::extend_instance(&e);
        let admin = vault::require_admin(&e);

        e.deployer().update_current_contract_wasm(wasm_hash.clone());
        VaultEvents::upgrade_wasm(&e, admin, wasm_hash);
    }
}
