use soroban_sdk::{Address, BytesN, Env, Symbol};

use crate::types::{Role, VaultConfig};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted for every deposit record created
    ///
    /// - topics - `["deposit", owner: Address, deposit_id: u32]`
    /// - data - `[claimer_id: u32, amount: i128, shares: i128, locked_until: u64]`
    ///
    /// ### Arguments
    /// * owner - The address allowed to withdraw the principal
    /// * deposit_id - The id of the new deposit
    /// * claimer_id - The claimer receiving the deposit's yield
    /// * amount - The principal in underlying
    /// * shares - The shares minted
    /// * locked_until - The end of the lock
    pub fn deposit(
        e: &Env,
        owner: Address,
        deposit_id: u32,
        claimer_id: u32,
        amount: i128,
        shares: i128,
        locked_until: u64,
    ) {
        let topics = (Symbol::new(e, "deposit"), owner, deposit_id);
        e.events()
            .publish(topics, (claimer_id, amount, shares, locked_until));
    }

    /// Emitted when principal leaves a deposit
    ///
    /// - topics - `["withdraw", owner: Address, deposit_id: u32]`
    /// - data - `[amount: i128, shares: i128, paid: i128]`
    ///
    /// ### Arguments
    /// * owner - The deposit owner
    /// * deposit_id - The deposit withdrawn from
    /// * amount - The principal removed from the deposit
    /// * shares - The shares burned from the claimer
    /// * paid - The underlying paid, below `amount` only for a force withdraw at a loss
    pub fn withdraw(e: &Env, owner: Address, deposit_id: u32, amount: i128, shares: i128, paid: i128) {
        let topics = (Symbol::new(e, "withdraw"), owner, deposit_id);
        e.events().publish(topics, (amount, shares, paid));
    }

    /// Emitted when principal is sponsored
    ///
    /// - topics - `["sponsor", depositor: Address, sponsor_id: u32]`
    /// - data - `[amount: i128, locked_until: u64]`
    pub fn sponsor(e: &Env, depositor: Address, sponsor_id: u32, amount: i128, locked_until: u64) {
        let topics = (Symbol::new(e, "sponsor"), depositor, sponsor_id);
        e.events().publish(topics, (amount, locked_until));
    }

    /// Emitted when a sponsor is returned
    ///
    /// - topics - `["unsponsor", depositor: Address, sponsor_id: u32]`
    /// - data - `[amount: i128, paid: i128]`
    pub fn unsponsor(e: &Env, depositor: Address, sponsor_id: u32, amount: i128, paid: i128) {
        let topics = (Symbol::new(e, "unsponsor"), depositor, sponsor_id);
        e.events().publish(topics, (amount, paid));
    }

    /// Emitted when a claimer is created for a new beneficiary
    ///
    /// - topics - `["new_claimer", beneficiary: Address]`
    /// - data - `claimer_id: u32`
    pub fn new_claimer(e: &Env, beneficiary: Address, claimer_id: u32) {
        let topics = (Symbol::new(e, "new_claimer"), beneficiary);
        e.events().publish(topics, claimer_id);
    }

    /// Emitted when yield is claimed
    ///
    /// - topics - `["claim_yield", claimer_id: u32, to: Address]`
    /// - data - `[amount: i128, fee: i128]`
    ///
    /// ### Arguments
    /// * claimer_id - The claimer the yield belonged to
    /// * to - The address paid
    /// * amount - The yield claimed, fee included
    /// * fee - The performance fee sent to the treasury
    pub fn claim_yield(e: &Env, claimer_id: u32, to: Address, amount: i128, fee: i128) {
        let topics = (Symbol::new(e, "claim_yield"), claimer_id, to);
        e.events().publish(topics, (amount, fee));
    }

    /// Emitted when a claimer changes owner
    ///
    /// - topics - `["transfer_claimer", claimer_id: u32]`
    /// - data - `[from: Address, to: Address]`
    pub fn transfer_claimer(e: &Env, claimer_id: u32, from: Address, to: Address) {
        let topics = (Symbol::new(e, "transfer_claimer"), claimer_id);
        e.events().publish(topics, (from, to));
    }

    /// Emitted when the vault rebalances against its strategy
    ///
    /// - topics - `["update_invested", strategy: Address]`
    /// - data - `[target: i128, invested: i128, moved: i128]`
    ///
    /// ### Arguments
    /// * strategy - The strategy rebalanced
    /// * target - The amount the strategy should hold
    /// * invested - The amount it reported before rebalancing
    /// * moved - Underlying sent to the strategy, negative when withdrawn
    pub fn update_invested(e: &Env, strategy: Address, target: i128, invested: i128, moved: i128) {
        let topics = (Symbol::new(e, "update_invested"), strategy);
        e.events().publish(topics, (target, invested, moved));
    }

    /// Emitted when an input token is swapped into underlying
    ///
    /// - topics - `["swap", token: Address]`
    /// - data - `[amount_in: i128, amount_out: i128]`
    pub fn swap(e: &Env, token: Address, amount_in: i128, amount_out: i128) {
        let topics = (Symbol::new(e, "swap"), token);
        e.events().publish(topics, (amount_in, amount_out));
    }

    /// Emitted when the vault configuration changes
    ///
    /// - topics - `["set_config"]`
    /// - data - `config: VaultConfig`
    pub fn set_config(e: &Env, config: VaultConfig) {
        let topics = (Symbol::new(e, "set_config"),);
        e.events().publish(topics, config);
    }

    /// Emitted when the strategy is replaced
    ///
    /// - topics - `["set_strategy"]`
    /// - data - `strategy: Address`
    pub fn set_strategy(e: &Env, strategy: Address) {
        let topics = (Symbol::new(e, "set_strategy"),);
        e.events().publish(topics, strategy);
    }

    /// Emitted when a swap adapter is registered for an input token
    ///
    /// - topics - `["add_pool", token: Address]`
    /// - data - `adapter: Address`
    pub fn add_pool(e: &Env, token: Address, adapter: Address) {
        let topics = (Symbol::new(e, "add_pool"), token);
        e.events().publish(topics, adapter);
    }

    /// Emitted when an input token's swap adapter is removed
    ///
    /// - topics - `["remove_pool", token: Address]`
    /// - data - `()`
    pub fn remove_pool(e: &Env, token: Address) {
        let topics = (Symbol::new(e, "remove_pool"), token);
        e.events().publish(topics, ());
    }

    /// Emitted when deposits and sponsoring are paused or resumed
    ///
    /// - topics - `["set_paused"]`
    /// - data - `paused: bool`
    pub fn set_paused(e: &Env, paused: bool) {
        let topics = (Symbol::new(e, "set_paused"),);
        e.events().publish(topics, paused);
    }

    /// Emitted when a role is granted
    ///
    /// - topics - `["grant_role", account: Address]`
    /// - data - `role: Role`
    pub fn grant_role(e: &Env, account: Address, role: Role) {
        let topics = (Symbol::new(e, "grant_role"), account);
        e.events().publish(topics, role);
    }

    /// Emitted when a role is revoked
    ///
    /// - topics - `["revoke_role", account: Address]`
    /// - data - `role: Role`
    pub fn revoke_role(e: &Env, account: Address, role: Role) {
        let topics = (Symbol::new(e, "revoke_role"), account);
        e.events().publish(topics, role);
    }

    /// Emitted when a new admin is proposed
    ///
    /// - topics - `["propose_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"), admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when the proposed admin takes over
    ///
    /// - topics - `["accept_admin"]`
    /// - data - `admin: Address`
    pub fn accept_admin(e: &Env, admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"),);
        e.events().publish(topics, admin);
    }

    /// Emitted when the contract code is replaced
    ///
    /// - topics - `["upgrade_wasm", admin: Address]`
    /// - data - `wasm_hash: BytesN<32>`
    pub fn upgrade_wasm(e: &Env, admin: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"), admin);
        e.events().publish(topics, wasm_hash);
    }

    /// Emitted when storage is migrated to a new schema version
    ///
    /// - topics - `["migrate"]`
    /// - data - `[from: u32, to: u32]`
    pub fn migrate(e: &Env, from: u32, to: u32) {
        let topics = (Symbol::new(e, "migrate"),);
        e.events().publish(topics, (from, to));
    }
}
