use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

use crate::types::{Claimer, Deposit, Role, Sponsor, VaultConfig, VaultTotals};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";
const UNDERLYING_KEY: &str = "Underlying";
const STRATEGY_KEY: &str = "Strategy";
const CONFIG_KEY: &str = "Config";
const TOTALS_KEY: &str = "Totals";
const PAUSED_KEY: &str = "Paused";
const VERSION_KEY: &str = "Version";
const DEPOSIT_COUNTER_KEY: &str = "DepCtr";
const SPONSOR_COUNTER_KEY: &str = "SponCtr";
const CLAIMER_COUNTER_KEY: &str = "ClmCtr";

#[derive(Clone)]
#[contracttype]
pub enum VaultDataKey {
    // Deposit record by id
    Deposit(u32),
    // Sponsor record by id
    Sponsor(u32),
    // Claimer record by id
    Claimer(u32),
    // Claimer id for a beneficiary address
    ClaimerId(Address),
    // Swap adapter for an input token
    Pool(Address),
    // Permission table entry
    Role(Role, Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch a persistent entry and bump its rent if it exists
fn get_persistent<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>>(
    e: &Env,
    key: &K,
    bump_threshold: u32,
    bump_amount: u32,
) -> Option<V> {
    let result = e.storage().persistent().get::<K, V>(key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
    }
    result
}

fn set_persistent<K: IntoVal<Env, Val>, V: IntoVal<Env, Val>>(
    e: &Env,
    key: &K,
    value: &V,
    bump_threshold: u32,
    bump_amount: u32,
) {
    e.storage().persistent().set::<K, V>(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, bump_threshold, bump_amount);
}

fn bump_counter(e: &Env, key: &str) -> u32 {
    let key = Symbol::new(e, key);
    let next = e.storage().instance().get::<Symbol, u32>(&key).unwrap_or(0) + 1;
    e.storage().instance().set::<Symbol, u32>(&key, &next);
    next
}

/********** Admin **********/

pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY))
        .unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), admin);
}

pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

pub fn set_proposed_admin(e: &Env, admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), admin);
}

pub fn del_proposed_admin(e: &Env) {
    e.storage()
        .instance()
        .remove(&Symbol::new(e, PROPOSED_ADMIN_KEY));
}

/// Check the permission table for `role`
pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    get_persistent::<VaultDataKey, bool>(
        e,
        &VaultDataKey::Role(role, account.clone()),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
    .unwrap_or(false)
}

pub fn set_role(e: &Env, role: Role, account: &Address) {
    set_persistent(
        e,
        &VaultDataKey::Role(role, account.clone()),
        &true,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    );
}

pub fn del_role(e: &Env, role: Role, account: &Address) {
    e.storage()
        .persistent()
        .remove(&VaultDataKey::Role(role, account.clone()));
}

/********** Vault Settings **********/

pub fn get_underlying(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, UNDERLYING_KEY))
        .unwrap_optimized()
}

pub fn set_underlying(e: &Env, underlying: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, UNDERLYING_KEY), underlying);
}

/// Fetch the current strategy, if one was set
pub fn get_strategy(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, STRATEGY_KEY))
}

pub fn set_strategy(e: &Env, strategy: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, STRATEGY_KEY), strategy);
}

pub fn get_config(e: &Env) -> VaultConfig {
    e.storage()
        .instance()
        .get::<Symbol, VaultConfig>(&Symbol::new(e, CONFIG_KEY))
        .unwrap_optimized()
}

pub fn set_config(e: &Env, config: &VaultConfig) {
    e.storage()
        .instance()
        .set::<Symbol, VaultConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

pub fn get_paused(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<Symbol, bool>(&Symbol::new(e, PAUSED_KEY))
        .unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, PAUSED_KEY), &paused);
}

/// Fetch the storage schema version, 0 if it was never written
pub fn get_version(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, VERSION_KEY))
        .unwrap_or(0)
}

pub fn set_version(e: &Env, version: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, VERSION_KEY), &version);
}

/// Fetch the swap adapter registered for `token`
pub fn get_pool(e: &Env, token: &Address) -> Option<Address> {
    get_persistent::<VaultDataKey, Address>(
        e,
        &VaultDataKey::Pool(token.clone()),
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

pub fn set_pool(e: &Env, token: &Address, adapter: &Address) {
    set_persistent(
        e,
        &VaultDataKey::Pool(token.clone()),
        adapter,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    );
}

pub fn del_pool(e: &Env, token: &Address) {
    e.storage()
        .persistent()
        .remove(&VaultDataKey::Pool(token.clone()));
}

/********** Ledger Totals **********/

pub fn get_totals(e: &Env) -> VaultTotals {
    e.storage()
        .instance()
        .get::<Symbol, VaultTotals>(&Symbol::new(e, TOTALS_KEY))
        .unwrap_or_default()
}

pub fn set_totals(e: &Env, totals: &VaultTotals) {
    e.storage()
        .instance()
        .set::<Symbol, VaultTotals>(&Symbol::new(e, TOTALS_KEY), totals);
}

/********** Deposits **********/

/// Increment the deposit counter and return the new id
pub fn bump_deposit_id(e: &Env) -> u32 {
    bump_counter(e, DEPOSIT_COUNTER_KEY)
}

pub fn get_deposit(e: &Env, id: u32) -> Option<Deposit> {
    get_persistent::<VaultDataKey, Deposit>(
        e,
        &VaultDataKey::Deposit(id),
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

pub fn set_deposit(e: &Env, deposit: &Deposit) {
    set_persistent(
        e,
        &VaultDataKey::Deposit(deposit.id),
        deposit,
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    );
}

pub fn del_deposit(e: &Env, id: u32) {
    e.storage().persistent().remove(&VaultDataKey::Deposit(id));
}

/********** Sponsors **********/

/// Increment the sponsor counter and return the new id
pub fn bump_sponsor_id(e: &Env) -> u32 {
    bump_counter(e, SPONSOR_COUNTER_KEY)
}

pub fn get_sponsor(e: &Env, id: u32) -> Option<Sponsor> {
    get_persistent::<VaultDataKey, Sponsor>(
        e,
        &VaultDataKey::Sponsor(id),
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

pub fn set_sponsor(e: &Env, sponsor: &Sponsor) {
    set_persistent(
        e,
        &VaultDataKey::Sponsor(sponsor.id),
        sponsor,
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    );
}

pub fn del_sponsor(e: &Env, id: u32) {
    e.storage().persistent().remove(&VaultDataKey::Sponsor(id));
}

/********** Claimers **********/

/// Increment the claimer counter and return the new id
pub fn bump_claimer_id(e: &Env) -> u32 {
    bump_counter(e, CLAIMER_COUNTER_KEY)
}

pub fn get_claimer(e: &Env, id: u32) -> Option<Claimer> {
    get_persistent::<VaultDataKey, Claimer>(
        e,
        &VaultDataKey::Claimer(id),
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

pub fn set_claimer(e: &Env, claimer: &Claimer) {
    set_persistent(
        e,
        &VaultDataKey::Claimer(claimer.id),
        claimer,
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    );
}

/// Fetch the claimer id created for `beneficiary`
pub fn get_claimer_id(e: &Env, beneficiary: &Address) -> Option<u32> {
    get_persistent::<VaultDataKey, u32>(
        e,
        &VaultDataKey::ClaimerId(beneficiary.clone()),
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    )
}

pub fn set_claimer_id(e: &Env, beneficiary: &Address, id: u32) {
    set_persistent(
        e,
        &VaultDataKey::ClaimerId(beneficiary.clone()),
        &id,
        LEDGER_THRESHOLD_USER,
        LEDGER_BUMP_USER,
    );
}
