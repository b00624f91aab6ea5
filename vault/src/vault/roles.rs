use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::Role;

/// Require the admin's authorization and return its address
pub fn require_admin(e: &Env) -> Address {
    let admin = storage::get_admin(e);
    admin.require_auth();
    admin
}

/// Require `account` to have authorized the call and to hold `role`
///
/// ### Panics
/// `Unauthorized` if `account` is neither the admin nor granted `role`
pub fn require_role(e: &Env, role: Role, account: &Address) {
    account.require_auth();
    if *account != storage::get_admin(e) && !storage::has_role(e, role, account) {
        panic_with_error!(e, VaultError::Unauthorized);
    }
}

pub fn execute_grant_role(e: &Env, role: Role, account: &Address) {
    storage::set_role(e, role, account);
    VaultEvents::grant_role(e, account.clone(), role);
}

pub fn execute_revoke_role(e: &Env, role: Role, account: &Address) {
    storage::del_role(e, role, account);
    VaultEvents::revoke_role(e, account.clone(), role);
}
