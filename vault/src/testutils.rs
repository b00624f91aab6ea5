#![cfg(any(test, feature = "testutils"))]

use crate::constants::{SCALAR_7, SECONDS_PER_WEEK};
use crate::{VaultConfig, VaultContract};
use soroban_sdk::{testutils::Address as _, Address, Env};

/// Config used across tests: 90% invested, 10% performance fee, 1 week minimum lock
pub fn default_config(e: &Env) -> VaultConfig {
    VaultConfig {
        treasury: Address::generate(e),
        invest_pct: 0_9000000,
        perf_fee_pct: SCALAR_7 / 10,
        investment_fee_pct: 0,
        min_lock_period: SECONDS_PER_WEEK,
    }
}

pub fn create_vault(e: &Env, admin: &Address, underlying: &Address, config: &VaultConfig) -> Address {
    e.register(
        VaultContract {},
        (admin.clone(), underlying.clone(), config.clone()),
    )
}
