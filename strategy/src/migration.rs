use soroban_sdk::{panic_with_error, Env};

use crate::constants::SCHEMA_VERSION;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;

/// Bring stored state up to the schema this build writes
///
/// Run after `upgrade_wasm` installs new code. Storage written by a newer
/// build is rejected instead of being reinterpreted.
///
/// ### Returns
/// The schema version now stored
///
/// ### Panics
/// If the stored version is newer than `SCHEMA_VERSION`
pub fn execute_migrate(e: &Env) -> u32 {
    let stored = storage::get_version(e);
    if stored > SCHEMA_VERSION {
        panic_with_error!(e, StrategyError::InvalidVersion);
    }
    if stored < SCHEMA_VERSION {
        storage::set_version(e, SCHEMA_VERSION);
        StrategyEvents::migrate(e, stored, SCHEMA_VERSION);
    }
    SCHEMA_VERSION
}
