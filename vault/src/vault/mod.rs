mod claim;
mod config;
mod convert;
mod deposit;
mod invest;
mod ledger;
mod roles;
mod sponsor;
mod withdraw;

pub use claim::{execute_claim_yield, execute_transfer_claimer};
pub use config::{
    execute_accept_admin, execute_add_pool, execute_initialize, execute_migrate,
    execute_propose_admin, execute_remove_pool, execute_set_config, execute_set_paused,
    execute_set_strategy,
};
pub use deposit::execute_deposit;
pub use invest::execute_update_invested;
pub use ledger::Ledger;
pub use roles::{execute_grant_role, execute_revoke_role, require_admin, require_role};
pub use sponsor::{execute_sponsor, execute_unsponsor};
pub use withdraw::{execute_partial_withdraw, execute_withdraw};
