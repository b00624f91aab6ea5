use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    pub treasury: Address,        // Receives performance fees on claimed yield
    pub invest_pct: i128,         // Share of non-sponsored underlying kept in the strategy (SCALAR_7)
    pub perf_fee_pct: i128,       // Fee on claimed yield (SCALAR_7)
    pub investment_fee_pct: i128, // Estimated cost of exiting the strategy (SCALAR_7)
    pub min_lock_period: u64,     // Shortest deposit lock in seconds
}

/// Running totals of the ledger
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VaultTotals {
    pub total_shares: i128,    // Shares held by all claimers
    pub total_principal: i128, // Principal of all live deposits
    pub total_sponsored: i128, // Principal of all live sponsors
}

/// Capabilities granted through the permission table. The admin holds all of them.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Settings = 0, // Configuration, swap pools, pause
    Keeper = 1,   // Rebalancing between vault and strategy
    Sponsor = 2,  // Sponsoring
}

/// Part of a deposit routed to a beneficiary
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimParams {
    pub beneficiary: Address, // Receives the yield of this part
    pub pct: i128,            // Share of the deposit (SCALAR_7)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimer {
    pub id: u32,
    pub beneficiary: Address, // Address the claimer was created for
    pub owner: Address,       // Address allowed to claim and transfer the claimer
    pub principal: i128,      // Principal of the deposits backing this claimer
    pub shares: i128,         // Shares backing that principal and its unclaimed yield
    pub claimed: i128,        // Lifetime yield paid out
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    pub id: u32,
    pub owner: Address,     // Address allowed to withdraw the principal
    pub claimer_id: u32,    // Claimer receiving the yield
    pub amount: i128,       // Principal in underlying
    pub shares: i128,       // Shares minted at creation; burns are tracked on the claimer
    pub locked_until: u64,  // No withdrawal before this timestamp
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sponsor {
    pub id: u32,
    pub depositor: Address,
    pub amount: i128,
    pub locked_until: u64,
}
