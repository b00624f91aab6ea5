use async_strategy::AsyncStrategyContractClient;
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger, LedgerInfo};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{vec as svec, Address, Env, Symbol};
use sync_strategy::SyncStrategyContractClient;
use vault::{ClaimParams, Claimer, Role, VaultConfig, VaultContractClient};
use vested_strategy::VestedStrategyContractClient;

use crate::mocks::{MockSwap, MockSwapClient, MockYieldPool, MockYieldPoolClient};
use crate::{ONE_WEEK, SCALAR_7};

pub const START_TIME: u64 = 1_700_000_000;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub keeper: Address,
    pub manager: Address,
    pub treasury: Address,
    pub users: Vec<Address>,
    pub underlying: StellarAssetClient<'a>,
    pub token: MockTokenClient<'a>,
    pub vault: VaultContractClient<'a>,
}

/// An async strategy and the pieces a test drives it with
pub struct AsyncStrategyFixture<'a> {
    pub strategy: AsyncStrategyContractClient<'a>,
    pub operator: Address,
    pub receipt: StellarAssetClient<'a>,
    pub oracle: MockPriceOracleClient<'a>,
}

impl TestFixture<'_> {
    /// Vault over a fresh underlying with 90% invested, a 10% performance
    /// fee, no investment fee and a one week minimum lock
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();
        e.ledger().set_timestamp(START_TIME);
        e.ledger().set_min_temp_entry_ttl(17280);
        e.ledger().set_min_persistent_entry_ttl(2073600);

        let admin = Address::generate(&e);
        let keeper = Address::generate(&e);
        let manager = Address::generate(&e);
        let treasury = Address::generate(&e);

        let underlying_id = e.register_stellar_asset_contract_v2(admin.clone()).address();
        let config = VaultConfig {
            treasury: treasury.clone(),
            invest_pct: 0_9000000,
            perf_fee_pct: SCALAR_7 / 10,
            investment_fee_pct: 0,
            min_lock_period: ONE_WEEK,
        };
        let vault_id = vault::testutils::create_vault(&e, &admin, &underlying_id, &config);
        let vault_client = VaultContractClient::new(&e, &vault_id);
        vault_client.grant_role(&Role::Keeper, &keeper);

        TestFixture {
            underlying: StellarAssetClient::new(&e, &underlying_id),
            token: MockTokenClient::new(&e, &underlying_id),
            env: e,
            admin,
            keeper,
            manager,
            treasury,
            users: vec![],
            vault: vault_client,
        }
    }

    /********** Strategies ***********/

    /// Deploy a sync strategy over a mock pool and make it the vault's strategy
    pub fn create_sync_strategy<'a>(
        &self,
        perf_fee_pct: i128,
    ) -> (SyncStrategyContractClient<'a>, MockYieldPoolClient<'a>) {
        let pool_id = self.env.register(MockYieldPool, (self.underlying.address.clone(),));
        let strategy_id = self.env.register(
            sync_strategy::SyncStrategyContract,
            (
                self.vault.address.clone(),
                self.underlying.address.clone(),
                pool_id.clone(),
                self.admin.clone(),
                self.manager.clone(),
                self.treasury.clone(),
                perf_fee_pct,
            ),
        );
        self.vault.set_strategy(&strategy_id);
        (
            SyncStrategyContractClient::new(&self.env, &strategy_id),
            MockYieldPoolClient::new(&self.env, &pool_id),
        )
    }

    /// Deploy a vested strategy over a mock pool and make it the vault's strategy
    pub fn create_vested_strategy<'a>(
        &self,
        perf_fee_pct: i128,
        cycle_duration: u64,
    ) -> (VestedStrategyContractClient<'a>, MockYieldPoolClient<'a>) {
        let pool_id = self.env.register(MockYieldPool, (self.underlying.address.clone(),));
        let strategy_id = self.env.register(
            vested_strategy::VestedStrategyContract,
            (
                self.vault.address.clone(),
                self.underlying.address.clone(),
                pool_id.clone(),
                self.admin.clone(),
                self.manager.clone(),
                self.treasury.clone(),
                perf_fee_pct,
                cycle_duration,
            ),
        );
        self.vault.set_strategy(&strategy_id);
        (
            VestedStrategyContractClient::new(&self.env, &strategy_id),
            MockYieldPoolClient::new(&self.env, &pool_id),
        )
    }

    /// Deploy an async strategy with its own receipt token priced at 1.0 by
    /// a mock oracle, and make it the vault's strategy
    pub fn create_async_strategy<'a>(&self, perf_fee_pct: i128) -> AsyncStrategyFixture<'a> {
        let operator = Address::generate(&self.env);
        let receipt_id = self
            .env
            .register_stellar_asset_contract_v2(self.admin.clone())
            .address();

        let oracle_id = self.env.register(MockPriceOracleWASM, ());
        let oracle = MockPriceOracleClient::new(&self.env, &oracle_id);
        oracle.set_data(
            &self.admin,
            &Asset::Other(Symbol::new(&self.env, "USD")),
            &svec![&self.env, Asset::Stellar(receipt_id.clone())],
            &7,
            &300,
        );
        oracle.set_price_stable(&svec![&self.env, 1_0000000]);

        let strategy_id = self.env.register(
            async_strategy::AsyncStrategyContract,
            (
                self.vault.address.clone(),
                self.underlying.address.clone(),
                receipt_id.clone(),
                oracle_id,
                operator.clone(),
                self.admin.clone(),
                self.manager.clone(),
                self.treasury.clone(),
                perf_fee_pct,
            ),
        );
        self.vault.set_strategy(&strategy_id);
        AsyncStrategyFixture {
            strategy: AsyncStrategyContractClient::new(&self.env, &strategy_id),
            operator,
            receipt: StellarAssetClient::new(&self.env, &receipt_id),
            oracle,
        }
    }

    /// Register a swap adapter for a new input token, funded with `inventory`
    /// underlying
    pub fn create_swap<'a>(
        &self,
        rate: i128,
        inventory: i128,
    ) -> (MockSwapClient<'a>, StellarAssetClient<'a>) {
        let input_id = self
            .env
            .register_stellar_asset_contract_v2(self.admin.clone())
            .address();
        let swap_id = self
            .env
            .register(MockSwap, (self.underlying.address.clone(), rate));
        self.underlying.mint(&swap_id, &inventory);
        self.vault.add_pool(&self.admin, &input_id, &swap_id);
        (
            MockSwapClient::new(&self.env, &swap_id),
            StellarAssetClient::new(&self.env, &input_id),
        )
    }

    /********** Vault Helpers ***********/

    /// Deposit underlying from `from` with all of its yield going to `beneficiary`
    pub fn deposit(&self, from: &Address, beneficiary: &Address, amount: i128) -> u32 {
        let claims = svec![
            &self.env,
            ClaimParams {
                beneficiary: beneficiary.clone(),
                pct: SCALAR_7,
            }
        ];
        let ids = self.vault.deposit(
            from,
            &self.underlying.address,
            &amount,
            &ONE_WEEK,
            &claims,
            &0,
        );
        ids.get(0).unwrap()
    }

    pub fn claimer(&self, beneficiary: &Address) -> Claimer {
        let id = self.vault.claimer_id(beneficiary).unwrap();
        self.vault.get_claimer(&id)
    }

    pub fn claimable(&self, beneficiary: &Address) -> i128 {
        let id = self.vault.claimer_id(beneficiary).unwrap();
        self.vault.claimable_yield(&id)
    }

    /// Vault state invariant: total shares and principal are the claimer sums
    pub fn assert_totals_match_claimers(&self, beneficiaries: &[Address]) {
        let (mut shares, mut principal) = (0, 0);
        for beneficiary in beneficiaries {
            if let Some(id) = self.vault.claimer_id(beneficiary) {
                let claimer = self.vault.get_claimer(&id);
                shares += claimer.shares;
                principal += claimer.principal;
            }
        }
        let totals = self.vault.totals();
        assert_eq!(totals.total_shares, shares);
        assert_eq!(totals.total_principal, principal);
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        let info = self.env.ledger().get();
        self.env.ledger().set(LedgerInfo {
            timestamp: info.timestamp.saturating_add(time),
            ..info
        });
    }
}
