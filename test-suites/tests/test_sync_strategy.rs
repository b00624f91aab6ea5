use soroban_sdk::vec as svec;
use test_suites::setup::{create_fixture_with_data, USER_FUNDS};
use test_suites::test_fixture::TestFixture;
use test_suites::{ONE_WEEK, SCALAR_7};

const STRATEGY_FEE: i128 = SCALAR_7 / 10;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

#[test]
fn test_update_invested_moves_target_share() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_sync_strategy(STRATEGY_FEE);

    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    let moved = fixture.vault.update_invested(&fixture.keeper);
    assert_eq!(moved, 900 * SCALAR_7);

    assert_eq!(fixture.token.balance(&fixture.vault.address), 100 * SCALAR_7);
    assert_eq!(pool.balance(&strategy.address), 900 * SCALAR_7);
    assert_eq!(strategy.cost_basis(), 900 * SCALAR_7);
    assert_eq!(strategy.invested_assets(), 900 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying(), 1_000 * SCALAR_7);

    // already on target
    assert_eq!(fixture.vault.update_invested(&fixture.keeper), 0);

    // lower the target and pull back the excess
    let mut config = fixture.vault.config();
    config.invest_pct = 0_5000000;
    fixture.vault.set_config(&fixture.admin, &config);
    let moved = fixture.vault.update_invested(&fixture.keeper);
    assert_eq!(moved, -400 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.vault.address), 500 * SCALAR_7);
    assert_eq!(pool.balance(&strategy.address), 500 * SCALAR_7);
    assert_eq!(strategy.cost_basis(), 500 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #4003)")]
fn test_update_invested_requires_keeper() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    fixture.create_sync_strategy(STRATEGY_FEE);
    fixture.vault.update_invested(&user);
}

#[test]
fn test_strategy_profit_is_claimable_net_of_fees() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_sync_strategy(STRATEGY_FEE);

    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);

    // the pool earns 100
    fixture.underlying.mint(&pool.address, &(100 * SCALAR_7));
    pool.accrue(&strategy.address, &(100 * SCALAR_7));

    // 10% of the unrealized profit is held back for the strategy fee
    assert_eq!(strategy.invested_assets(), 990 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying(), 1_090 * SCALAR_7);
    assert_eq!(fixture.claimable(&user), 90 * SCALAR_7);

    let claimer = fixture.claimer(&user);
    let claimed = fixture.vault.claim_yield(&claimer.id, &user);
    assert_eq!(claimed, 90 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.treasury), 9 * SCALAR_7);
    assert_eq!(fixture.claimable(&user), 0);

    // withdrawing redeems the whole position and realizes the strategy fee
    fixture.jump(ONE_WEEK + 1);
    let paid = fixture.vault.withdraw(&user, &user, &svec![&fixture.env, 1]);
    assert_eq!(paid, 1_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.treasury), 19 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&user),
        USER_FUNDS + 81 * SCALAR_7
    );
    assert_eq!(pool.balance(&strategy.address), 0);
    assert_eq!(strategy.cost_basis(), 0);
    assert!(!strategy.has_assets());
    assert_eq!(fixture.vault.totals().total_shares, 0);
}

#[test]
fn test_yield_split_follows_share_ownership() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let bob = fixture.users[1].clone();
    let (strategy, pool) = fixture.create_sync_strategy(0);

    fixture.deposit(&alice, &alice, 3_000 * SCALAR_7);
    fixture.deposit(&bob, &bob, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);

    fixture.underlying.mint(&pool.address, &(400 * SCALAR_7));
    pool.accrue(&strategy.address, &(400 * SCALAR_7));

    assert_eq!(fixture.claimable(&alice), 300 * SCALAR_7);
    assert_eq!(fixture.claimable(&bob), 100 * SCALAR_7);
    fixture.assert_totals_match_claimers(&[alice, bob]);
}

#[test]
fn test_loss_blocks_withdraw_until_forced() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_sync_strategy(STRATEGY_FEE);

    let id = fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);

    // the pool loses 100
    pool.accrue(&strategy.address, &(-100 * SCALAR_7));
    assert_eq!(fixture.vault.total_underlying(), 900 * SCALAR_7);
    assert_eq!(fixture.claimable(&user), 0);
    assert!(fixture.vault.price_per_share() < SCALAR_7);

    fixture.jump(ONE_WEEK + 1);
    let ids = svec![&fixture.env, id];
    let result = fixture.vault.try_withdraw(&user, &user, &ids);
    assert!(result.is_err());

    // a claimer in debt cannot take new principal either
    let result = fixture.vault.try_deposit(
        &user,
        &fixture.underlying.address,
        &(10 * SCALAR_7),
        &ONE_WEEK,
        &svec![
            &fixture.env,
            vault::ClaimParams {
                beneficiary: user.clone(),
                pct: SCALAR_7,
            }
        ],
        &0,
    );
    assert!(result.is_err());

    // forcing takes the loss pro rata
    let paid = fixture.vault.force_withdraw(&user, &user, &ids);
    assert_eq!(paid, 900 * SCALAR_7);
    assert_eq!(fixture.token.balance(&user), USER_FUNDS - 100 * SCALAR_7);
    // no fee on a loss
    assert_eq!(fixture.token.balance(&fixture.treasury), 0);

    let totals = fixture.vault.totals();
    assert_eq!(totals.total_shares, 0);
    assert_eq!(totals.total_principal, 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #4030)")]
fn test_withdraw_in_debt_is_negative_yield() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_sync_strategy(STRATEGY_FEE);

    let id = fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);
    pool.accrue(&strategy.address, &(-1 * SCALAR_7));

    fixture.jump(ONE_WEEK + 1);
    fixture.vault.withdraw(&user, &user, &svec![&fixture.env, id]);
}

#[test]
#[should_panic(expected = "Error(Contract, #4041)")]
fn test_strategy_with_assets_cannot_be_replaced() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    fixture.create_sync_strategy(STRATEGY_FEE);
    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);

    fixture.create_sync_strategy(STRATEGY_FEE);
}

#[test]
fn test_empty_strategy_can_be_replaced() {
    let fixture = setup_fixture();
    let (first, _) = fixture.create_sync_strategy(STRATEGY_FEE);
    assert_eq!(fixture.vault.strategy(), Some(first.address.clone()));

    let (second, _) = fixture.create_sync_strategy(STRATEGY_FEE);
    assert_eq!(fixture.vault.strategy(), Some(second.address));
}
