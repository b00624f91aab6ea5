use soroban_sdk::vec as svec;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::TestFixture;
use test_suites::{ONE_DAY, ONE_WEEK, SCALAR_7};

const CYCLE: u64 = 10 * ONE_DAY;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

#[test]
fn test_profit_vests_linearly() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_vested_strategy(0, CYCLE);

    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);
    let cycle = strategy.cycle();
    assert_eq!(cycle.start_amount, 900 * SCALAR_7);
    assert_eq!(cycle.end_amount, 900 * SCALAR_7);

    // a lump of profit shows nothing until harvested
    fixture.underlying.mint(&pool.address, &(100 * SCALAR_7));
    pool.accrue(&strategy.address, &(100 * SCALAR_7));
    assert_eq!(fixture.claimable(&user), 0);

    assert_eq!(strategy.harvest(&fixture.manager), 900 * SCALAR_7);
    let cycle = strategy.cycle();
    assert_eq!(cycle.start_amount, 900 * SCALAR_7);
    assert_eq!(cycle.end_amount, 1_000 * SCALAR_7);
    assert_eq!(cycle.distribution_amount, 100 * SCALAR_7);

    fixture.jump(CYCLE / 2);
    assert_eq!(strategy.invested_assets(), 950 * SCALAR_7);
    assert_eq!(fixture.claimable(&user), 50 * SCALAR_7);

    fixture.jump(CYCLE / 2);
    assert_eq!(fixture.claimable(&user), 100 * SCALAR_7);

    // fully vested and nothing new
    fixture.jump(CYCLE);
    assert_eq!(fixture.claimable(&user), 100 * SCALAR_7);
    assert_eq!(strategy.harvest(&fixture.manager), 1_000 * SCALAR_7);
    assert_eq!(strategy.cycle(), cycle);
}

#[test]
fn test_loss_is_reported_at_once() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_vested_strategy(0, CYCLE);

    let id = fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);

    pool.accrue(&strategy.address, &(-200 * SCALAR_7));
    strategy.harvest(&fixture.manager);
    let cycle = strategy.cycle();
    assert_eq!(cycle.start_amount, 700 * SCALAR_7);
    assert_eq!(cycle.end_amount, 700 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying(), 800 * SCALAR_7);

    fixture.jump(ONE_WEEK + 1);
    let result = fixture
        .vault
        .try_withdraw(&user, &user, &svec![&fixture.env, id]);
    assert!(result.is_err());
}

#[test]
fn test_withdraw_keeps_unvested_profit_in_pool() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_vested_strategy(0, CYCLE);

    let id = fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);
    fixture.underlying.mint(&pool.address, &(100 * SCALAR_7));
    pool.accrue(&strategy.address, &(100 * SCALAR_7));
    strategy.harvest(&fixture.manager);

    // lock ends before the cycle does
    fixture.jump(ONE_WEEK + 1);
    let paid = fixture
        .vault
        .withdraw(&user, &user, &svec![&fixture.env, id]);
    assert_eq!(paid, 1_000 * SCALAR_7);

    // the unvested part keeps vesting for the claimer
    assert!(pool.balance(&strategy.address) > 0);
    fixture.jump(CYCLE);
    assert_eq!(fixture.claimable(&user), 100 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #5010)")]
fn test_harvest_requires_manager() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, _) = fixture.create_vested_strategy(0, CYCLE);
    strategy.harvest(&user);
}

#[test]
fn test_set_cycle_duration_restarts_from_vested() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (strategy, pool) = fixture.create_vested_strategy(0, CYCLE);

    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);
    fixture.underlying.mint(&pool.address, &(100 * SCALAR_7));
    pool.accrue(&strategy.address, &(100 * SCALAR_7));
    strategy.harvest(&fixture.manager);

    fixture.jump(CYCLE / 2);
    strategy.set_cycle_duration(&(2 * CYCLE));
    let cycle = strategy.cycle();
    assert_eq!(cycle.start_amount, 950 * SCALAR_7);
    assert_eq!(cycle.end_amount, 1_000 * SCALAR_7);
    assert_eq!(cycle.duration, 2 * CYCLE);

    fixture.jump(CYCLE);
    assert_eq!(fixture.claimable(&user), 75 * SCALAR_7);
}
