use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec as svec, Address};
use test_suites::setup::{create_fixture_with_data, USER_FUNDS};
use test_suites::test_fixture::TestFixture;
use test_suites::{ONE_WEEK, SCALAR_7};
use vault::{ClaimParams, Role};

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

fn claims_to(fixture: &TestFixture, beneficiary: &Address) -> soroban_sdk::Vec<ClaimParams> {
    svec![
        &fixture.env,
        ClaimParams {
            beneficiary: beneficiary.clone(),
            pct: SCALAR_7,
        }
    ]
}

// ================================
// Swaps
// ================================

#[test]
fn test_deposit_through_swap_adapter() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (swap, input) = fixture.create_swap(0_5000000, 10_000 * SCALAR_7);
    assert_eq!(fixture.vault.pool(&input.address), Some(swap.address.clone()));
    input.mint(&user, &(1_000 * SCALAR_7));

    let ids = fixture.vault.deposit(
        &user,
        &input.address,
        &(1_000 * SCALAR_7),
        &ONE_WEEK,
        &claims_to(&fixture, &user),
        &(500 * SCALAR_7),
    );
    let deposit = fixture.vault.get_deposit(&ids.get(0).unwrap());
    assert_eq!(deposit.amount, 500 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying(), 500 * SCALAR_7);

    // principal comes back as underlying
    fixture.jump(ONE_WEEK + 1);
    fixture.vault.withdraw(&user, &user, &ids);
    assert_eq!(fixture.token.balance(&user), USER_FUNDS + 500 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #4043)")]
fn test_swap_below_minimum_output() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (swap, input) = fixture.create_swap(0_5000000, 10_000 * SCALAR_7);
    input.mint(&user, &(1_000 * SCALAR_7));

    swap.set_rate(&0_4000000);
    fixture.vault.deposit(
        &user,
        &input.address,
        &(1_000 * SCALAR_7),
        &ONE_WEEK,
        &claims_to(&fixture, &user),
        &(450 * SCALAR_7),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #4042)")]
fn test_removed_pool_is_unsupported() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let (_, input) = fixture.create_swap(0_5000000, 10_000 * SCALAR_7);
    input.mint(&user, &(1_000 * SCALAR_7));

    fixture.vault.remove_pool(&fixture.admin, &input.address);
    assert_eq!(fixture.vault.pool(&input.address), None);
    fixture.vault.deposit(
        &user,
        &input.address,
        &(1_000 * SCALAR_7),
        &ONE_WEEK,
        &claims_to(&fixture, &user),
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #4042)")]
fn test_underlying_cannot_have_a_pool() {
    let fixture = setup_fixture();
    let adapter = Address::generate(&fixture.env);
    fixture
        .vault
        .add_pool(&fixture.admin, &fixture.underlying.address, &adapter);
}

// ================================
// Sponsors
// ================================

#[test]
fn test_depositors_take_losses_before_sponsors() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let sponsor = fixture.users[1].clone();
    fixture.vault.grant_role(&Role::Sponsor, &sponsor);
    let (strategy, pool) = fixture.create_sync_strategy(0);

    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    let sponsor_id = fixture.vault.sponsor(
        &sponsor,
        &fixture.underlying.address,
        &(1_000 * SCALAR_7),
        &(2 * ONE_WEEK),
        &0,
    );
    // sponsored principal is not invested against
    assert_eq!(fixture.vault.update_invested(&fixture.keeper), 900 * SCALAR_7);

    pool.accrue(&strategy.address, &(-300 * SCALAR_7));
    assert_eq!(fixture.vault.total_underlying(), 1_700 * SCALAR_7);
    assert!(fixture.vault.price_per_share() < SCALAR_7);

    // still locked
    let ids = svec![&fixture.env, sponsor_id];
    assert!(fixture
        .vault
        .try_unsponsor(&sponsor, &sponsor, &ids)
        .is_err());

    fixture.jump(2 * ONE_WEEK);
    let paid = fixture.vault.unsponsor(&sponsor, &sponsor, &ids);
    assert_eq!(paid, 1_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&sponsor), USER_FUNDS);
    assert_eq!(fixture.vault.totals().total_sponsored, 0);
    assert_eq!(fixture.vault.total_underlying(), 700 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #4024)")]
fn test_unsponsor_by_other_fails() {
    let fixture = setup_fixture();
    let sponsor = fixture.users[1].clone();
    fixture.vault.grant_role(&Role::Sponsor, &sponsor);
    let sponsor_id = fixture.vault.sponsor(
        &sponsor,
        &fixture.underlying.address,
        &(1_000 * SCALAR_7),
        &(2 * ONE_WEEK),
        &0,
    );
    fixture.jump(2 * ONE_WEEK);
    let other = fixture.users[0].clone();
    fixture
        .vault
        .unsponsor(&other, &other, &svec![&fixture.env, sponsor_id]);
}

// ================================
// Roles and Settings
// ================================

#[test]
fn test_settings_role_can_pause() {
    let fixture = setup_fixture();
    let guardian = Address::generate(&fixture.env);
    fixture.vault.grant_role(&Role::Settings, &guardian);

    fixture.vault.set_paused(&guardian, &true);
    assert!(fixture.vault.is_paused());

    let user = fixture.users[0].clone();
    let result = fixture.vault.try_deposit(
        &user,
        &fixture.underlying.address,
        &(1_000 * SCALAR_7),
        &ONE_WEEK,
        &claims_to(&fixture, &user),
        &0,
    );
    assert!(result.is_err());

    fixture.vault.set_paused(&guardian, &false);
    fixture.deposit(&user, &user, 1_000 * SCALAR_7);

    fixture.vault.revoke_role(&Role::Settings, &guardian);
    assert!(fixture.vault.try_set_paused(&guardian, &true).is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #4003)")]
fn test_keeper_cannot_change_settings() {
    let fixture = setup_fixture();
    let config = fixture.vault.config();
    fixture.vault.set_config(&fixture.keeper, &config);
}

#[test]
#[should_panic(expected = "Error(Contract, #4001)")]
fn test_invalid_config_is_rejected() {
    let fixture = setup_fixture();
    let mut config = fixture.vault.config();
    config.min_lock_period = 30 * ONE_WEEK;
    fixture.vault.set_config(&fixture.admin, &config);
}

#[test]
fn test_admin_handover_moves_every_role() {
    let fixture = setup_fixture();
    let new_admin = Address::generate(&fixture.env);

    fixture.vault.propose_admin(&new_admin);
    fixture.vault.accept_admin();
    assert_eq!(fixture.vault.admin(), new_admin);

    let config = fixture.vault.config();
    fixture.vault.set_config(&new_admin, &config);
    assert!(fixture
        .vault
        .try_set_config(&fixture.admin, &config)
        .is_err());
}

#[test]
fn test_migrate_is_idempotent() {
    let fixture = setup_fixture();
    let version = fixture.vault.migrate();
    assert_eq!(fixture.vault.migrate(), version);
}
