use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::vec as svec;
use strategy::OperationKind;
use test_suites::setup::{create_fixture_with_data, USER_FUNDS};
use test_suites::test_fixture::{AsyncStrategyFixture, TestFixture};
use test_suites::{ONE_HOUR, ONE_WEEK, SCALAR_7};

const STRATEGY_FEE: i128 = SCALAR_7 / 10;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

/// Deposit 1000 for the first user and send 900 to the operator
fn setup_invested(fixture: &TestFixture<'static>) -> AsyncStrategyFixture<'static> {
    let user = fixture.users[0].clone();
    let setup = fixture.create_async_strategy(STRATEGY_FEE);
    fixture.deposit(&user, &user, 1_000 * SCALAR_7);
    assert_eq!(fixture.vault.update_invested(&fixture.keeper), 900 * SCALAR_7);
    setup
}

/// The operator delivers `receipts` for deposit `id`
fn settle_deposit(fixture: &TestFixture, setup: &AsyncStrategyFixture, id: u32, receipts: i128) {
    setup.receipt.mint(&setup.strategy.address, &receipts);
    setup
        .strategy
        .notify_deposit_result(&setup.operator, &id, &receipts);
    assert_eq!(setup.strategy.finish_deposit(&fixture.manager, &id), receipts);
}

#[test]
fn test_deposit_round_trip() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);

    // the underlying went to the operator and counts at face value
    assert_eq!(fixture.token.balance(&setup.operator), 900 * SCALAR_7);
    let pending = setup.strategy.pending_operations();
    assert_eq!(pending.len(), 1);
    let operation = pending.get(0).unwrap();
    assert_eq!(operation.id, 1);
    assert_eq!(operation.kind, OperationKind::Deposit);
    assert_eq!(operation.amount, 900 * SCALAR_7);
    assert_eq!(operation.result, None);
    assert_eq!(fixture.vault.total_underlying(), 1_000 * SCALAR_7);

    // reported but not finished: the receipts count, the cost basis is pending
    setup.receipt.mint(&setup.strategy.address, &(900 * SCALAR_7));
    setup
        .strategy
        .notify_deposit_result(&setup.operator, &1, &(900 * SCALAR_7));
    assert_eq!(setup.strategy.cost_basis(), 0);
    assert_eq!(fixture.vault.total_underlying(), 1_000 * SCALAR_7);

    assert_eq!(
        setup.strategy.finish_deposit(&fixture.manager, &1),
        900 * SCALAR_7
    );
    assert_eq!(setup.strategy.cost_basis(), 900 * SCALAR_7);
    assert_eq!(setup.strategy.pending_operations().len(), 0);
    assert_eq!(setup.strategy.operation(&1), None);
    assert_eq!(fixture.vault.total_underlying(), 1_000 * SCALAR_7);
}

#[test]
fn test_receipt_price_drives_yield() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    fixture.jump(600);
    setup.oracle.set_price_stable(&svec![&fixture.env, 1_1000000]);

    // 990 of receipts, less 10% of the 90 profit
    assert_eq!(setup.strategy.invested_assets(), 981 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying(), 1_081 * SCALAR_7);
    assert_eq!(fixture.claimable(&user), 81 * SCALAR_7);
}

#[test]
fn test_redeem_round_trip() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    fixture.jump(ONE_WEEK + 1);
    setup.oracle.set_price_stable(&svec![&fixture.env, 1_1000000]);

    // the vault only holds 100 and redemptions take a round trip
    let result = fixture
        .vault
        .try_withdraw(&user, &user, &svec![&fixture.env, 1]);
    assert!(result.is_err());

    // divest everything
    let mut config = fixture.vault.config();
    config.invest_pct = 0;
    fixture.vault.set_config(&fixture.admin, &config);
    assert_eq!(
        fixture.vault.update_invested(&fixture.keeper),
        -981 * SCALAR_7
    );

    let operation = setup.strategy.operation(&2).unwrap();
    assert_eq!(operation.kind, OperationKind::Redeem);
    assert_eq!(operation.amount, 900 * SCALAR_7);
    assert_eq!(operation.cost_basis, 900 * SCALAR_7);
    assert_eq!(setup.strategy.cost_basis(), 0);
    let receipts = MockTokenClient::new(&fixture.env, &setup.receipt.address);
    assert_eq!(receipts.balance(&setup.operator), 900 * SCALAR_7);
    // in flight receipts keep their value
    assert_eq!(fixture.vault.total_underlying(), 1_081 * SCALAR_7);

    // the operator sells for 990
    fixture
        .underlying
        .mint(&setup.strategy.address, &(990 * SCALAR_7));
    setup
        .strategy
        .notify_redeem_result(&setup.operator, &2, &(990 * SCALAR_7));
    assert_eq!(fixture.vault.total_underlying(), 1_081 * SCALAR_7);

    assert_eq!(
        setup.strategy.finish_redeem(&fixture.manager, &2),
        981 * SCALAR_7
    );
    assert_eq!(fixture.token.balance(&fixture.treasury), 9 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&fixture.vault.address),
        1_081 * SCALAR_7
    );
    assert!(!setup.strategy.has_assets());

    let paid = fixture
        .vault
        .withdraw(&user, &user, &svec![&fixture.env, 1]);
    assert_eq!(paid, 1_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&user), USER_FUNDS);
    assert_eq!(fixture.claimable(&user), 81 * SCALAR_7);
}

#[test]
fn test_operations_settle_out_of_order() {
    let fixture = setup_fixture();
    let other = fixture.users[1].clone();
    let setup = setup_invested(&fixture);

    fixture.deposit(&other, &other, 1_000 * SCALAR_7);
    assert_eq!(fixture.vault.update_invested(&fixture.keeper), 900 * SCALAR_7);
    assert_eq!(setup.strategy.pending_operations().len(), 2);

    // the second deposit settles first and at a discount
    settle_deposit(&fixture, &setup, 2, 880 * SCALAR_7);
    let pending = setup.strategy.pending_operations();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending.get(0).unwrap().id, 1);
    assert_eq!(setup.strategy.cost_basis(), 900 * SCALAR_7);

    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);
    assert_eq!(setup.strategy.cost_basis(), 1_800 * SCALAR_7);
    assert_eq!(setup.strategy.pending_operations().len(), 0);
    assert_eq!(setup.strategy.invested_assets(), 1_780 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #5032)")]
fn test_result_is_reported_once() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    setup.receipt.mint(&setup.strategy.address, &(900 * SCALAR_7));
    setup
        .strategy
        .notify_deposit_result(&setup.operator, &1, &(900 * SCALAR_7));
    setup
        .strategy
        .notify_deposit_result(&setup.operator, &1, &(800 * SCALAR_7));
}

#[test]
fn test_rebalance_does_not_redeem_twice() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    let mut config = fixture.vault.config();
    config.invest_pct = 0_5000000;
    fixture.vault.set_config(&fixture.admin, &config);
    assert_eq!(
        fixture.vault.update_invested(&fixture.keeper),
        -400 * SCALAR_7
    );

    // the redemption in flight already covers the excess
    fixture.vault.update_invested(&fixture.keeper);
    let pending = setup.strategy.pending_operations();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending.get(0).unwrap().amount, 400 * SCALAR_7);
    let receipts = MockTokenClient::new(&fixture.env, &setup.receipt.address);
    assert_eq!(receipts.balance(&setup.operator), 400 * SCALAR_7);
    assert_eq!(receipts.balance(&setup.strategy.address), 500 * SCALAR_7);

    // once the proceeds are forwarded the vault is back on target
    fixture
        .underlying
        .mint(&setup.strategy.address, &(400 * SCALAR_7));
    setup
        .strategy
        .notify_redeem_result(&setup.operator, &2, &(400 * SCALAR_7));
    fixture.vault.update_invested(&fixture.keeper);
    assert_eq!(setup.strategy.pending_operations().len(), 1);
    setup.strategy.finish_redeem(&fixture.manager, &2);
    assert_eq!(fixture.vault.update_invested(&fixture.keeper), 0);
    assert_eq!(setup.strategy.invested_assets(), 500 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #5034)")]
fn test_deposit_result_requires_receipts() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    // the receipts already held do not back a new deposit
    fixture.deposit(&fixture.users[1], &fixture.users[1], 1_000 * SCALAR_7);
    fixture.vault.update_invested(&fixture.keeper);
    setup
        .strategy
        .notify_deposit_result(&setup.operator, &2, &(900 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #5034)")]
fn test_redeem_result_requires_proceeds() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    let mut config = fixture.vault.config();
    config.invest_pct = 0;
    fixture.vault.set_config(&fixture.admin, &config);
    fixture.vault.update_invested(&fixture.keeper);
    setup
        .strategy
        .notify_redeem_result(&setup.operator, &2, &(900 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #5030)")]
fn test_operation_is_finished_once() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);
    setup.strategy.finish_deposit(&fixture.manager, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #5031)")]
fn test_finish_before_result() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    setup.strategy.finish_deposit(&fixture.manager, &1);
}

#[test]
#[should_panic(expected = "Error(Contract, #5033)")]
fn test_wrong_operation_kind() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    setup
        .strategy
        .notify_redeem_result(&setup.operator, &1, &(900 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #5011)")]
fn test_only_operator_reports() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    setup
        .strategy
        .notify_deposit_result(&fixture.manager, &1, &(900 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #5042)")]
fn test_stale_price_is_rejected() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    fixture.jump(2 * ONE_HOUR);
    fixture.vault.total_underlying();
}

#[test]
#[should_panic(expected = "Error(Contract, #5041)")]
fn test_invalid_price_is_rejected() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);
    settle_deposit(&fixture, &setup, 1, 900 * SCALAR_7);

    fixture.jump(600);
    setup.oracle.set_price_stable(&svec![&fixture.env, 0]);
    fixture.vault.total_underlying();
}

#[test]
fn test_no_price_needed_without_receipts() {
    let fixture = setup_fixture();
    let setup = setup_invested(&fixture);

    // only a pending deposit: valued at face value, the stale oracle is never read
    fixture.jump(2 * ONE_HOUR);
    assert_eq!(fixture.vault.total_underlying(), 1_000 * SCALAR_7);
    assert_eq!(setup.strategy.last_price_timestamp(), 0);
}
