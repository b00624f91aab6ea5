use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::constants::SCALAR_7;

/// Fee owed on `profit` at `fee_pct` (SCALAR_7). Losses never pay a fee.
pub fn performance_fee(e: &Env, profit: i128, fee_pct: i128) -> i128 {
    if profit <= 0 || fee_pct <= 0 {
        return 0;
    }
    profit.fixed_mul_floor(e, &fee_pct, &SCALAR_7)
}

/// Fee that would be charged if the whole position were redeemed at `value`
pub fn unrealized_fee(e: &Env, value: i128, cost_basis: i128, fee_pct: i128) -> i128 {
    performance_fee(e, value - cost_basis, fee_pct)
}

/// Position value after the unrealized performance fee
pub fn net_value(e: &Env, value: i128, cost_basis: i128, fee_pct: i128) -> i128 {
    value - unrealized_fee(e, value, cost_basis, fee_pct)
}

/// Share of `cost_basis` attributed to redeeming `redeemed` out of `value`
pub fn cost_portion(e: &Env, cost_basis: i128, redeemed: i128, value: i128) -> i128 {
    if value <= 0 || redeemed >= value {
        return cost_basis;
    }
    cost_basis
        .fixed_mul_floor(e, &redeemed, &value)
        .min(cost_basis)
}

/// Gross amount to redeem so that `net` is left once the performance fee
/// on the redeemed portion is paid
///
/// Capped at `value`
pub fn gross_for_net(e: &Env, net: i128, value: i128, cost_basis: i128, fee_pct: i128) -> i128 {
    let net_total = net_value(e, value, cost_basis, fee_pct);
    if net_total <= 0 || net >= net_total {
        return value;
    }
    net.fixed_mul_ceil(e, &value, &net_total).min(value)
}

/// Split redemption `proceeds` into (to_vault, fee) given the cost of the
/// redeemed portion
pub fn split_proceeds(e: &Env, proceeds: i128, cost: i128, fee_pct: i128) -> (i128, i128) {
    let fee = performance_fee(e, proceeds - cost, fee_pct);
    (proceeds - fee, fee)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE_10_PCT: i128 = 1_000_000;

    #[test]
    fn test_performance_fee_only_on_profit() {
        let e = Env::default();
        assert_eq!(performance_fee(&e, 100, FEE_10_PCT), 10);
        assert_eq!(performance_fee(&e, 0, FEE_10_PCT), 0);
        assert_eq!(performance_fee(&e, -100, FEE_10_PCT), 0);
        assert_eq!(performance_fee(&e, 100, 0), 0);
    }

    #[test]
    fn test_net_value_excludes_unrealized_fee() {
        let e = Env::default();
        assert_eq!(unrealized_fee(&e, 1_100, 1_000, FEE_10_PCT), 10);
        assert_eq!(net_value(&e, 1_100, 1_000, FEE_10_PCT), 1_090);
        // underwater positions are valued at face value
        assert_eq!(net_value(&e, 900, 1_000, FEE_10_PCT), 900);
    }

    #[test]
    fn test_gross_for_net_covers_fee() {
        let e = Env::default();
        let (value, cost) = (1_100, 1_000);

        let gross = gross_for_net(&e, 545, value, cost, FEE_10_PCT);
        assert_eq!(gross, 550);
        let portion = cost_portion(&e, cost, gross, value);
        assert_eq!(portion, 500);
        assert_eq!(split_proceeds(&e, gross, portion, FEE_10_PCT), (545, 5));

        // asking for everything redeems everything
        assert_eq!(gross_for_net(&e, 1_090, value, cost, FEE_10_PCT), value);
        assert_eq!(gross_for_net(&e, 5_000, value, cost, FEE_10_PCT), value);
    }

    #[test]
    fn test_split_proceeds_at_loss_takes_no_fee() {
        let e = Env::default();
        assert_eq!(split_proceeds(&e, 900, 1_000, FEE_10_PCT), (900, 0));
        assert_eq!(split_proceeds(&e, 1_200, 1_000, FEE_10_PCT), (1_180, 20));
    }
}
