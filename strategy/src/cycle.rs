use soroban_sdk::contracttype;

/// Linear vesting schedule for a yield source that realizes profit in lumps
///
/// `reported_value` moves from `start_amount` to `end_amount` over `duration`
/// seconds starting at `start_timestamp`. Gains vest, losses do not: a value
/// below what has already vested restarts the cycle flat at the lower value.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct YieldCycle {
    pub start_amount: i128,        // Value reported when the cycle started
    pub end_amount: i128,          // Value reported once the cycle has fully elapsed
    pub distribution_amount: i128, // end_amount - start_amount, never negative
    pub start_timestamp: u64,      // Ledger time the cycle started
    pub duration: u64,             // Cycle length in seconds
}

impl YieldCycle {
    pub fn new(duration: u64, now: u64) -> Self {
        YieldCycle {
            start_amount: 0,
            end_amount: 0,
            distribution_amount: 0,
            start_timestamp: now,
            duration,
        }
    }

    /// Value vested at `now`, linearly interpolated and clamped to
    /// `[start_amount, end_amount]`
    pub fn reported_value(&self, now: u64) -> i128 {
        let elapsed = now.saturating_sub(self.start_timestamp);
        if self.duration == 0 || elapsed >= self.duration {
            return self.end_amount;
        }
        self.start_amount
            + self.distribution_amount * elapsed as i128 / self.duration as i128
    }

    /// Start a new cycle from what has vested so far towards `current_total_value`
    ///
    /// Returns false when the cycle already targets `current_total_value`
    pub fn update(&mut self, current_total_value: i128, now: u64) -> bool {
        if current_total_value == self.end_amount {
            return false;
        }
        let vested = self.reported_value(now);
        // a loss is reported in full right away
        self.start_amount = if current_total_value < vested {
            current_total_value
        } else {
            vested
        };
        self.end_amount = current_total_value;
        self.distribution_amount = self.end_amount - self.start_amount;
        self.start_timestamp = now;
        true
    }

    /// Move principal in or out without vesting it
    pub fn shift(&mut self, delta: i128) {
        self.start_amount = (self.start_amount + delta).max(0);
        self.end_amount = (self.end_amount + delta).max(0);
        self.distribution_amount = self.end_amount - self.start_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_DAY_SECONDS;

    const T0: u64 = 1_700_000_000;

    fn cycle_100_to_200() -> YieldCycle {
        let mut cycle = YieldCycle::new(10 * ONE_DAY_SECONDS, T0);
        cycle.shift(100);
        assert!(cycle.update(200, T0));
        cycle
    }

    #[test]
    fn test_reported_value_interpolates_linearly() {
        let cycle = cycle_100_to_200();
        assert_eq!(cycle.distribution_amount, 100);
        assert_eq!(cycle.reported_value(T0), 100);
        assert_eq!(cycle.reported_value(T0 + 5 * ONE_DAY_SECONDS), 150);
        assert_eq!(cycle.reported_value(T0 + 10 * ONE_DAY_SECONDS), 200);
        assert_eq!(cycle.reported_value(T0 + 30 * ONE_DAY_SECONDS), 200);
    }

    #[test]
    fn test_reported_value_never_decreases_within_cycle() {
        let cycle = cycle_100_to_200();
        let mut last = cycle.reported_value(T0);
        let mut t = T0;
        while t <= T0 + 11 * ONE_DAY_SECONDS {
            let value = cycle.reported_value(t);
            assert!(value >= last);
            assert!(value >= 100 && value <= 200);
            last = value;
            t += 7_919;
        }
    }

    #[test]
    fn test_loss_mid_cycle_is_reported_immediately() {
        let mut cycle = cycle_100_to_200();
        let now = T0 + 3 * ONE_DAY_SECONDS;
        assert_eq!(cycle.reported_value(now), 130);

        assert!(cycle.update(90, now));
        assert_eq!(cycle.start_amount, 90);
        assert_eq!(cycle.end_amount, 90);
        assert_eq!(cycle.distribution_amount, 0);
        assert_eq!(cycle.reported_value(now), 90);
        assert_eq!(cycle.reported_value(now + 10 * ONE_DAY_SECONDS), 90);
    }

    #[test]
    fn test_gain_mid_cycle_restarts_from_vested() {
        let mut cycle = cycle_100_to_200();
        let now = T0 + 5 * ONE_DAY_SECONDS;

        assert!(cycle.update(250, now));
        assert_eq!(cycle.start_amount, 150);
        assert_eq!(cycle.end_amount, 250);
        assert_eq!(cycle.start_timestamp, now);
        assert_eq!(cycle.reported_value(now + 10 * ONE_DAY_SECONDS), 250);
    }

    #[test]
    fn test_update_without_new_information_is_noop() {
        let mut cycle = cycle_100_to_200();
        let before = cycle.clone();
        assert!(!cycle.update(200, T0 + ONE_DAY_SECONDS));
        assert_eq!(cycle, before);

        // fully vested and unchanged
        assert!(!cycle.update(200, T0 + 20 * ONE_DAY_SECONDS));
        assert_eq!(cycle, before);
    }

    #[test]
    fn test_update_to_vested_value_restarts_flat() {
        let mut cycle = cycle_100_to_200();
        let now = T0 + 3 * ONE_DAY_SECONDS;
        assert_eq!(cycle.reported_value(now), 130);

        // the unvested 70 is gone, nothing is left to distribute
        assert!(cycle.update(130, now));
        assert_eq!(cycle.start_amount, 130);
        assert_eq!(cycle.end_amount, 130);
        assert_eq!(cycle.distribution_amount, 0);
        assert_eq!(cycle.start_timestamp, now);
        assert_eq!(cycle.reported_value(now + 10 * ONE_DAY_SECONDS), 130);

        // from here on the same value is a no-op
        assert!(!cycle.update(130, now + ONE_DAY_SECONDS));
    }

    #[test]
    fn test_shift_moves_principal_without_vesting() {
        let mut cycle = cycle_100_to_200();
        cycle.shift(1_000);
        assert_eq!(cycle.reported_value(T0), 1_100);
        assert_eq!(cycle.reported_value(T0 + 10 * ONE_DAY_SECONDS), 1_200);

        cycle.shift(-1_150);
        assert_eq!(cycle.start_amount, 0);
        assert_eq!(cycle.end_amount, 50);
        assert_eq!(cycle.distribution_amount, 50);
    }
}
