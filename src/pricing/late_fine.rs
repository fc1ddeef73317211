use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// late return fine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateFineConfig {
    /// fine charged for each day past the due date
    pub fine_rate_per_day: Money,
    /// days past the due date that are not charged
    pub grace_period_days: u32,
}

impl LateFineConfig {
    pub fn new(fine_rate_per_day: Money) -> Self {
        Self {
            fine_rate_per_day,
            grace_period_days: 0,
        }
    }
}

impl Default for LateFineConfig {
    fn default() -> Self {
        Self::new(Money::from_major(100))
    }
}

/// engine for calculating late return fines
pub struct LateFineEngine {
    pub config: LateFineConfig,
}

impl LateFineEngine {
    pub fn new(config: LateFineConfig) -> Self {
        Self { config }
    }

    /// whole days between the due date and the return date, zero when on time
    pub fn late_days(due_date: NaiveDate, returned_on: NaiveDate) -> u32 {
        let days = (returned_on - due_date).num_days();
        if days > 0 {
            days as u32
        } else {
            0
        }
    }

    /// calculate the fine for a car returned on `returned_on`
    pub fn calculate_fine(&self, due_date: NaiveDate, returned_on: NaiveDate) -> LateFineCalculation {
        let late_days = Self::late_days(due_date, returned_on);

        if late_days <= self.config.grace_period_days {
            return LateFineCalculation {
                late_days,
                days_charged: 0,
                fine: Money::ZERO,
                grace_applied: late_days > 0,
            };
        }

        let days_charged = late_days - self.config.grace_period_days;

        LateFineCalculation {
            late_days,
            days_charged,
            fine: self.config.fine_rate_per_day.times(days_charged),
            grace_applied: false,
        }
    }
}

/// late fine calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateFineCalculation {
    pub late_days: u32,
    pub days_charged: u32,
    pub fine: Money,
    pub grace_applied: bool,
}

impl LateFineCalculation {
    pub fn is_late(&self) -> bool {
        self.late_days > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_days_late() {
        let engine = LateFineEngine::new(LateFineConfig::default());

        let result = engine.calculate_fine(date(2024, 1, 3), date(2024, 1, 6));

        assert_eq!(result.late_days, 3);
        assert_eq!(result.days_charged, 3);
        assert_eq!(result.fine.to_currency_string(), "300.00");
        assert!(result.is_late());
    }

    #[test]
    fn test_on_time_and_early_returns_are_free() {
        let engine = LateFineEngine::new(LateFineConfig::default());

        let on_due_date = engine.calculate_fine(date(2024, 1, 3), date(2024, 1, 3));
        assert_eq!(on_due_date.fine, Money::ZERO);
        assert!(!on_due_date.is_late());

        let early = engine.calculate_fine(date(2024, 1, 3), date(2024, 1, 1));
        assert_eq!(early.late_days, 0);
        assert_eq!(early.fine, Money::ZERO);
    }

    #[test]
    fn test_grace_period() {
        let mut config = LateFineConfig::default();
        config.grace_period_days = 2;
        let engine = LateFineEngine::new(config);

        let in_grace = engine.calculate_fine(date(2024, 1, 3), date(2024, 1, 5));
        assert_eq!(in_grace.fine, Money::ZERO);
        assert!(in_grace.grace_applied);

        let after_grace = engine.calculate_fine(date(2024, 1, 3), date(2024, 1, 8));
        assert_eq!(after_grace.late_days, 5);
        assert_eq!(after_grace.days_charged, 3);
        assert_eq!(after_grace.fine, Money::from_major(300));
    }

    #[test]
    fn test_late_across_month_boundary() {
        let engine = LateFineEngine::new(LateFineConfig::new(Money::from_major(50)));

        let result = engine.calculate_fine(date(2024, 2, 28), date(2024, 3, 2));

        // 2024 is a leap year
        assert_eq!(result.late_days, 3);
        assert_eq!(result.fine, Money::from_major(150));
    }
}
