use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;

/// revenue collected so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub rental_revenue: Money,
    pub fine_revenue: Money,
    pub total_revenue: Money,
}

impl fmt::Display for RevenueReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Revenue: ${}", self.total_revenue.to_currency_string())
    }
}

/// one line of the active rentals listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveRentalLine {
    pub car_id: String,
    pub car_name: String,
    pub customer_name: String,
    pub due_date: NaiveDate,
}

impl fmt::Display for ActiveRentalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car: {} | Customer: {} | Return by: {}",
            self.car_name, self.customer_name, self.due_date
        )
    }
}

/// most rented car tally result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MostRented {
    NoRentalsYet,
    Car {
        car_id: String,
        car_name: String,
        count: u32,
    },
}

impl fmt::Display for MostRented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MostRented::NoRentalsYet => write!(f, "No rentals yet."),
            MostRented::Car { car_name, count, .. } => {
                write!(f, "Most Rented Car: {} ({} times)", car_name, count)
            }
        }
    }
}

/// pick the highest count, lowest car id on ties
pub(crate) fn top_by_count<'a, I>(tally: I) -> Option<(&'a str, u32)>
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut best: Option<(&'a str, u32)> = None;
    for (car_id, count) in tally {
        if count == 0 {
            continue;
        }
        best = match best {
            Some((best_id, best_count))
                if best_count > count || (best_count == count && best_id <= car_id) =>
            {
                Some((best_id, best_count))
            }
            _ => Some((car_id, count)),
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_by_count_breaks_ties_on_lowest_id() {
        let tally = vec![("C004", 2), ("C002", 2), ("C003", 1)];
        assert_eq!(top_by_count(tally), Some(("C002", 2)));
    }

    #[test]
    fn test_top_by_count_ignores_zero_and_empty() {
        assert_eq!(top_by_count(Vec::<(&str, u32)>::new()), None);
        assert_eq!(top_by_count(vec![("C001", 0)]), None);
    }

    #[test]
    fn test_report_formatting() {
        let report = RevenueReport {
            rental_revenue: Money::from_major(108),
            fine_revenue: Money::from_major(300),
            total_revenue: Money::from_major(408),
        };
        assert_eq!(report.to_string(), "Total Revenue: $408.00");

        let line = ActiveRentalLine {
            car_id: "C001".to_string(),
            car_name: "Toyota Camry".to_string(),
            customer_name: "Asha".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        };
        assert_eq!(
            line.to_string(),
            "Car: Toyota Camry | Customer: Asha | Return by: 2024-01-03"
        );

        assert_eq!(MostRented::NoRentalsYet.to_string(), "No rentals yet.");
    }
}
