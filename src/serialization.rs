/// serialization support for the ledger
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::ledger::Ledger;
use crate::rental::RentalAgreement;
use crate::reports::RevenueReport;
use crate::types::{CarCategory, CarStatus};

/// serializable view of a ledger's state
#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerView {
    pub cars: Vec<CarView>,
    pub customers: Vec<CustomerView>,
    pub active_rentals: Vec<RentalAgreement>,
    pub revenue: RevenueReport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CarView {
    pub id: String,
    pub name: String,
    pub category: CarCategory,
    pub daily_rate: Money,
    pub status: CarStatus,
    pub times_rented: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub rental_count: u32,
}

impl LedgerView {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        LedgerView {
            cars: ledger
                .catalogue()
                .iter()
                .map(|car| CarView {
                    id: car.id.clone(),
                    name: car.display_name(),
                    category: car.category.clone(),
                    daily_rate: car.daily_rate,
                    status: car.status(),
                    times_rented: car.times_rented(),
                })
                .collect(),
            customers: ledger
                .customers()
                .iter()
                .map(|customer| CustomerView {
                    id: customer.id.clone(),
                    name: customer.name.clone(),
                    rental_count: customer.rental_count(),
                })
                .collect(),
            active_rentals: ledger.active_agreements().into_iter().cloned().collect(),
            revenue: ledger.revenue_report(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Ledger {
    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        LedgerView::from_ledger(self)
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    #[test]
    fn test_view_reflects_rentals() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let mut ledger = Ledger::with_standard_fleet();
        let customer_id = ledger.register_customer("Asha").id.clone();
        ledger.rent_car("C002", &customer_id, 2, true, &time).unwrap();

        let view = LedgerView::from_ledger(&ledger);

        assert_eq!(view.cars.len(), 5);
        assert_eq!(view.cars[1].status, CarStatus::Rented);
        assert_eq!(view.cars[1].times_rented, 1);
        assert_eq!(view.customers[0].rental_count, 1);
        assert_eq!(view.active_rentals.len(), 1);
        assert_eq!(view.revenue.total_revenue, Money::from_major(540));
    }

    #[test]
    fn test_json_output() {
        let ledger = Ledger::with_standard_fleet();

        let json: serde_json::Value = serde_json::from_str(&ledger.json()).unwrap();

        assert_eq!(json["cars"][0]["id"], "C001");
        assert_eq!(json["cars"][0]["status"], "Available");
        assert_eq!(json["customers"].as_array().map(|c| c.len()), Some(0));
    }
}
