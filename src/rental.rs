use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::types::AgreementId;

/// an active rental linking one car to one customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalAgreement {
    pub agreement_id: AgreementId,
    pub car_id: String,
    pub customer_id: String,
    pub days: u32,
    pub insurance: bool,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// price charged when the rental was created
    pub charged: Money,
    /// creation order within the ledger
    pub sequence: u64,
}

impl RentalAgreement {
    /// fails when the due date would fall outside the calendar
    pub fn new(
        car_id: String,
        customer_id: String,
        days: u32,
        insurance: bool,
        start_date: NaiveDate,
        charged: Money,
        sequence: u64,
    ) -> Result<Self> {
        let due_date = start_date
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(RentalError::InvalidRentalDays { days })?;

        Ok(Self {
            agreement_id: Uuid::new_v4(),
            car_id,
            customer_id,
            days,
            insurance,
            start_date,
            due_date,
            charged,
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_is_start_plus_days() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let agreement = RentalAgreement::new(
            "C001".to_string(),
            "CUS1".to_string(),
            5,
            false,
            start,
            Money::from_major(300),
            1,
        )
        .unwrap();

        assert_eq!(agreement.due_date, NaiveDate::from_ymd_opt(2025, 1, 4).unwrap());
    }

    #[test]
    fn test_due_date_beyond_calendar_is_rejected() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let result = RentalAgreement::new(
            "C001".to_string(),
            "CUS1".to_string(),
            u32::MAX,
            false,
            start,
            Money::ZERO,
            1,
        );

        assert_eq!(result.unwrap_err(), RentalError::InvalidRentalDays { days: u32::MAX });
    }
}
