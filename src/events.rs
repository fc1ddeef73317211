use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::AgreementId;

/// all events that can be emitted by the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    // catalogue and roster events
    CarAdded {
        car_id: String,
        daily_rate: Money,
    },
    CustomerRegistered {
        customer_id: String,
        name: String,
    },

    // rental events
    CarRented {
        agreement_id: AgreementId,
        car_id: String,
        customer_id: String,
        days: u32,
        insurance: bool,
        price: Money,
        discount: Money,
        due_date: NaiveDate,
    },
    CarNotAvailable {
        car_id: String,
        customer_id: String,
        date: NaiveDate,
    },

    // return events
    CarReturned {
        agreement_id: AgreementId,
        car_id: String,
        returned_on: NaiveDate,
        late_days: u32,
    },
    LateFineApplied {
        agreement_id: AgreementId,
        car_id: String,
        fine: Money,
        late_days: u32,
        date: NaiveDate,
    },
    RentalRecordMissing {
        car_id: String,
        date: NaiveDate,
    },
}

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;
    use chrono::{Duration, TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    fn test_time() -> SafeTimeProvider {
        SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        ))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_store_take_drains_in_order() {
        let mut store = EventStore::new();
        store.emit(Event::RentalRecordMissing { car_id: "C001".to_string(), date: day(1) });
        store.emit(Event::RentalRecordMissing { car_id: "C002".to_string(), date: day(2) });

        assert_eq!(store.events().len(), 2);

        let taken = store.take_events();
        assert!(matches!(&taken[0], Event::RentalRecordMissing { car_id, .. } if car_id == "C001"));
        assert!(matches!(&taken[1], Event::RentalRecordMissing { car_id, .. } if car_id == "C002"));
        assert!(store.events().is_empty());
    }

    #[test]
    fn test_late_return_emits_rent_fine_then_return() {
        let time = test_time();
        let control = time.test_control().unwrap();
        let mut ledger = Ledger::with_standard_fleet();
        let customer_id = ledger.register_customer("Asha").id.clone();
        ledger.take_events();

        ledger.rent_car("C002", &customer_id, 2, false, &time).unwrap();
        control.advance(Duration::days(5));
        ledger.return_car("C002", &time).unwrap();

        let events = ledger.take_events();
        assert_eq!(events.len(), 3);

        let agreement = match &events[0] {
            Event::CarRented { agreement_id, car_id, price, due_date, .. } => {
                assert_eq!(car_id, "C002");
                assert_eq!(*price, Money::from_major(140));
                assert_eq!(*due_date, day(3));
                *agreement_id
            }
            other => panic!("expected CarRented, got {:?}", other),
        };
        assert_eq!(
            events[1],
            Event::LateFineApplied {
                agreement_id: agreement,
                car_id: "C002".to_string(),
                fine: Money::from_major(300),
                late_days: 3,
                date: day(6),
            }
        );
        assert_eq!(
            events[2],
            Event::CarReturned {
                agreement_id: agreement,
                car_id: "C002".to_string(),
                returned_on: day(6),
                late_days: 3,
            }
        );
    }

    #[test]
    fn test_on_time_return_emits_no_fine() {
        let time = test_time();
        let mut ledger = Ledger::with_standard_fleet();
        let customer_id = ledger.register_customer("Asha").id.clone();

        ledger.rent_car("C001", &customer_id, 1, false, &time).unwrap();
        ledger.return_car("C001", &time).unwrap();

        assert!(!ledger.events().iter().any(|e| matches!(e, Event::LateFineApplied { .. })));
        assert!(matches!(
            ledger.events().last(),
            Some(Event::CarReturned { late_days: 0, .. })
        ));
    }

    #[test]
    fn test_unavailable_car_is_recorded() {
        let time = test_time();
        let mut ledger = Ledger::with_standard_fleet();
        let asha = ledger.register_customer("Asha").id.clone();
        let ravi = ledger.register_customer("Ravi").id.clone();

        ledger.rent_car("C004", &asha, 1, false, &time).unwrap();
        ledger.take_events();
        ledger.rent_car("c004", &ravi, 1, false, &time).unwrap();

        assert_eq!(
            ledger.take_events(),
            vec![Event::CarNotAvailable {
                car_id: "C004".to_string(),
                customer_id: ravi,
                date: day(1),
            }]
        );
    }

    #[test]
    fn test_missing_rental_record_is_recorded() {
        let time = test_time();
        let mut ledger = Ledger::with_standard_fleet();

        ledger.return_car("c005", &time).unwrap();

        assert_eq!(
            ledger.events(),
            &[Event::RentalRecordMissing {
                car_id: "C005".to_string(),
                date: day(1),
            }]
        );
    }
}
