use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalogue::{Car, Catalogue};
use crate::config::LedgerConfig;
use crate::customer::{Customer, CustomerRoster};
use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::events::{Event, EventStore};
use crate::pricing::{LateFineCalculation, LateFineEngine, PriceQuote, PricingEngine};
use crate::rental::RentalAgreement;
use crate::reports::{top_by_count, ActiveRentalLine, MostRented, RevenueReport};
use crate::types::AgreementId;

/// result of a successful rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalReceipt {
    pub agreement_id: AgreementId,
    pub car_id: String,
    pub customer_id: String,
    /// the customer's rental count including this rental
    pub rental_number: u32,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub quote: PriceQuote,
}

impl RentalReceipt {
    /// amount charged after any loyalty discount
    pub fn price(&self) -> Money {
        self.quote.total
    }
}

/// outcome of a rent request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RentOutcome {
    Rented(RentalReceipt),
    /// the car is held by another agreement, nothing changed
    CarNotAvailable { car_id: String },
}

impl fmt::Display for RentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentOutcome::Rented(receipt) => write!(
                f,
                "Total Price after discount (if any): ${}",
                receipt.price().to_currency_string()
            ),
            RentOutcome::CarNotAvailable { .. } => write!(f, "Car is not available for rent."),
        }
    }
}

/// result of closing an agreement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub agreement: RentalAgreement,
    pub returned_on: NaiveDate,
    pub late_fine: LateFineCalculation,
}

/// outcome of a return request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReturnOutcome {
    Returned(ReturnReceipt),
    /// car made available again but no active agreement referenced it
    RecordNotFound { car_id: String },
}

impl ReturnOutcome {
    /// fine charged by this return, zero when none
    pub fn fine(&self) -> Money {
        match self {
            ReturnOutcome::Returned(receipt) => receipt.late_fine.fine,
            ReturnOutcome::RecordNotFound { .. } => Money::ZERO,
        }
    }
}

impl fmt::Display for ReturnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReturnOutcome::Returned(receipt) => {
                let late = &receipt.late_fine;
                if late.is_late() && !late.fine.is_zero() {
                    writeln!(
                        f,
                        "Late return! Fine of ${} applied for {} extra days.",
                        late.fine.to_currency_string(),
                        late.late_days
                    )?;
                }
                write!(f, "Car returned successfully.")
            }
            ReturnOutcome::RecordNotFound { .. } => write!(f, "Rental record not found."),
        }
    }
}

/// the rental desk: catalogue, customers, active agreements and revenue
#[derive(Debug, Clone)]
pub struct Ledger {
    config: LedgerConfig,
    catalogue: Catalogue,
    customers: CustomerRoster,
    /// active agreements keyed by the car's catalogue id
    active: HashMap<String, RentalAgreement>,
    next_sequence: u64,
    rental_revenue: Money,
    fine_revenue: Money,
    events: EventStore,
}

impl Ledger {
    /// create an empty ledger
    pub fn new(config: LedgerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::empty(config))
    }

    /// standard configuration, empty catalogue
    pub fn standard() -> Self {
        Self::empty(LedgerConfig::standard())
    }

    fn empty(config: LedgerConfig) -> Self {
        Self {
            config,
            catalogue: Catalogue::new(),
            customers: CustomerRoster::new(),
            active: HashMap::new(),
            next_sequence: 0,
            rental_revenue: Money::ZERO,
            fine_revenue: Money::ZERO,
            events: EventStore::new(),
        }
    }

    /// standard configuration seeded with the standard fleet
    pub fn with_standard_fleet() -> Self {
        let mut ledger = Self::standard();
        ledger.catalogue = Catalogue::standard_fleet();
        ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// replace the configuration, keeping the current one when the new one is invalid
    pub fn set_config(&mut self, config: LedgerConfig) -> Result<()> {
        config.validate()?;
        debug!(
            insurance_rate_per_day = %config.pricing.insurance_rate_per_day,
            fine_rate_per_day = %config.late_fine.fine_rate_per_day,
            "Ledger configuration updated"
        );
        self.config = config;
        Ok(())
    }

    /// add a car to the catalogue
    pub fn add_car(&mut self, car: Car) -> Result<()> {
        let car_id = car.id.clone();
        let daily_rate = car.daily_rate;
        self.catalogue.add_car(car)?;

        debug!(car_id = %car_id, daily_rate = %daily_rate, "Car added to catalogue");
        self.events.emit(Event::CarAdded { car_id, daily_rate });
        Ok(())
    }

    /// register a new customer with the next sequential id
    pub fn register_customer(&mut self, name: impl Into<String>) -> &Customer {
        let customer = self.customers.register(name);

        debug!(customer_id = %customer.id, name = %customer.name, "Customer registered");
        self.events.emit(Event::CustomerRegistered {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
        });

        customer
    }

    pub fn find_car(&self, id: &str) -> Option<&Car> {
        self.catalogue.find(id)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.find(id)
    }

    pub fn find_customer_by_name(&self, name: &str) -> Option<&Customer> {
        self.customers.find_by_name(name)
    }

    pub fn customers(&self) -> &CustomerRoster {
        &self.customers
    }

    fn pricing(&self) -> PricingEngine<'_> {
        PricingEngine::new(&self.config.pricing, &self.config.loyalty)
    }

    /// daily rate times days plus insurance, before any discount
    pub fn calculate_price(&self, car: &Car, days: u32, insurance: bool) -> Money {
        self.pricing().calculate_price(car, days, insurance)
    }

    /// preview the charge the customer's next rental of this car would carry
    pub fn quote(&self, car_id: &str, customer_id: &str, days: u32, insurance: bool) -> Result<PriceQuote> {
        if days == 0 {
            return Err(RentalError::InvalidRentalDays { days });
        }
        let car = self.catalogue.find(car_id).ok_or_else(|| RentalError::CarNotFound {
            car_id: car_id.to_string(),
        })?;
        let customer = self.customers.find(customer_id).ok_or_else(|| RentalError::CustomerNotFound {
            customer_id: customer_id.to_string(),
        })?;

        Ok(self.pricing().quote(car, days, insurance, customer.rental_count() + 1))
    }

    /// rent with system time
    pub fn rent_car_now(
        &mut self,
        car_id: &str,
        customer_id: &str,
        days: u32,
        insurance: bool,
    ) -> Result<RentOutcome> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.rent_car(car_id, customer_id, days, insurance, &time)
    }

    /// rent a car to a customer starting today
    pub fn rent_car(
        &mut self,
        car_id: &str,
        customer_id: &str,
        days: u32,
        insurance: bool,
        time_provider: &SafeTimeProvider,
    ) -> Result<RentOutcome> {
        if days == 0 {
            return Err(RentalError::InvalidRentalDays { days });
        }

        let today = time_provider.now().date_naive();

        let car = self.catalogue.find_mut(car_id).ok_or_else(|| RentalError::CarNotFound {
            car_id: car_id.to_string(),
        })?;
        let customer = self.customers.find_mut(customer_id).ok_or_else(|| RentalError::CustomerNotFound {
            customer_id: customer_id.to_string(),
        })?;

        if !car.is_available() {
            warn!(car_id = %car.id, customer_id = %customer.id, "Car is not available for rent");
            self.events.emit(Event::CarNotAvailable {
                car_id: car.id.clone(),
                customer_id: customer.id.clone(),
                date: today,
            });
            return Ok(RentOutcome::CarNotAvailable { car_id: car.id.clone() });
        }

        // loyalty is judged on the count that includes this rental
        let rental_number = customer.rental_count() + 1;

        let quote = PricingEngine::new(&self.config.pricing, &self.config.loyalty)
            .quote(car, days, insurance, rental_number);

        // built before any state changes so a bad due date leaves the ledger untouched
        let agreement = RentalAgreement::new(
            car.id.clone(),
            customer.id.clone(),
            days,
            insurance,
            today,
            quote.total,
            self.next_sequence + 1,
        )?;

        car.mark_rented();
        customer.record_rental();
        self.next_sequence = agreement.sequence;
        self.rental_revenue += quote.total;

        info!(
            agreement_id = %agreement.agreement_id,
            car_id = %agreement.car_id,
            customer_id = %agreement.customer_id,
            days,
            insurance,
            rental_number,
            price = %quote.total,
            due_date = %agreement.due_date,
            "Car rented"
        );

        self.events.emit(Event::CarRented {
            agreement_id: agreement.agreement_id,
            car_id: agreement.car_id.clone(),
            customer_id: agreement.customer_id.clone(),
            days,
            insurance,
            price: quote.total,
            discount: quote.discount,
            due_date: agreement.due_date,
        });

        let receipt = RentalReceipt {
            agreement_id: agreement.agreement_id,
            car_id: agreement.car_id.clone(),
            customer_id: agreement.customer_id.clone(),
            rental_number,
            start_date: agreement.start_date,
            due_date: agreement.due_date,
            quote,
        };

        self.active.insert(agreement.car_id.clone(), agreement);

        Ok(RentOutcome::Rented(receipt))
    }

    /// return with system time
    pub fn return_car_now(&mut self, car_id: &str) -> Result<ReturnOutcome> {
        let time = SafeTimeProvider::new(hourglass_rs::TimeSource::System);
        self.return_car(car_id, &time)
    }

    /// return a car, charging a fine when it comes back after its due date
    pub fn return_car(&mut self, car_id: &str, time_provider: &SafeTimeProvider) -> Result<ReturnOutcome> {
        let today = time_provider.now().date_naive();

        let car = self.catalogue.find_mut(car_id).ok_or_else(|| RentalError::CarNotFound {
            car_id: car_id.to_string(),
        })?;
        car.mark_returned();
        let car_id = car.id.clone();

        let Some(agreement) = self.active.remove(&car_id) else {
            warn!(car_id = %car_id, "Rental record not found");
            self.events.emit(Event::RentalRecordMissing {
                car_id: car_id.clone(),
                date: today,
            });
            return Ok(ReturnOutcome::RecordNotFound { car_id });
        };

        let late_fine = LateFineEngine::new(self.config.late_fine.clone())
            .calculate_fine(agreement.due_date, today);

        if !late_fine.fine.is_zero() {
            self.fine_revenue += late_fine.fine;

            info!(
                agreement_id = %agreement.agreement_id,
                car_id = %car_id,
                late_days = late_fine.late_days,
                fine = %late_fine.fine,
                "Late fine applied"
            );
            self.events.emit(Event::LateFineApplied {
                agreement_id: agreement.agreement_id,
                car_id: car_id.clone(),
                fine: late_fine.fine,
                late_days: late_fine.late_days,
                date: today,
            });
        }

        info!(
            agreement_id = %agreement.agreement_id,
            car_id = %car_id,
            returned_on = %today,
            "Car returned"
        );
        self.events.emit(Event::CarReturned {
            agreement_id: agreement.agreement_id,
            car_id,
            returned_on: today,
            late_days: late_fine.late_days,
        });

        Ok(ReturnOutcome::Returned(ReturnReceipt {
            agreement,
            returned_on: today,
            late_fine,
        }))
    }

    pub fn total_revenue(&self) -> Money {
        self.rental_revenue + self.fine_revenue
    }

    pub fn revenue_report(&self) -> RevenueReport {
        RevenueReport {
            rental_revenue: self.rental_revenue,
            fine_revenue: self.fine_revenue,
            total_revenue: self.total_revenue(),
        }
    }

    /// the active agreement holding this car, if any
    pub fn active_agreement(&self, car_id: &str) -> Option<&RentalAgreement> {
        let car = self.catalogue.find(car_id)?;
        self.active.get(&car.id)
    }

    /// active agreements in the order they were created
    pub fn active_agreements(&self) -> Vec<&RentalAgreement> {
        let mut agreements: Vec<&RentalAgreement> = self.active.values().collect();
        agreements.sort_by_key(|a| a.sequence);
        agreements
    }

    pub fn active_rentals(&self) -> Vec<ActiveRentalLine> {
        self.active_agreements()
            .into_iter()
            .filter_map(|agreement| {
                let car = self.catalogue.find(&agreement.car_id)?;
                let customer = self.customers.find(&agreement.customer_id)?;
                Some(ActiveRentalLine {
                    car_id: car.id.clone(),
                    car_name: car.display_name(),
                    customer_name: customer.name.clone(),
                    due_date: agreement.due_date,
                })
            })
            .collect()
    }

    /// most frequent car among the active agreements
    pub fn most_rented_car(&self) -> MostRented {
        let mut tally: BTreeMap<&str, u32> = BTreeMap::new();
        for agreement in self.active.values() {
            *tally.entry(agreement.car_id.as_str()).or_insert(0) += 1;
        }

        self.most_rented_from(top_by_count(tally))
    }

    /// most frequent car over every rental ever started
    pub fn most_rented_car_all_time(&self) -> MostRented {
        let tally = self.catalogue.iter().map(|car| (car.id.as_str(), car.times_rented()));

        self.most_rented_from(top_by_count(tally))
    }

    fn most_rented_from(&self, top: Option<(&str, u32)>) -> MostRented {
        match top.and_then(|(car_id, count)| self.catalogue.find(car_id).map(|car| (car, count))) {
            Some((car, count)) => MostRented::Car {
                car_id: car.id.clone(),
                car_name: car.display_name(),
                count,
            },
            None => MostRented::NoRentalsYet,
        }
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }
}
