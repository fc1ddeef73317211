use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{RentalError, Result};
use crate::types::{CarCategory, CarStatus};

/// a rentable car in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub daily_rate: Money,
    pub category: CarCategory,
    available: bool,
    times_rented: u32,
}

impl Car {
    /// new cars start out available
    pub fn new(
        id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        daily_rate: Money,
        category: CarCategory,
    ) -> Self {
        Self {
            id: id.into(),
            brand: brand.into(),
            model: model.into(),
            daily_rate,
            category,
            available: true,
            times_rented: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> CarStatus {
        if self.available {
            CarStatus::Available
        } else {
            CarStatus::Rented
        }
    }

    /// rentals ever started on this car
    pub fn times_rented(&self) -> u32 {
        self.times_rented
    }

    /// brand and model, e.g. "Toyota Camry"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    pub fn matches_id(&self, id: &str) -> bool {
        self.id.eq_ignore_ascii_case(id)
    }

    pub(crate) fn mark_rented(&mut self) {
        self.available = false;
        self.times_rented += 1;
    }

    pub(crate) fn mark_returned(&mut self) {
        self.available = true;
    }
}

/// ordered collection of every car known to the ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalogue {
    cars: Vec<Car>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self { cars: Vec::new() }
    }

    /// the five cars the rental desk opens with
    pub fn standard_fleet() -> Self {
        let cars = vec![
            Car::new("C001", "Toyota", "Camry", Money::from_major(60), CarCategory::Sedan),
            Car::new("C002", "Honda", "Accord", Money::from_major(70), CarCategory::Sedan),
            Car::new("C003", "Mahindra", "Thar", Money::from_major(150), CarCategory::Suv),
            Car::new("C004", "BMW", "X5", Money::from_major(300), CarCategory::Luxury),
            Car::new("C005", "Maruti", "Swift", Money::from_major(45), CarCategory::Economy),
        ];
        Self { cars }
    }

    /// add a car, rejecting ids already present under any casing
    pub fn add_car(&mut self, car: Car) -> Result<()> {
        if car.daily_rate.is_negative() {
            return Err(RentalError::InvalidDailyRate {
                car_id: car.id,
                rate: car.daily_rate,
            });
        }

        if self.find(&car.id).is_some() {
            return Err(RentalError::DuplicateCar { car_id: car.id });
        }

        self.cars.push(car);
        Ok(())
    }

    /// case-insensitive exact match on the car id
    pub fn find(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|car| car.matches_id(id))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Car> {
        self.cars.iter_mut().find(|car| car.matches_id(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter()
    }

    /// available cars in catalogue order
    pub fn available_cars(&self) -> impl Iterator<Item = &Car> {
        self.cars.iter().filter(|car| car.is_available())
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}
