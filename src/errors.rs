use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RentalError {
    #[error("car not found: {car_id}")]
    CarNotFound {
        car_id: String,
    },

    #[error("customer not found: {customer_id}")]
    CustomerNotFound {
        customer_id: String,
    },

    #[error("invalid rental days: {days}, must be at least 1")]
    InvalidRentalDays {
        days: u32,
    },

    #[error("invalid daily rate for car {car_id}: {rate}")]
    InvalidDailyRate {
        car_id: String,
        rate: Money,
    },

    #[error("duplicate car id: {car_id}")]
    DuplicateCar {
        car_id: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, RentalError>;
