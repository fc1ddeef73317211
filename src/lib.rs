pub mod catalogue;
pub mod command;
pub mod config;
pub mod customer;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod pricing;
pub mod rental;
pub mod reports;
pub mod serialization;
pub mod types;

// re-export key types
pub use catalogue::{Car, Catalogue};
pub use command::{Command, CommandOutcome};
pub use config::LedgerConfig;
pub use customer::{Customer, CustomerRoster};
pub use decimal::{Money, Rate};
pub use errors::{RentalError, Result};
pub use events::{Event, EventStore};
pub use ledger::{Ledger, RentOutcome, RentalReceipt, ReturnOutcome, ReturnReceipt};
pub use pricing::{
    LateFineCalculation, LateFineConfig, LateFineEngine, LoyaltyConfig, PriceQuote, PricingConfig,
    PricingEngine,
};
pub use rental::RentalAgreement;
pub use reports::{ActiveRentalLine, MostRented, RevenueReport};
pub use serialization::LedgerView;
pub use types::{AgreementId, CarCategory, CarStatus};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
