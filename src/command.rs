use std::fmt;

use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::errors::{RentalError, Result};
use crate::ledger::{Ledger, RentOutcome, ReturnOutcome};
use crate::reports::{ActiveRentalLine, MostRented, RevenueReport};

/// every action the rental desk menu offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    RentCar {
        customer_name: String,
        car_id: String,
        days: u32,
        insurance: bool,
    },
    ReturnCar {
        car_id: String,
    },
    RevenueReport,
    ActiveRentals,
    MostRentedCar,
    Exit,
}

/// what the desk reports back for a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Rent {
        customer_id: String,
        outcome: RentOutcome,
    },
    Return(ReturnOutcome),
    CarNotFound {
        car_id: String,
    },
    Revenue(RevenueReport),
    ActiveRentals(Vec<ActiveRentalLine>),
    MostRented(MostRented),
    Exit,
}

impl CommandOutcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, CommandOutcome::Exit)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Rent { outcome, .. } => write!(f, "{}", outcome),
            CommandOutcome::Return(outcome) => write!(f, "{}", outcome),
            CommandOutcome::CarNotFound { car_id } => write!(f, "Car not found: {}", car_id),
            CommandOutcome::Revenue(report) => write!(f, "{}", report),
            CommandOutcome::ActiveRentals(lines) => {
                write!(f, "=== Active Rentals ===")?;
                for line in lines {
                    write!(f, "\n{}", line)?;
                }
                Ok(())
            }
            CommandOutcome::MostRented(most_rented) => write!(f, "{}", most_rented),
            CommandOutcome::Exit => write!(f, "Thank you for using Car Rental System!"),
        }
    }
}

impl Ledger {
    /// run one menu command against the ledger
    pub fn execute(&mut self, command: Command, time_provider: &SafeTimeProvider) -> Result<CommandOutcome> {
        match command {
            Command::RentCar {
                customer_name,
                car_id,
                days,
                insurance,
            } => {
                let existing = if self.config().reuse_customer_names {
                    self.find_customer_by_name(&customer_name).map(|c| c.id.clone())
                } else {
                    None
                };
                let customer_id = match existing {
                    Some(id) => id,
                    None => self.register_customer(customer_name).id.clone(),
                };

                match self.rent_car(&car_id, &customer_id, days, insurance, time_provider) {
                    Ok(outcome) => Ok(CommandOutcome::Rent { customer_id, outcome }),
                    Err(RentalError::CarNotFound { car_id }) => Ok(CommandOutcome::CarNotFound { car_id }),
                    Err(e) => Err(e),
                }
            }
            Command::ReturnCar { car_id } => match self.return_car(&car_id, time_provider) {
                Ok(outcome) => Ok(CommandOutcome::Return(outcome)),
                Err(RentalError::CarNotFound { car_id }) => Ok(CommandOutcome::CarNotFound { car_id }),
                Err(e) => Err(e),
            },
            Command::RevenueReport => Ok(CommandOutcome::Revenue(self.revenue_report())),
            Command::ActiveRentals => Ok(CommandOutcome::ActiveRentals(self.active_rentals())),
            Command::MostRentedCar => Ok(CommandOutcome::MostRented(self.most_rented_car())),
            Command::Exit => Ok(CommandOutcome::Exit),
        }
    }
}
