use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// unique identifier for a rental agreement
pub type AgreementId = Uuid;

/// car category shown in the catalogue listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarCategory {
    Sedan,
    Suv,
    Luxury,
    Economy,
    Other(String),
}

impl CarCategory {
    /// parse a free-form category label, falling back to `Other`
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "sedan" => CarCategory::Sedan,
            "suv" => CarCategory::Suv,
            "luxury" => CarCategory::Luxury,
            "economy" => CarCategory::Economy,
            _ => CarCategory::Other(label.trim().to_string()),
        }
    }
}

impl fmt::Display for CarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarCategory::Sedan => write!(f, "Sedan"),
            CarCategory::Suv => write!(f, "SUV"),
            CarCategory::Luxury => write!(f, "Luxury"),
            CarCategory::Economy => write!(f, "Economy"),
            CarCategory::Other(label) => write!(f, "{}", label),
        }
    }
}

/// car status derived from the availability flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarStatus {
    /// free to rent
    Available,
    /// held by an active agreement
    Rented,
}
