use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{RentalError, Result};
use crate::pricing::{LateFineConfig, LoyaltyConfig, PricingConfig};

/// ledger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LedgerConfig {
    pub pricing: PricingConfig,
    pub loyalty: LoyaltyConfig,
    pub late_fine: LateFineConfig,
    /// menu rentals under a known name reuse that customer instead of registering a new one
    #[serde(default)]
    pub reuse_customer_names: bool,
}

impl LedgerConfig {
    /// insurance 200/day, 10% off after 3 rentals, fine 100/day with no grace,
    /// a new customer for every menu rental
    pub fn standard() -> Self {
        Self::default()
    }

    /// check the configured rates make sense
    pub fn validate(&self) -> Result<()> {
        if self.pricing.insurance_rate_per_day.is_negative() {
            return Err(RentalError::InvalidConfiguration {
                message: format!(
                    "insurance rate per day cannot be negative: {}",
                    self.pricing.insurance_rate_per_day
                ),
            });
        }

        if self.late_fine.fine_rate_per_day.is_negative() {
            return Err(RentalError::InvalidConfiguration {
                message: format!(
                    "fine rate per day cannot be negative: {}",
                    self.late_fine.fine_rate_per_day
                ),
            });
        }

        let discount = self.loyalty.discount_rate.as_decimal();
        if discount < Decimal::ZERO || discount > Decimal::ONE {
            return Err(RentalError::InvalidConfiguration {
                message: format!(
                    "loyalty discount must be between 0% and 100%: {}",
                    self.loyalty.discount_rate
                ),
            });
        }

        Ok(())
    }

    /// parse and validate a json configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LedgerConfig =
            serde_json::from_str(json).map_err(|e| RentalError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}
