use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;

/// loyalty discount configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyConfig {
    /// rentals a customer must exceed before the discount applies
    pub threshold_rentals: u32,
    /// reduction applied to the full price
    pub discount_rate: Rate,
}

impl LoyaltyConfig {
    pub fn new(threshold_rentals: u32, discount_rate: Rate) -> Self {
        Self {
            threshold_rentals,
            discount_rate,
        }
    }

    /// discount for a rental, given the customer's count including this rental
    pub fn discount_for(&self, rental_number: u32) -> Option<Rate> {
        if rental_number > self.threshold_rentals && self.discount_rate.as_decimal() > Decimal::ZERO {
            Some(self.discount_rate)
        } else {
            None
        }
    }
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self::new(3, Rate::from_percentage(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_rental_is_first_discounted() {
        let config = LoyaltyConfig::default();

        assert_eq!(config.discount_for(1), None);
        assert_eq!(config.discount_for(3), None);
        assert_eq!(config.discount_for(4), Some(Rate::from_percentage(10)));
        assert_eq!(config.discount_for(12), Some(Rate::from_percentage(10)));
    }

    #[test]
    fn test_zero_discount_is_never_applied() {
        let config = LoyaltyConfig::new(0, Rate::ZERO);
        assert_eq!(config.discount_for(5), None);
    }
}
