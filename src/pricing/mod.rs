pub mod late_fine;
pub mod loyalty;

use serde::{Deserialize, Serialize};

use crate::catalogue::Car;
use crate::decimal::{Money, Rate};

pub use late_fine::{LateFineCalculation, LateFineConfig, LateFineEngine};
pub use loyalty::LoyaltyConfig;

/// rental pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// insurance surcharge per rental day
    pub insurance_rate_per_day: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            insurance_rate_per_day: Money::from_major(200),
        }
    }
}

/// breakdown of a rental charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub days: u32,
    pub base: Money,
    pub insurance: Money,
    /// base plus insurance, before any discount
    pub gross: Money,
    pub discount_rate: Option<Rate>,
    pub discount: Money,
    pub total: Money,
}

impl PriceQuote {
    pub fn is_discounted(&self) -> bool {
        self.discount_rate.is_some()
    }
}

/// engine combining the daily rate, insurance and loyalty discount
pub struct PricingEngine<'a> {
    pub pricing: &'a PricingConfig,
    pub loyalty: &'a LoyaltyConfig,
}

impl<'a> PricingEngine<'a> {
    pub fn new(pricing: &'a PricingConfig, loyalty: &'a LoyaltyConfig) -> Self {
        Self { pricing, loyalty }
    }

    /// daily rate times days, plus the insurance surcharge when selected
    pub fn calculate_price(&self, car: &Car, days: u32, insurance: bool) -> Money {
        car.daily_rate.times(days) + self.insurance_charge(days, insurance)
    }

    fn insurance_charge(&self, days: u32, insurance: bool) -> Money {
        if insurance {
            self.pricing.insurance_rate_per_day.times(days)
        } else {
            Money::ZERO
        }
    }

    /// full quote for the customer's `rental_number`-th rental
    pub fn quote(&self, car: &Car, days: u32, insurance: bool, rental_number: u32) -> PriceQuote {
        let base = car.daily_rate.times(days);
        let insurance = self.insurance_charge(days, insurance);
        let gross = base + insurance;

        let discount_rate = self.loyalty.discount_for(rental_number);
        let total = match discount_rate {
            Some(rate) => gross.discounted_by(rate),
            None => gross,
        };

        PriceQuote {
            days,
            base,
            insurance,
            gross,
            discount_rate,
            discount: gross - total,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CarCategory;

    fn camry() -> Car {
        Car::new("C001", "Toyota", "Camry", Money::from_major(60), CarCategory::Sedan)
    }

    #[test]
    fn test_price_without_insurance() {
        let pricing = PricingConfig::default();
        let loyalty = LoyaltyConfig::default();
        let engine = PricingEngine::new(&pricing, &loyalty);

        assert_eq!(engine.calculate_price(&camry(), 2, false), Money::from_major(120));
    }

    #[test]
    fn test_insurance_adds_fixed_daily_charge() {
        let pricing = PricingConfig::default();
        let loyalty = LoyaltyConfig::default();
        let engine = PricingEngine::new(&pricing, &loyalty);
        let car = camry();

        for days in [1, 2, 7, 30] {
            let insured = engine.calculate_price(&car, days, true);
            let uninsured = engine.calculate_price(&car, days, false);
            assert_eq!(insured - uninsured, Money::from_major(200).times(days));
        }
    }

    #[test]
    fn test_quote_applies_loyalty_from_fourth_rental() {
        let pricing = PricingConfig::default();
        let loyalty = LoyaltyConfig::default();
        let engine = PricingEngine::new(&pricing, &loyalty);
        let car = camry();

        let third = engine.quote(&car, 2, false, 3);
        assert_eq!(third.total, Money::from_major(120));
        assert!(!third.is_discounted());

        let fourth = engine.quote(&car, 2, false, 4);
        assert_eq!(fourth.total.to_currency_string(), "108.00");
        assert_eq!(fourth.discount, Money::from_major(12));
        assert!(fourth.is_discounted());
    }

    #[test]
    fn test_quote_breakdown_with_insurance() {
        let pricing = PricingConfig::default();
        let loyalty = LoyaltyConfig::default();
        let engine = PricingEngine::new(&pricing, &loyalty);

        let quote = engine.quote(&camry(), 3, true, 1);

        assert_eq!(quote.base, Money::from_major(180));
        assert_eq!(quote.insurance, Money::from_major(600));
        assert_eq!(quote.gross, Money::from_major(780));
        assert_eq!(quote.total, quote.gross);
        assert_eq!(quote.discount, Money::ZERO);
    }
}
