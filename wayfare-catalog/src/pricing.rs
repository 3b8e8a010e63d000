use rand::Rng;
use serde::{Deserialize, Serialize};
use wayfare_shared::CabinClass;

/// Per-class values, used for both per-km rates and fare floors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ClassRates {
    pub economy: f64,
    pub premium_economy: f64,
    pub business: f64,
    pub first: f64,
}

impl ClassRates {
    pub fn get(&self, class: CabinClass) -> f64 {
        match class {
            CabinClass::Economy => self.economy,
            CabinClass::PremiumEconomy => self.premium_economy,
            CabinClass::Business => self.business,
            CabinClass::First => self.first,
        }
    }
}

/// Inputs for pricing one generated flight
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PricingContext {
    pub distance_km: u32,
    pub cabin_class: CabinClass,
    /// Fixed per airline
    pub airline_multiplier: f64,
    pub quality_score: u8,
    /// 0..1, clamped
    pub demand: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub per_km_rates: ClassRates,
    pub minimum_fares: ClassRates,

    /// Demand 0 maps to the minimum, demand 1 to the maximum
    pub min_demand_multiplier: f64,
    pub max_demand_multiplier: f64,

    pub min_variance: f64,
    pub max_variance: f64,

    /// Scores at or above this earn the premium adjustment
    pub premium_quality_score: u8,
    pub premium_quality_multiplier: f64,
    /// Scores at or below this take the budget adjustment
    pub budget_quality_score: u8,
    pub budget_quality_multiplier: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            per_km_rates: ClassRates {
                economy: 0.10,
                premium_economy: 0.16,
                business: 0.35,
                first: 0.60,
            },
            minimum_fares: ClassRates {
                economy: 50.0,
                premium_economy: 150.0,
                business: 400.0,
                first: 1200.0,
            },
            min_demand_multiplier: 0.7,
            max_demand_multiplier: 1.5,
            min_variance: 0.8,
            max_variance: 1.2,
            premium_quality_score: 8,
            premium_quality_multiplier: 1.1,
            budget_quality_score: 5,
            budget_quality_multiplier: 0.8,
        }
    }
}

/// Distance based fare engine for generated supply
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// `distance × rate`, never below the class floor.
    pub fn base_fare(&self, distance_km: u32, class: CabinClass) -> f64 {
        let fare = distance_km as f64 * self.config.per_km_rates.get(class);
        fare.max(self.config.minimum_fares.get(class))
    }

    pub fn demand_multiplier(&self, demand: f64) -> f64 {
        let demand = if demand.is_finite() { demand.clamp(0.0, 1.0) } else { 0.5 };
        let span = self.config.max_demand_multiplier - self.config.min_demand_multiplier;
        self.config.min_demand_multiplier + demand * span
    }

    pub fn quality_multiplier(&self, quality_score: u8) -> f64 {
        if quality_score >= self.config.premium_quality_score {
            self.config.premium_quality_multiplier
        } else if quality_score <= self.config.budget_quality_score {
            self.config.budget_quality_multiplier
        } else {
            1.0
        }
    }

    /// Prices with an explicit variance factor. Always at least 1.
    pub fn price_with_variance(&self, context: &PricingContext, variance: f64) -> i32 {
        let mut price = self.base_fare(context.distance_km, context.cabin_class);
        price *= context.airline_multiplier;
        price *= self.demand_multiplier(context.demand);
        price *= variance;
        price *= self.quality_multiplier(context.quality_score);

        (price.round() as i32).max(1)
    }

    pub fn price<R: Rng + ?Sized>(&self, context: &PricingContext, rng: &mut R) -> i32 {
        let variance = rng.gen_range(self.config.min_variance..=self.config.max_variance);
        self.price_with_variance(context, variance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context(distance_km: u32, cabin_class: CabinClass) -> PricingContext {
        PricingContext {
            distance_km,
            cabin_class,
            airline_multiplier: 1.0,
            quality_score: 7,
            demand: 0.5,
        }
    }

    #[test]
    fn test_base_fare_floors() {
        let engine = PricingEngine::default();
        assert_eq!(engine.base_fare(100, CabinClass::Economy), 50.0);
        assert_eq!(engine.base_fare(100, CabinClass::PremiumEconomy), 150.0);
        assert_eq!(engine.base_fare(100, CabinClass::Business), 400.0);
        assert_eq!(engine.base_fare(100, CabinClass::First), 1200.0);
        assert_eq!(engine.base_fare(5_000, CabinClass::Economy), 500.0);
    }

    #[test]
    fn test_demand_multiplier_range() {
        let engine = PricingEngine::default();
        assert!((engine.demand_multiplier(0.0) - 0.7).abs() < 1e-9);
        assert!((engine.demand_multiplier(0.5) - 1.1).abs() < 1e-9);
        assert!((engine.demand_multiplier(1.0) - 1.5).abs() < 1e-9);
        // Out of range demand is clamped
        assert!((engine.demand_multiplier(3.0) - 1.5).abs() < 1e-9);
        assert!((engine.demand_multiplier(-1.0) - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_quality_steps() {
        let engine = PricingEngine::default();
        assert_eq!(engine.quality_multiplier(9), 1.1);
        assert_eq!(engine.quality_multiplier(8), 1.1);
        assert_eq!(engine.quality_multiplier(7), 1.0);
        assert_eq!(engine.quality_multiplier(6), 1.0);
        assert_eq!(engine.quality_multiplier(5), 0.8);
        assert_eq!(engine.quality_multiplier(1), 0.8);
    }

    #[test]
    fn test_price_with_fixed_variance() {
        let engine = PricingEngine::default();
        // 1430 km economy: 143 × 1.0 × 1.1 × 1.0 × 1.0
        assert_eq!(engine.price_with_variance(&context(1_430, CabinClass::Economy), 1.0), 157);
    }

    #[test]
    fn test_longer_routes_cost_more() {
        let engine = PricingEngine::default();
        let short = engine.price_with_variance(&context(1_000, CabinClass::Economy), 1.0);
        let long = engine.price_with_variance(&context(9_000, CabinClass::Economy), 1.0);
        assert!(long > short);
    }

    proptest! {
        #[test]
        fn price_is_always_positive(
            seed in any::<u64>(),
            distance in 0u32..20_000,
            multiplier in 0.85f64..1.25,
            quality in 1u8..=10,
            demand in -1.0f64..2.0,
        ) {
            let engine = PricingEngine::default();
            let mut rng = StdRng::seed_from_u64(seed);
            for class in CabinClass::ALL {
                let ctx = PricingContext {
                    distance_km: distance,
                    cabin_class: class,
                    airline_multiplier: multiplier,
                    quality_score: quality,
                    demand,
                };
                prop_assert!(engine.price(&ctx, &mut rng) > 0);
            }
        }
    }
}
