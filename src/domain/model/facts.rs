//! Normalized vehicle facts

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Market segment derived from body type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Suv,
    Sedan,
    Hatchback,
    Mpv,
    Luxury,
    #[default]
    Market,
}

impl Segment {
    /// Display label used in narrative copy
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Suv => "competitive SUV space",
            Segment::Sedan => "sedan segment",
            Segment::Hatchback => "hatchback market",
            Segment::Mpv => "MPV segment",
            Segment::Luxury => "luxury tier",
            Segment::Market => "market",
        }
    }
}

/// How variant spec values fold into model-level facts
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStrategy {
    /// The best-equipped trim represents the model
    #[default]
    Max,
    /// Base spec only
    Base,
    /// Median of the trims that state a value
    Median,
}

impl std::fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregationStrategy::Max => write!(f, "max"),
            AggregationStrategy::Base => write!(f, "base"),
            AggregationStrategy::Median => write!(f, "median"),
        }
    }
}

/// Facts extracted once per invocation, immutable afterwards.
///
/// Prices are in lakh (100,000 currency units). `price_high_lakh` is zero
/// when the vehicle has no price range. Power/torque/efficiency carry the
/// best value across trims under the configured aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedFacts {
    pub full_name: String,
    pub price_low_lakh: f64,
    pub price_high_lakh: f64,
    pub max_power: f64,
    pub max_torque: f64,
    pub efficiency: f64,
    pub is_electric: bool,
    pub is_diesel: bool,
    pub is_hybrid: bool,
    pub is_turbocharged: bool,
    pub is_automatic_available: bool,
    pub has_sunroof: bool,
    /// 0 = unrated
    pub safety_stars: u8,
    pub segment: Segment,
}

impl NormalizedFacts {
    /// Seed prefix shared by every seeded pick for this vehicle
    pub fn seed_base(&self) -> String {
        format!("{}{}", self.full_name, self.price_low_lakh)
    }

    pub fn has_price_range(&self) -> bool {
        self.price_high_lakh > self.price_low_lakh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_labels() {
        assert_eq!(Segment::Suv.label(), "competitive SUV space");
        assert_eq!(Segment::Market.label(), "market");
    }

    #[test]
    fn test_seed_base_folds_name_and_price() {
        let facts = NormalizedFacts {
            full_name: "Hyundai Creta".to_string(),
            price_low_lakh: 10.0,
            price_high_lakh: 18.0,
            max_power: 0.0,
            max_torque: 0.0,
            efficiency: 0.0,
            is_electric: false,
            is_diesel: false,
            is_hybrid: false,
            is_turbocharged: false,
            is_automatic_available: false,
            has_sunroof: false,
            safety_stars: 0,
            segment: Segment::Suv,
        };
        assert_eq!(facts.seed_base(), "Hyundai Creta10");
        assert!(facts.has_price_range());
    }
}
