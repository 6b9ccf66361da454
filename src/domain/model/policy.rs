//! Scoring policy
//!
//! Every threshold of the additive rating model lives here instead of
//! being scattered through the scoring code. Defaults reproduce the
//! shipped rating behavior; changing any field changes published ratings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub baseline: f64,
    pub min_score: f64,
    pub max_score: f64,

    /// Combustion power tiers (bhp), descending
    pub power_high: f64,
    pub power_mid: f64,
    pub power_low: f64,
    /// Below this an SUV takes the full penalty
    pub power_suv_penalty_below: f64,
    pub power_penalty_below: f64,

    /// Electric power tiers (bhp), descending
    pub ev_power_high: f64,
    pub ev_power_mid: f64,
    pub ev_power_low: f64,
    pub ev_power_penalty_below: f64,

    /// Combustion efficiency tiers (kmpl), descending
    pub efficiency_high: f64,
    pub efficiency_mid: f64,
    pub efficiency_low: f64,
    pub efficiency_penalty_below: f64,

    /// Electric range tiers (km), descending
    pub range_high: f64,
    pub range_mid: f64,
    pub range_penalty_below: f64,

    /// Automatic-gearbox value bonus applies under this price (lakh)
    pub value_automatic_price_lakh: f64,
    /// Turbo value bonus applies under this price (lakh)
    pub value_turbo_price_lakh: f64,
    /// Above this price (lakh), a sub-four-star rating costs half a point
    pub premium_price_lakh: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            baseline: 7.0,
            min_score: 5.0,
            max_score: 9.4,

            power_high: 180.0,
            power_mid: 140.0,
            power_low: 110.0,
            power_suv_penalty_below: 75.0,
            power_penalty_below: 65.0,

            ev_power_high: 200.0,
            ev_power_mid: 130.0,
            ev_power_low: 90.0,
            ev_power_penalty_below: 60.0,

            efficiency_high: 23.0,
            efficiency_mid: 19.0,
            efficiency_low: 16.0,
            efficiency_penalty_below: 10.0,

            range_high: 450.0,
            range_mid: 350.0,
            range_penalty_below: 200.0,

            value_automatic_price_lakh: 10.0,
            value_turbo_price_lakh: 12.0,
            premium_price_lakh: 25.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.baseline, 7.0);
        assert_eq!(policy.min_score, 5.0);
        assert_eq!(policy.max_score, 9.4);
        assert!(policy.power_high > policy.power_mid);
        assert!(policy.power_mid > policy.power_low);
        assert!(policy.range_high > policy.range_mid);
    }
}
