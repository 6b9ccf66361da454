//! Quality score from normalized facts
//!
//! Additive model over a 7.0 baseline; thresholds come from
//! `ScoringPolicy`. Total over all inputs: no branch can fail.

use crate::domain::model::{NormalizedFacts, ScoringPolicy, Segment};

/// Score a vehicle, clamped to `[min_score, max_score]` and rounded to
/// one decimal.
pub fn score(facts: &NormalizedFacts, policy: &ScoringPolicy) -> f64 {
    let total = policy.baseline
        + power_delta(facts, policy)
        + efficiency_delta(facts, policy)
        + safety_delta(facts)
        + value_delta(facts, policy);

    let clamped = total.clamp(policy.min_score, policy.max_score);
    (clamped * 10.0).round() / 10.0
}

fn power_delta(facts: &NormalizedFacts, policy: &ScoringPolicy) -> f64 {
    let power = facts.max_power;
    if facts.is_electric {
        // No SUV penalty for electric drivetrains
        if power > policy.ev_power_high {
            1.5
        } else if power > policy.ev_power_mid {
            1.0
        } else if power > policy.ev_power_low {
            0.5
        } else if power < policy.ev_power_penalty_below {
            -0.5
        } else {
            0.0
        }
    } else if power > policy.power_high {
        1.5
    } else if power > policy.power_mid {
        1.0
    } else if power > policy.power_low {
        0.5
    } else if power < policy.power_suv_penalty_below && facts.segment == Segment::Suv {
        -1.0
    } else if power < policy.power_penalty_below {
        -0.5
    } else {
        0.0
    }
}

fn efficiency_delta(facts: &NormalizedFacts, policy: &ScoringPolicy) -> f64 {
    let efficiency = facts.efficiency;
    if facts.is_electric {
        if efficiency > policy.range_high {
            1.5
        } else if efficiency > policy.range_mid {
            1.0
        } else if efficiency < policy.range_penalty_below {
            -1.0
        } else {
            0.0
        }
    } else if efficiency > policy.efficiency_high {
        1.5
    } else if efficiency > policy.efficiency_mid {
        1.0
    } else if efficiency > policy.efficiency_low {
        0.5
    } else if efficiency < policy.efficiency_penalty_below {
        -1.0
    } else {
        0.0
    }
}

fn safety_delta(facts: &NormalizedFacts) -> f64 {
    // 0 = unrated, no adjustment either way
    match facts.safety_stars {
        5 => 1.0,
        4 => 0.5,
        1 | 2 => -1.0,
        _ => 0.0,
    }
}

fn value_delta(facts: &NormalizedFacts, policy: &ScoringPolicy) -> f64 {
    let mut delta = 0.0;
    if facts.is_automatic_available && facts.price_low_lakh < policy.value_automatic_price_lakh {
        delta += 0.5;
    }
    if facts.is_turbocharged && facts.price_low_lakh < policy.value_turbo_price_lakh {
        delta += 0.5;
    }
    if facts.price_low_lakh > policy.premium_price_lakh
        && facts.safety_stars > 0
        && facts.safety_stars < 4
    {
        delta -= 0.5;
    }
    delta
}
