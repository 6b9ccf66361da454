//! Rule-based pros and cons
//!
//! Rules fire in a fixed order; duplicates are dropped keeping the first
//! occurrence. Fixed fallbacks keep both lists non-empty for any input.

use crate::domain::model::{NormalizedFacts, Segment};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProsCons {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

const DEFAULT_PROS: &[&str] = &[
    "Balanced Overall Package",
    "Practical Interior Space",
    "Wide Service Network",
];

const DEFAULT_CONS: &[&str] = &["Firm Ride Quality", "Feature List Could Be Longer"];

pub fn derive_pros_cons(facts: &NormalizedFacts) -> ProsCons {
    let mut pros = Vec::new();
    if facts.max_power > 130.0 {
        pros.push("Strong Performance Options".to_string());
    } else if facts.is_turbocharged {
        pros.push("Punchy Turbo Variants Available".to_string());
    }
    if facts.efficiency > 20.0 {
        pros.push("Excellent Mileage".to_string());
    }
    if facts.safety_stars >= 4 {
        pros.push(format!("High Safety Rating ({}-Star)", facts.safety_stars));
    }
    if facts.is_automatic_available && facts.price_low_lakh < 10.0 {
        pros.push("Affordable Automatic Option".to_string());
    }
    if facts.is_electric && facts.efficiency > 400.0 {
        pros.push("Great Driving Range".to_string());
    }
    if facts.max_torque > 250.0 {
        pros.push("Great Low-end Torque".to_string());
    }
    if facts.price_low_lakh < 7.0 {
        pros.push("Budget Friendly Entry Price".to_string());
    }
    if pros.is_empty() {
        pros.extend(DEFAULT_PROS.iter().map(|p| (*p).to_string()));
    }

    let mut cons = Vec::new();
    if facts.price_low_lakh > 20.0 && !facts.is_automatic_available {
        cons.push("Missing Automatic at this price".to_string());
    }
    if facts.efficiency < 12.0 && !facts.is_electric {
        cons.push("Low Fuel Economy".to_string());
    }
    if facts.max_power < 75.0 && !facts.is_electric && facts.segment == Segment::Suv {
        cons.push("Base engine feels underpowered".to_string());
    }
    if facts.safety_stars > 0 && facts.safety_stars < 3 {
        cons.push("Mediocre Safety Rating".to_string());
    }
    if facts.price_low_lakh > 15.0 && !facts.has_sunroof {
        cons.push("Missing Sunroof".to_string());
    }
    if cons.is_empty() {
        cons.extend(DEFAULT_CONS.iter().map(|c| (*c).to_string()));
    }

    ProsCons {
        pros: dedup_keep_first(pros),
        cons: dedup_keep_first(cons),
    }
}

fn dedup_keep_first(items: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !kept.contains(&item) {
            kept.push(item);
        }
    }
    kept
}
