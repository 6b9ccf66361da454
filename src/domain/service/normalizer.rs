//! Spec normalization: loose listing input to `NormalizedFacts`
//!
//! Extraction never fails. Anything unreadable becomes zero or false and
//! the downstream model degrades to a generic review.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::segment_for;
use crate::domain::model::{AggregationStrategy, NormalizedFacts};
use crate::types::{SpecValue, VariantInput, VehicleInput};

const LAKH: f64 = 100_000.0;

const TURBO_KEYWORDS: &[&str] = &["turbo", "tgdi"];
const AUTOMATIC_KEYWORDS: &[&str] = &["auto", "cvt", "dct"];

static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(\.[0-9]+)?").expect("static pattern"));

/// First `[0-9]+(\.[0-9]+)?` substring parsed as a float, 0.0 otherwise.
pub fn extract_first_number(text: &str) -> f64 {
    FIRST_NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn numeric(value: &Option<SpecValue>) -> f64 {
    match value {
        Some(SpecValue::Number(n)) => *n,
        Some(SpecValue::Text(s)) => extract_first_number(s),
        None => 0.0,
    }
}

fn text(value: &Option<SpecValue>) -> &str {
    match value {
        Some(SpecValue::Text(s)) => s.as_str(),
        _ => "",
    }
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    let lowered = haystack.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k))
}

/// Fold variant values into one model-level number.
///
/// Trims that state no value (extraction yields 0) are ignored; when none
/// state one, the base spec stands in.
fn aggregate(base: f64, variant_values: &[f64], strategy: AggregationStrategy) -> f64 {
    let mut stated: Vec<f64> = variant_values.iter().copied().filter(|v| *v > 0.0).collect();
    if stated.is_empty() {
        return base;
    }
    match strategy {
        AggregationStrategy::Max => stated.iter().copied().fold(0.0, f64::max),
        AggregationStrategy::Base => base,
        AggregationStrategy::Median => {
            stated.sort_by(f64::total_cmp);
            let mid = stated.len() / 2;
            if stated.len() % 2 == 1 {
                stated[mid]
            } else {
                (stated[mid - 1] + stated[mid]) / 2.0
            }
        }
    }
}

/// Derive model-level facts from a vehicle and its trims.
pub fn normalize(
    vehicle: &VehicleInput,
    variants: &[VariantInput],
    strategy: AggregationStrategy,
) -> NormalizedFacts {
    let specs = vehicle.effective_specs();

    let power_values: Vec<f64> = variants.iter().map(|v| numeric(&v.specs.power)).collect();
    let torque_values: Vec<f64> = variants.iter().map(|v| numeric(&v.specs.torque)).collect();
    let efficiency_values: Vec<f64> =
        variants.iter().map(|v| numeric(&v.specs.mileage)).collect();

    // Fuel and engine text from the base sheet and every trim
    let mut fuel_blob = text(&specs.fuel_type).to_string();
    let mut engine_blob = text(&specs.engine).to_string();
    for variant in variants {
        fuel_blob.push(' ');
        fuel_blob.push_str(text(&variant.specs.fuel_type));
        engine_blob.push(' ');
        engine_blob.push_str(text(&variant.specs.engine));
    }

    // Transmission text plus trim names, which often carry "Turbo"/"DCT"
    let mut gearbox_blob = text(&specs.transmission).to_string();
    for variant in variants {
        gearbox_blob.push(' ');
        gearbox_blob.push_str(text(&variant.specs.transmission));
        gearbox_blob.push(' ');
        gearbox_blob.push_str(&variant.name);
    }

    let fuel_and_engine = format!("{} {}", fuel_blob, engine_blob);
    let turbo_haystack = format!("{} {}", fuel_and_engine, gearbox_blob);

    let features_blob = vehicle.features.join(" ");

    let price_low_lakh = vehicle.starting_price / LAKH;
    let price_high_lakh = match vehicle.ending_price {
        Some(ending) if ending > vehicle.starting_price => ending / LAKH,
        _ => 0.0,
    };

    let safety_stars = numeric(&specs.safety_rating).round().clamp(0.0, 5.0) as u8;

    NormalizedFacts {
        full_name: vehicle.full_name(),
        price_low_lakh,
        price_high_lakh,
        max_power: aggregate(numeric(&specs.power), &power_values, strategy),
        max_torque: aggregate(numeric(&specs.torque), &torque_values, strategy),
        efficiency: aggregate(numeric(&specs.mileage), &efficiency_values, strategy),
        is_electric: contains_any(&fuel_and_engine, &["electric"]),
        is_diesel: contains_any(&fuel_and_engine, &["diesel"]),
        is_hybrid: contains_any(&fuel_and_engine, &["hybrid"]),
        is_turbocharged: contains_any(&turbo_haystack, TURBO_KEYWORDS),
        is_automatic_available: contains_any(&gearbox_blob, AUTOMATIC_KEYWORDS),
        has_sunroof: contains_any(&features_blob, &["sunroof"]),
        safety_stars,
        segment: segment_for(text(&specs.body_type)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Segment;
    use crate::types::SpecSheet;

    fn text_value(s: &str) -> Option<SpecValue> {
        Some(SpecValue::Text(s.to_string()))
    }

    fn variant_with_power(power: &str) -> VariantInput {
        VariantInput {
            specs: SpecSheet {
                power: text_value(power),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_extract_first_number() {
        assert_eq!(extract_first_number("113 BHP"), 113.0);
        assert_eq!(extract_first_number("17.4 kmpl"), 17.4);
        assert_eq!(extract_first_number("upto 250Nm of torque"), 250.0);
        assert_eq!(extract_first_number("no digits here"), 0.0);
        assert_eq!(extract_first_number(""), 0.0);
    }

    #[test]
    fn test_numeric_prefers_plain_numbers() {
        assert_eq!(numeric(&Some(SpecValue::Number(158.0))), 158.0);
        assert_eq!(numeric(&text_value("158 BHP")), 158.0);
        assert_eq!(numeric(&None), 0.0);
    }

    #[test]
    fn test_variant_power_beats_base() {
        let vehicle = VehicleInput {
            specs: SpecSheet {
                power: text_value("100 BHP"),
                ..Default::default()
            },
            ..Default::default()
        };
        let variants = vec![variant_with_power("160 BHP")];
        let facts = normalize(&vehicle, &variants, AggregationStrategy::Max);
        assert_eq!(facts.max_power, 160.0);
    }

    #[test]
    fn test_all_variants_silent_falls_back_to_base() {
        let vehicle = VehicleInput {
            specs: SpecSheet {
                power: text_value("100 BHP"),
                ..Default::default()
            },
            ..Default::default()
        };
        let variants = vec![variant_with_power(""), variant_with_power("n/a")];
        let facts = normalize(&vehicle, &variants, AggregationStrategy::Max);
        assert_eq!(facts.max_power, 100.0);
    }

    #[test]
    fn test_base_strategy_ignores_variants() {
        let vehicle = VehicleInput {
            specs: SpecSheet {
                power: text_value("100 BHP"),
                ..Default::default()
            },
            ..Default::default()
        };
        let variants = vec![variant_with_power("160 BHP")];
        let facts = normalize(&vehicle, &variants, AggregationStrategy::Base);
        assert_eq!(facts.max_power, 100.0);
    }

    #[test]
    fn test_median_strategy() {
        let variants = vec![
            variant_with_power("100 BHP"),
            variant_with_power("120 BHP"),
            variant_with_power("160 BHP"),
        ];
        let facts = normalize(
            &VehicleInput::default(),
            &variants,
            AggregationStrategy::Median,
        );
        assert_eq!(facts.max_power, 120.0);

        let even = vec![variant_with_power("100 BHP"), variant_with_power("120 BHP")];
        let facts = normalize(&VehicleInput::default(), &even, AggregationStrategy::Median);
        assert_eq!(facts.max_power, 110.0);
    }

    #[test]
    fn test_automatic_detected_from_variant_transmission() {
        let variants = vec![VariantInput {
            specs: SpecSheet {
                transmission: text_value("DCT"),
                ..Default::default()
            },
            ..Default::default()
        }];
        let facts = normalize(&VehicleInput::default(), &variants, AggregationStrategy::Max);
        assert!(facts.is_automatic_available);
    }

    #[test]
    fn test_turbo_detected_from_variant_name() {
        let variants = vec![VariantInput {
            name: "SX(O) 1.5 TGDi".to_string(),
            ..Default::default()
        }];
        let facts = normalize(&VehicleInput::default(), &variants, AggregationStrategy::Max);
        assert!(facts.is_turbocharged);
    }

    #[test]
    fn test_fuel_flags() {
        let vehicle = VehicleInput {
            specs: SpecSheet {
                fuel_type: text_value("Electric"),
                ..Default::default()
            },
            ..Default::default()
        };
        let facts = normalize(&vehicle, &[], AggregationStrategy::Max);
        assert!(facts.is_electric);
        assert!(!facts.is_diesel);

        let variants = vec![VariantInput {
            specs: SpecSheet {
                fuel_type: text_value("Diesel"),
                ..Default::default()
            },
            ..Default::default()
        }];
        let facts = normalize(&VehicleInput::default(), &variants, AggregationStrategy::Max);
        assert!(facts.is_diesel);
    }

    #[test]
    fn test_safety_stars_rounded_and_clamped() {
        let stars = |raw: &str| {
            let vehicle = VehicleInput {
                specs: SpecSheet {
                    safety_rating: text_value(raw),
                    ..Default::default()
                },
                ..Default::default()
            };
            normalize(&vehicle, &[], AggregationStrategy::Max).safety_stars
        };
        assert_eq!(stars("5 stars"), 5);
        assert_eq!(stars("4.5"), 5);
        assert_eq!(stars("3 star Global NCAP"), 3);
        assert_eq!(stars("9"), 5);
        assert_eq!(stars("unrated"), 0);
    }

    #[test]
    fn test_price_range() {
        let vehicle = VehicleInput {
            starting_price: 1_000_000.0,
            ending_price: Some(1_800_000.0),
            ..Default::default()
        };
        let facts = normalize(&vehicle, &[], AggregationStrategy::Max);
        assert_eq!(facts.price_low_lakh, 10.0);
        assert_eq!(facts.price_high_lakh, 18.0);
        assert!(facts.has_price_range());
    }

    #[test]
    fn test_equal_ending_price_means_no_range() {
        let vehicle = VehicleInput {
            starting_price: 1_000_000.0,
            ending_price: Some(1_000_000.0),
            ..Default::default()
        };
        let facts = normalize(&vehicle, &[], AggregationStrategy::Max);
        assert_eq!(facts.price_high_lakh, 0.0);
        assert!(!facts.has_price_range());
    }

    #[test]
    fn test_sunroof_from_features() {
        let vehicle = VehicleInput {
            features: vec!["Panoramic Sunroof".to_string(), "Ventilated Seats".to_string()],
            ..Default::default()
        };
        let facts = normalize(&vehicle, &[], AggregationStrategy::Max);
        assert!(facts.has_sunroof);
    }

    #[test]
    fn test_segment_from_body_type() {
        let vehicle = VehicleInput {
            key_specs: Some(SpecSheet {
                body_type: text_value("Compact SUV"),
                ..Default::default()
            }),
            ..Default::default()
        };
        let facts = normalize(&vehicle, &[], AggregationStrategy::Max);
        assert_eq!(facts.segment, Segment::Suv);
    }

    #[test]
    fn test_empty_input_degrades_to_zeroes() {
        let facts = normalize(&VehicleInput::default(), &[], AggregationStrategy::Max);
        assert_eq!(facts.max_power, 0.0);
        assert_eq!(facts.efficiency, 0.0);
        assert_eq!(facts.safety_stars, 0);
        assert_eq!(facts.segment, Segment::Market);
        assert!(!facts.is_electric);
        assert_eq!(facts.full_name, "");
    }
}
