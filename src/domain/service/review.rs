//! Review assembly: the single engine entry point

use crate::domain::model::{AggregationStrategy, Lexicon, ScoringPolicy};
use crate::domain::service::narrative::compose_narrative;
use crate::domain::service::normalizer::normalize;
use crate::domain::service::pros_cons::derive_pros_cons;
use crate::domain::service::scoring::score;
use crate::domain::service::seeded::pick;
use crate::types::{Author, ExpertReview, VariantInput, VehicleInput, Verdict};

/// Knobs for a review run. `Default` reproduces the shipped behavior.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub aggregation: AggregationStrategy,
    pub policy: ScoringPolicy,
    pub lexicon: Lexicon,
}

/// Generate a complete expert review for one vehicle.
///
/// Pure and infallible: malformed or missing fields degrade to a generic
/// review rather than an error. A `variants` argument overrides the
/// variant list embedded in the input; pass `None` to use the embedded
/// one.
pub fn generate_expert_review(
    vehicle: &VehicleInput,
    variants: Option<&[VariantInput]>,
    options: &EngineOptions,
) -> ExpertReview {
    let variants = variants.unwrap_or(&vehicle.variants);
    let facts = normalize(vehicle, variants, options.aggregation);

    let rating = score(&facts, &options.policy);
    let verdict_summary = compose_narrative(&facts, rating, &options.lexicon);
    let talking_points = derive_pros_cons(&facts);
    let author = pick_author(&facts.seed_base(), &options.lexicon);

    ExpertReview {
        rating,
        verdict_title: Verdict::from_rating(rating),
        verdict_summary,
        pros: talking_points.pros,
        cons: talking_points.cons,
        author,
    }
}

/// Deterministic byline from the roster.
pub fn pick_author(seed: &str, lexicon: &Lexicon) -> Author {
    pick(&lexicon.authors, &format!("{seed}author"))
        .cloned()
        .unwrap_or_else(|| Author {
            name: "Editorial Team".to_string(),
            role: "Staff Reviewer".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_is_deterministic_and_from_roster() {
        let lexicon = Lexicon::default();
        let first = pick_author("Hyundai Creta10", &lexicon);
        let second = pick_author("Hyundai Creta10", &lexicon);
        assert_eq!(first, second);
        assert!(lexicon.authors.contains(&first));
    }

    #[test]
    fn test_empty_roster_uses_fallback_byline() {
        let lexicon = Lexicon {
            authors: Vec::new(),
            ..Lexicon::default()
        };
        let author = pick_author("anything", &lexicon);
        assert_eq!(author.name, "Editorial Team");
    }

    #[test]
    fn test_explicit_variants_override_embedded_ones() {
        let vehicle: VehicleInput = serde_json::from_str(
            r#"{"name": "Creta", "brand": "Hyundai", "power": "100 BHP",
                "variants": [{"power": "160 BHP"}]}"#,
        )
        .unwrap();
        let options = EngineOptions::default();

        let embedded = generate_expert_review(&vehicle, None, &options);
        let overridden = generate_expert_review(&vehicle, Some(&[]), &options);
        // 160 bhp clears the strong-performance rule; 100 bhp does not
        assert!(embedded
            .pros
            .contains(&"Strong Performance Options".to_string()));
        assert!(!overridden
            .pros
            .contains(&"Strong Performance Options".to_string()));
    }
}
