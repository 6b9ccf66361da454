//! Core types for expert review generation

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize null as default value
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// A spec-sheet value as it arrives from listing data: a plain number or a
/// free-form string embedding one ("113 BHP", "17.4 kmpl").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Number(f64),
    Text(String),
}

impl SpecValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) => Some(*n),
            SpecValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(s) => Some(s.as_str()),
            SpecValue::Number(_) => None,
        }
    }
}

/// Loose spec fields shared by base vehicles and their variants.
///
/// Every field is optional; listing feeds routinely omit or misname them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecSheet {
    pub power: Option<SpecValue>,

    pub torque: Option<SpecValue>,

    #[serde(alias = "mileageOrRange", alias = "range")]
    pub mileage: Option<SpecValue>,

    #[serde(alias = "engineDescription")]
    pub engine: Option<SpecValue>,

    pub transmission: Option<SpecValue>,

    #[serde(alias = "safety", alias = "ncapRating")]
    pub safety_rating: Option<SpecValue>,

    pub body_type: Option<SpecValue>,

    #[serde(alias = "fuel")]
    pub fuel_type: Option<SpecValue>,
}

/// Untrusted vehicle record from a listing feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleInput {
    #[serde(deserialize_with = "null_to_default")]
    pub name: String,

    #[serde(deserialize_with = "null_to_default")]
    pub brand: String,

    /// Smallest currency unit
    #[serde(deserialize_with = "null_to_default")]
    pub starting_price: f64,

    pub ending_price: Option<f64>,

    /// Nested spec block; wins over the flat fields when both are present
    pub key_specs: Option<SpecSheet>,

    #[serde(flatten)]
    pub specs: SpecSheet,

    pub features: Vec<String>,

    pub variants: Vec<VariantInput>,
}

impl VehicleInput {
    /// Effective spec sheet after `keySpecs` precedence.
    pub fn effective_specs(&self) -> SpecSheet {
        let mut merged = self.specs.clone();
        if let Some(nested) = &self.key_specs {
            merge_field(&mut merged.power, &nested.power);
            merge_field(&mut merged.torque, &nested.torque);
            merge_field(&mut merged.mileage, &nested.mileage);
            merge_field(&mut merged.engine, &nested.engine);
            merge_field(&mut merged.transmission, &nested.transmission);
            merge_field(&mut merged.safety_rating, &nested.safety_rating);
            merge_field(&mut merged.body_type, &nested.body_type);
            merge_field(&mut merged.fuel_type, &nested.fuel_type);
        }
        merged
    }

    /// Display name used in seeds and output
    pub fn full_name(&self) -> String {
        format!("{} {}", self.brand.trim(), self.name.trim())
            .trim()
            .to_string()
    }
}

fn merge_field(target: &mut Option<SpecValue>, nested: &Option<SpecValue>) {
    if nested.is_some() {
        *target = nested.clone();
    }
}

/// One trim of a base vehicle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantInput {
    #[serde(deserialize_with = "null_to_default")]
    pub name: String,

    /// Smallest currency unit
    #[serde(deserialize_with = "null_to_default")]
    pub price: f64,

    #[serde(flatten)]
    pub specs: SpecSheet,
}

/// Reviewer byline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub role: String,
}

/// Verdict title keyed by rating bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Worth Considering")]
    WorthConsidering,
    #[serde(rename = "Proceed With Caution")]
    ProceedWithCaution,
}

impl Verdict {
    pub fn from_rating(rating: f64) -> Self {
        match rating {
            r if r > 8.0 => Verdict::HighlyRecommended,
            r if r > 7.0 => Verdict::WorthConsidering,
            _ => Verdict::ProceedWithCaution,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::HighlyRecommended => "Highly Recommended",
            Verdict::WorthConsidering => "Worth Considering",
            Verdict::ProceedWithCaution => "Proceed With Caution",
        }
    }
}

/// Complete generated review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertReview {
    /// One decimal, within [5.0, 9.4]
    pub rating: f64,
    pub verdict_title: Verdict,
    /// 4-5 paragraphs joined with single spaces
    pub verdict_summary: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub author: Author,
}

/// Review with source metadata, for batch runs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    /// File or catalog the vehicle came from
    pub source: String,
    /// Vehicle display name
    pub vehicle: String,
    pub review: ExpertReview,
}

/// Batch review results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReviews {
    pub entries: Vec<ReviewEntry>,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_value_number_or_text() {
        let v: VehicleInput = serde_json::from_str(r#"{"power": 113}"#).unwrap();
        assert_eq!(v.specs.power, Some(SpecValue::Number(113.0)));

        let v: VehicleInput = serde_json::from_str(r#"{"power": "113 BHP"}"#).unwrap();
        assert_eq!(v.specs.power, Some(SpecValue::Text("113 BHP".to_string())));
    }

    #[test]
    fn test_null_fields_become_defaults() {
        let v: VehicleInput =
            serde_json::from_str(r#"{"name": null, "startingPrice": null}"#).unwrap();
        assert_eq!(v.name, "");
        assert_eq!(v.starting_price, 0.0);
    }

    #[test]
    fn test_key_specs_take_precedence() {
        let v: VehicleInput = serde_json::from_str(
            r#"{"power": "100 BHP", "keySpecs": {"power": "140 BHP", "bodyType": "SUV"}}"#,
        )
        .unwrap();
        let specs = v.effective_specs();
        assert_eq!(specs.power, Some(SpecValue::Text("140 BHP".to_string())));
        assert_eq!(specs.body_type, Some(SpecValue::Text("SUV".to_string())));
    }

    #[test]
    fn test_variant_fuel_alias() {
        let v: VariantInput =
            serde_json::from_str(r#"{"name": "SX Diesel", "fuel": "Diesel"}"#).unwrap();
        assert_eq!(
            v.specs.fuel_type,
            Some(SpecValue::Text("Diesel".to_string()))
        );
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let v = VehicleInput {
            name: "Creta".to_string(),
            ..Default::default()
        };
        assert_eq!(v.full_name(), "Creta");
    }

    #[test]
    fn test_verdict_bands() {
        assert_eq!(Verdict::from_rating(9.0), Verdict::HighlyRecommended);
        assert_eq!(Verdict::from_rating(8.0), Verdict::WorthConsidering);
        assert_eq!(Verdict::from_rating(7.5), Verdict::WorthConsidering);
        assert_eq!(Verdict::from_rating(7.0), Verdict::ProceedWithCaution);
        assert_eq!(Verdict::from_rating(5.0), Verdict::ProceedWithCaution);
    }

    #[test]
    fn test_verdict_serializes_to_label() {
        let json = serde_json::to_string(&Verdict::HighlyRecommended).unwrap();
        assert_eq!(json, "\"Highly Recommended\"");
    }
}
