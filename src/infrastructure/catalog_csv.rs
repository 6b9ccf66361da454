//! CSV loader for variant catalogs
//!
//! One row per trim. Rows sharing a brand and model fold into a single
//! vehicle whose price range spans its trims.
//!
//! Expected header:
//! brand,model,variant,price,power,torque,mileage,transmission,fuel,body_type,safety_rating

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::types::{SpecSheet, SpecValue, VariantInput, VehicleInput};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid price in row {row}: {value}")]
    InvalidPrice { row: usize, value: String },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    brand: String,
    model: String,
    variant: String,
    price: String,
    #[serde(default)]
    power: Option<String>,
    #[serde(default)]
    torque: Option<String>,
    #[serde(default)]
    mileage: Option<String>,
    #[serde(default)]
    transmission: Option<String>,
    #[serde(default)]
    fuel: Option<String>,
    #[serde(default)]
    body_type: Option<String>,
    #[serde(default)]
    safety_rating: Option<String>,
}

/// Load a variant catalog from a CSV file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleInput>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    parse_catalog(&content)
}

/// Parse catalog CSV text into grouped vehicles, preserving row order.
pub fn parse_catalog(content: &str) -> Result<Vec<VehicleInput>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    validate_headers(reader.headers()?)?;

    let mut vehicles: Vec<VehicleInput> = Vec::new();
    // Running (min, max) trim price per vehicle, same index as `vehicles`
    let mut price_spans: Vec<(f64, f64)> = Vec::new();

    for (row_idx, result) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = result?;
        let row_num = row_idx + 2;

        let price = parse_price(&row.price, row_num)?;

        let position = vehicles
            .iter()
            .position(|v| v.brand == row.brand && v.name == row.model);
        let index = match position {
            Some(index) => index,
            None => {
                vehicles.push(VehicleInput {
                    name: row.model.clone(),
                    brand: row.brand.clone(),
                    ..Default::default()
                });
                price_spans.push((f64::INFINITY, f64::NEG_INFINITY));
                vehicles.len() - 1
            }
        };

        let vehicle = &mut vehicles[index];
        // Model-level fields come from the first row that states them
        if vehicle.specs.body_type.is_none() {
            vehicle.specs.body_type = text_value(row.body_type.as_deref());
        }
        if vehicle.specs.safety_rating.is_none() {
            vehicle.specs.safety_rating = text_value(row.safety_rating.as_deref());
        }

        vehicle.variants.push(VariantInput {
            name: row.variant,
            price,
            specs: SpecSheet {
                power: text_value(row.power.as_deref()),
                torque: text_value(row.torque.as_deref()),
                mileage: text_value(row.mileage.as_deref()),
                transmission: text_value(row.transmission.as_deref()),
                fuel_type: text_value(row.fuel.as_deref()),
                ..Default::default()
            },
        });

        let span = &mut price_spans[index];
        span.0 = span.0.min(price);
        span.1 = span.1.max(price);
    }

    for (vehicle, (low, high)) in vehicles.iter_mut().zip(price_spans) {
        if low.is_finite() {
            vehicle.starting_price = low;
            vehicle.ending_price = (high > low).then_some(high);
        }
    }

    debug!(count = vehicles.len(), "parsed catalog");
    Ok(vehicles)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), CatalogError> {
    for column in ["brand", "model", "variant", "price"] {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

fn parse_price(raw: &str, row: usize) -> Result<f64, CatalogError> {
    raw.replace(',', "")
        .trim()
        .parse::<f64>()
        .map_err(|_| CatalogError::InvalidPrice {
            row,
            value: raw.to_string(),
        })
}

fn text_value(raw: Option<&str>) -> Option<SpecValue> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| SpecValue::Text(s.to_string()))
}
