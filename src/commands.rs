//! Command handlers

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::domain::model::{AggregationStrategy, Lexicon};
use crate::domain::service::{generate_expert_review, EngineOptions};
use crate::error::{Error, Result};
use crate::infrastructure::catalog_csv::load_catalog;
use crate::output::{output_batch, output_review};
use crate::scanner::{scan_directory, validate_vehicle_file};
use crate::types::{BatchReviews, ReviewEntry, VehicleInput};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(aggregation) = cli.aggregation {
        config.aggregation = aggregation;
    }
    if let Some(ref lexicon) = cli.lexicon {
        config.lexicon_path = Some(lexicon.clone());
    }

    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Review { vehicle } => cmd_review(&config, vehicle, output_format),

        Commands::Batch { folder, output } => {
            cmd_batch(&config, folder, output.clone(), output_format)
        }

        Commands::Catalog { catalog, output } => {
            cmd_catalog(&config, catalog, output.clone(), output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_aggregation,
            set_lexicon,
            clear_lexicon,
            reset,
        } => cmd_config(
            *show,
            *set_output,
            *set_aggregation,
            set_lexicon.clone(),
            *clear_lexicon,
            *reset,
        ),
    }
}

fn engine_options(config: &Config) -> Result<EngineOptions> {
    let lexicon = match &config.lexicon_path {
        Some(path) => {
            debug!(path = %path.display(), "loading lexicon override");
            Lexicon::from_toml_path(path)?
        }
        None => Lexicon::default(),
    };
    Ok(EngineOptions {
        aggregation: config.aggregation,
        lexicon,
        ..Default::default()
    })
}

fn read_vehicle(path: &Path) -> Result<VehicleInput> {
    validate_vehicle_file(path)?;
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| Error::InvalidVehicleFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn cmd_review(config: &Config, path: &Path, output_format: OutputFormat) -> Result<()> {
    let options = engine_options(config)?;
    let vehicle = read_vehicle(path)?;
    debug!(path = %path.display(), vehicle = %vehicle.full_name(), "loaded vehicle input");

    let review = generate_expert_review(&vehicle, None, &options);
    output_review(output_format, &vehicle.full_name(), &review)
}

fn cmd_batch(
    config: &Config,
    folder: &Path,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let options = engine_options(config)?;
    let files = scan_directory(folder)?;
    if files.is_empty() {
        return Err(Error::EmptyBatch(folder.display().to_string()));
    }
    info!(count = files.len(), "reviewing vehicle files");

    let started_at = Utc::now();
    let mut entries = Vec::new();
    let mut failed = 0usize;
    for file in &files {
        match read_vehicle(file) {
            Ok(vehicle) => {
                let review = generate_expert_review(&vehicle, None, &options);
                entries.push(ReviewEntry {
                    source: file.display().to_string(),
                    vehicle: vehicle.full_name(),
                    review,
                });
            }
            Err(e) => {
                warn!(path = %file.display(), error = %e, "skipping vehicle file");
                failed += 1;
            }
        }
    }

    let batch = BatchReviews {
        total_processed: files.len(),
        successful: entries.len(),
        failed,
        entries,
        started_at,
        completed_at: Utc::now(),
    };

    write_batch_output(&batch, output)?;
    output_batch(output_format, &batch)
}

fn cmd_catalog(
    config: &Config,
    catalog: &Path,
    output: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let options = engine_options(config)?;
    let vehicles = load_catalog(catalog)?;
    info!(count = vehicles.len(), "reviewing catalog models");

    let started_at = Utc::now();
    let entries: Vec<ReviewEntry> = vehicles
        .iter()
        .map(|vehicle| ReviewEntry {
            source: catalog.display().to_string(),
            vehicle: vehicle.full_name(),
            review: generate_expert_review(vehicle, None, &options),
        })
        .collect();

    let batch = BatchReviews {
        total_processed: vehicles.len(),
        successful: entries.len(),
        failed: 0,
        entries,
        started_at,
        completed_at: Utc::now(),
    };

    write_batch_output(&batch, output)?;
    output_batch(output_format, &batch)
}

fn write_batch_output(batch: &BatchReviews, output: Option<PathBuf>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(&path, serde_json::to_string_pretty(batch)?)?;
        info!(path = %path.display(), "wrote batch results");
    }
    Ok(())
}

fn cmd_config(
    show: bool,
    set_output: Option<OutputFormat>,
    set_aggregation: Option<AggregationStrategy>,
    set_lexicon: Option<PathBuf>,
    clear_lexicon: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(aggregation) = set_aggregation {
        config.aggregation = aggregation;
        changed = true;
    }
    if let Some(path) = set_lexicon {
        config.lexicon_path = Some(path);
        changed = true;
    }
    if clear_lexicon {
        config.lexicon_path = None;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated");
    }
    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
