//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::model::AggregationStrategy;

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "expert-review")]
#[command(version)]
#[command(about = "Deterministic expert review generation for car listings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Variant aggregation strategy (max, base, median). Uses config value if not specified.
    #[arg(long, global = true)]
    pub aggregation: Option<AggregationStrategy>,

    /// Lexicon TOML file overriding the built-in vocabulary and roster
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Review a single vehicle JSON file
    Review {
        /// Path to vehicle JSON file
        vehicle: PathBuf,
    },

    /// Review every vehicle JSON file in a folder
    Batch {
        /// Path to folder containing vehicle files
        folder: PathBuf,

        /// Output file for results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Review every model in a variant catalog CSV
    Catalog {
        /// Path to catalog CSV file
        catalog: PathBuf,

        /// Output file for results
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default aggregation strategy
        #[arg(long)]
        set_aggregation: Option<AggregationStrategy>,

        /// Set default lexicon TOML path
        #[arg(long)]
        set_lexicon: Option<PathBuf>,

        /// Remove the lexicon override
        #[arg(long)]
        clear_lexicon: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
