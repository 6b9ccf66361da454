//! Expert Review Engine
//!
//! Deterministic, rule-based expert reviews for car listings: a weighted
//! scoring model, seeded wording variety, and derived pros/cons computed
//! from loosely-shaped spec data.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod output;
pub mod scanner;
pub mod types;

pub use domain::service::{generate_expert_review, EngineOptions};
