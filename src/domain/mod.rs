//! Review engine domain: models and pure services

pub mod model;
pub mod service;
