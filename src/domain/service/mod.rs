//! Pure review-engine services

pub mod narrative;
pub mod normalizer;
pub mod pros_cons;
pub mod review;
pub mod scoring;
pub mod seeded;

pub use review::{generate_expert_review, EngineOptions};
