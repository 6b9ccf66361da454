//! Built-in configuration banks for the review engine

pub mod authors;
pub mod lexicon;
pub mod segments;

pub use segments::segment_for;
