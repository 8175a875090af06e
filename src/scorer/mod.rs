//! Scorer module - per-category maturity scoring

pub mod engine;
pub mod scoring;

pub use scoring::{percentage, round_to_tenth, Scorer};
