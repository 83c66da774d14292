//! Application services for grade derivation.

mod scoring;

pub use scoring::{ScoringError, ScoringResult, ScoringService};
