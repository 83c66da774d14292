//! In-memory adapters for grading ports.

mod evaluations;

pub use evaluations::InMemoryEvaluationStore;
