//! Practicum: workflow and grading engine for team-based academic projects.
//!
//! This crate provides the core coordination logic for team project work:
//! moving individual tasks through a constrained lifecycle, tracking and
//! locking per-team milestone submissions, and deriving grades from weighted
//! supervisor and peer evaluation averages.
//!
//! # Architecture
//!
//! Practicum follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage interactions
//! - **Adapters**: Concrete implementations of ports (in-memory; a database
//!   layer is a collaborating service's concern)
//!
//! # Modules
//!
//! - [`roster`]: Teams, membership, and the shared identifier types
//! - [`task`]: The task status state machine
//! - [`milestone`]: Milestone submissions and the completion lock
//! - [`grading`]: Preview/final grade derivation and contribution analysis

pub mod grading;
pub mod milestone;
pub mod roster;
pub mod task;
