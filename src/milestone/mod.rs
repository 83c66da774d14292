//! Milestone tracking for practicum.
//!
//! Teams progress through class-wide milestones by submitting a narrative
//! answer plus completed-task references, then marking the milestone
//! complete, which freezes the submission. Supervisors append feedback
//! through a channel that stays open after the lock. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
