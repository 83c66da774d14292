//! Teams and team membership for practicum.
//!
//! The roster area carries the shared identifier newtypes and the storage
//! ports the workflow and grading areas resolve team references through. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
