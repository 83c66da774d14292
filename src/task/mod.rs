//! Task lifecycle management for practicum.
//!
//! Individual work items move through a constrained lifecycle: `to_do`,
//! `in_progress`, `review`, `done`, `canceled`. The allowed moves live in a
//! single immutable transition table on [`domain::TaskStatus`]; services
//! validate references and persist through ports. The module follows
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
