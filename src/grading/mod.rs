//! Grade derivation for practicum.
//!
//! Final grades combine supervisor-assessed team milestone averages with
//! peer-assessed individual averages under an injected weighting policy;
//! contribution analysis flags students whose peer assessment deviates from
//! their team's. The module follows hexagonal architecture:
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
