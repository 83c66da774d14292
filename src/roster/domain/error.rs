//! Error types for roster domain validation.

use thiserror::Error;

/// Errors returned while constructing roster domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterDomainError {
    /// The team name is empty after trimming.
    #[error("team name must not be empty")]
    EmptyTeamName,
}

/// Error returned while parsing a team role from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown team role: {0}")]
pub struct ParseTeamRoleError(pub String);
