//! Domain model for teams and team membership.

mod error;
mod ids;
mod team;

pub use error::{ParseTeamRoleError, RosterDomainError};
pub use ids::{ClassId, StudentId, TeamId};
pub use team::{Team, TeamMember, TeamRole};
