//! Domain model for milestone tracking and team submissions.

mod error;
mod ids;
mod milestone;
mod status;
mod view;

pub use error::MilestoneDomainError;
pub use ids::MilestoneId;
pub use milestone::Milestone;
pub use status::TeamMilestoneStatus;
pub use view::TeamMilestoneView;
