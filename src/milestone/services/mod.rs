//! Application services for milestone tracking.

mod tracker;

pub use tracker::{MilestoneTrackerError, MilestoneTrackerResult, MilestoneTrackerService};
