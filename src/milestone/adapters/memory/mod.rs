//! In-memory adapters for milestone ports.

mod milestone;
mod status;

pub use milestone::InMemoryMilestoneRepository;
pub use status::InMemoryMilestoneStatusRepository;
