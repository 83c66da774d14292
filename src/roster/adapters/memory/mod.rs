//! In-memory adapters for roster ports.

mod roster;

pub use roster::InMemoryTeamRepository;
