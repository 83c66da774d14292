//! Unit tests for the milestone area.
