//! Unit tests for the roster area.

mod domain_tests;
mod repository_tests;
