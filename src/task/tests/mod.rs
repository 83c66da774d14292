//! Unit tests for the task area.

mod service_tests;
