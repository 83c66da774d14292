//! Unit tests for the grading area.

mod scoring_service_tests;
