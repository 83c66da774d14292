//! Adapter implementations of grading ports.

pub mod memory;
