//! Adapter implementations of milestone ports.

pub mod memory;
