//! Adapter implementations for the todo module ports.

pub mod memory;
