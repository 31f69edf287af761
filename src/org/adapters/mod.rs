//! Adapter implementations for the org module ports.

pub mod memory;
