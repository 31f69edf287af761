//! Unit tests for the org module.
