//! Unit tests for the todo module.

mod helpers;
