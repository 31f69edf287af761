//! Step definitions for the todo review behaviour suite.

pub mod world;

mod given;
mod then;
mod when;
