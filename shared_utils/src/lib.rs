//! Small helpers shared by the workspace crates: environment lookups and
//! configuration-file reading.

pub mod config;
pub mod env;
