//! CLI command implementations.

pub mod demo;
pub mod types;
pub mod write;
