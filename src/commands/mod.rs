//! Command implementations

pub mod passthrough;
pub mod pods;
