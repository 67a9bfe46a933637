//! Utility modules for kelp

pub mod errors;
pub mod logger;
pub mod prereqs;

// Re-export commonly used items
pub use errors::{DecodeError, ErrorKind, KelpError};
