//! Kubernetes operations

pub mod client;
pub mod kubectl;
pub mod pods;
