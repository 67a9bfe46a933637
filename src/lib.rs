//! kelp - kubectl wrapper that decodes secrets and trims noisy YAML

pub mod commands;
pub mod config;
pub mod filter;
pub mod k8s;
pub mod utils;
