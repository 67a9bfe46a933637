//! Kubernetes API client construction

use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;

/// Resolve cluster access from a kubeconfig path
///
/// An empty path falls back to KUBECONFIG, ~/.kube/config and finally the
/// in-cluster service account.
pub async fn build_config(kubeconfig: &str) -> Result<Config> {
    if kubeconfig.is_empty() {
        crate::log_info!("No kubeconfig given, inferring cluster configuration");
        return Config::infer()
            .await
            .context("Failed to infer cluster configuration");
    }

    let path = Path::new(kubeconfig);
    crate::log_info!("Loading kubeconfig from {}", path.display());

    let raw = Kubeconfig::read_from(path)
        .with_context(|| format!("Failed to read kubeconfig: {}", path.display()))?;

    Config::from_custom_kubeconfig(raw, &KubeConfigOptions::default())
        .await
        .with_context(|| format!("Failed to load kubeconfig: {}", path.display()))
}

/// Build an API client from a resolved config
pub fn make_client(config: Config) -> Result<Client> {
    Client::try_from(config).context("Failed to construct API client")
}
