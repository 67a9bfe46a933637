//! `--list-pods`: print pods with their container images

use crate::k8s::{client, pods};
use crate::utils::KelpError;
use k8s_openapi::api::core::v1::Pod;
use std::io::{self, Write};

/// List pods in `namespace` and print a summary of each one
pub fn list(kubeconfig: &str, namespace: &str) -> Result<(), KelpError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(KelpError::client_create)?;

    let found = runtime.block_on(fetch(kubeconfig, namespace))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_summaries(&found, &mut out)
}

async fn fetch(kubeconfig: &str, namespace: &str) -> Result<Vec<Pod>, KelpError> {
    let config = client::build_config(kubeconfig)
        .await
        .map_err(KelpError::kubeconfig_build)?;
    let kube_client = client::make_client(config).map_err(KelpError::client_create)?;

    pods::list_pods(kube_client, namespace)
        .await
        .map_err(|e| KelpError::list_pods(namespace, e))
}

/// Write one summary block per pod, in the order given
pub fn write_summaries<W: Write>(found: &[Pod], out: &mut W) -> Result<(), KelpError> {
    for pod in found {
        write!(out, "{}", pods::PodSummary::from(pod)).map_err(KelpError::output)?;
    }
    out.flush().map_err(KelpError::output)
}
