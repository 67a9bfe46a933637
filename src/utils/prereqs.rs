//! Prerequisite checking for external tools

use crate::k8s::kubectl::KUBECTL;

/// Where to get kubectl when it is missing
pub const KUBECTL_INSTALL_HINT: &str = "Install from: https://kubernetes.io/docs/tasks/tools/";

/// Check that kubectl is on PATH, returning the install hint if it is not
pub fn kubectl_on_path() -> Result<(), String> {
    tool_on_path(KUBECTL, KUBECTL_INSTALL_HINT)
}

fn tool_on_path(name: &str, hint: &str) -> Result<(), String> {
    which::which(name).map(|_| ()).map_err(|_| hint.to_string())
}
