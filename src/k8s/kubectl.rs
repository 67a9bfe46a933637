//! Kubectl subprocess wrapper

use anyhow::{Context, Result, anyhow};
use std::process::{Command, Stdio};

/// The cluster CLI kelp forwards to
pub const KUBECTL: &str = "kubectl";

/// Run kubectl with the user's arguments and capture its stdout
pub fn run_kubectl_capture(args: &[String]) -> Result<Vec<u8>> {
    capture_stdout(KUBECTL, args)
}

/// Run `program` with `args`, streaming stderr live and buffering stdout
///
/// Stdout is only returned once the child has exited successfully.
pub fn capture_stdout(program: &str, args: &[String]) -> Result<Vec<u8>> {
    tracing::debug!("running {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stderr(Stdio::inherit())
        .output()
        .with_context(|| format!("Failed to run {}", program))?;

    if !output.status.success() {
        return Err(anyhow!("{}", output.status));
    }

    tracing::debug!("{} wrote {} bytes", program, output.stdout.len());
    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_stdout() {
        let out = capture_stdout("echo", &args(&["get", "pods", "-o", "yaml"])).unwrap();
        assert_eq!(out, b"get pods -o yaml\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_error() {
        let err = capture_stdout("sh", &args(&["-c", "echo partial; exit 3"])).unwrap_err();
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_missing_program_is_error() {
        let err = capture_stdout("nonexistent-tool-xyz", &[]).unwrap_err();
        assert!(err.to_string().contains("Failed to run nonexistent-tool-xyz"));
    }
}
