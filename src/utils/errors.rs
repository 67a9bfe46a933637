//! Error types with actionable suggestions

use colored::Colorize;
use std::fmt::Display;
use thiserror::Error;

/// Which step of a command failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    KubeconfigBuild,
    ClientCreate,
    ListPods,
    Kubectl,
    YamlParse,
    Base64Decode,
    YamlMarshal,
    Output,
}

/// A failure reported to the user at the command boundary
#[derive(Error, Debug)]
#[error("{message}")]
pub struct KelpError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

impl KelpError {
    /// Create a new error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Add a suggestion to the error
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Print the error and its suggestions to stderr
    pub fn display(&self) {
        tracing::debug!(kind = ?self.kind, "command failed");
        eprintln!("{}", self.message.red());

        if !self.suggestions.is_empty() {
            eprintln!();
            eprintln!("{}", "Suggestions:".yellow().bold());
            for suggestion in &self.suggestions {
                eprintln!("  {} {}", "→".blue(), suggestion);
            }
        }
    }

    // Common error patterns

    /// kubectl could not be spawned or exited non-zero
    pub fn kubectl_failed(err: impl Display) -> Self {
        Self::new(ErrorKind::Kubectl, format!("Error running kubectl: {:#}", err))
    }

    /// kubectl is not on PATH
    pub fn kubectl_not_found(install_hint: &str) -> Self {
        Self::new(
            ErrorKind::Kubectl,
            "Error running kubectl: executable not found in PATH",
        )
        .suggest(install_hint.to_string())
        .suggest("Ensure the tool is in your PATH")
    }

    /// Output could not be parsed as a single YAML document
    pub fn yaml_parse(err: impl Display) -> Self {
        Self::new(
            ErrorKind::YamlParse,
            format!("Error unmarshaling yaml: {}", err),
        )
    }

    /// A document could not be serialized back to YAML
    pub fn yaml_marshal(err: impl Display) -> Self {
        Self::new(
            ErrorKind::YamlMarshal,
            format!("Error marshaling yaml: {}", err),
        )
    }

    /// One Secret data key could not be decoded; siblings are unaffected
    pub fn base64_decode(err: &DecodeError) -> Self {
        Self::new(ErrorKind::Base64Decode, err.to_string())
    }

    /// Writing to stdout failed
    pub fn output(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Output, format!("Error writing output: {}", err))
    }

    /// Kubeconfig could not be read or resolved
    pub fn kubeconfig_build(err: impl Display) -> Self {
        Self::new(
            ErrorKind::KubeconfigBuild,
            format!("Error building kubeconfig: {:#}", err),
        )
        .suggest("Use --kubeconfig to point at a readable kubeconfig file")
        .suggest("Check that the current context exists in the kubeconfig")
    }

    /// API client could not be constructed from a valid config
    pub fn client_create(err: impl Display) -> Self {
        Self::new(
            ErrorKind::ClientCreate,
            format!("Error creating Kubernetes client: {:#}", err),
        )
    }

    /// The pod list request failed
    pub fn list_pods(namespace: &str, err: impl Display) -> Self {
        Self::new(ErrorKind::ListPods, format!("Error listing pods: {:#}", err))
            .suggest(format!(
                "Verify the namespace exists: kubectl get namespace {}",
                namespace
            ))
            .suggest("Verify you are allowed to list pods in that namespace")
    }
}

/// Base64 decoding failed for one key of a Secret's data
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Error decoding base64 value for key {key}: {source}")]
    Base64 {
        key: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Error decoding base64 value for key {key}: decoded bytes are not valid UTF-8")]
    NotUtf8 { key: String },
}

impl DecodeError {
    /// The data key that failed to decode
    pub fn key(&self) -> &str {
        match self {
            DecodeError::Base64 { key, .. } | DecodeError::NotUtf8 { key } => key,
        }
    }
}
