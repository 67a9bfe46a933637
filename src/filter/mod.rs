//! Post-processing of captured kubectl output

pub mod secret;
pub mod strip;

use crate::utils::{DecodeError, KelpError};
use secret::SecretDocument;
use std::borrow::Cow;

/// Argument text that switches on YAML filtering
pub const YAML_OUTPUT_FLAG: &str = "-o yaml";

/// Output text that selects secret decoding
pub const SECRET_MARKER: &str = "kind: Secret";

/// How captured output is transformed before printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    DecodeSecret,
    StripMetadata,
    Raw,
}

impl OutputMode {
    /// Pick a mode by substring matching on the joined args and the raw output.
    ///
    /// This is textual: `-o=yaml` or `--output yaml` are not recognised, and
    /// `kind: Secret` anywhere in the output selects secret decoding.
    pub fn detect(args: &[String], output: &[u8]) -> Self {
        let joined = args.join(" ");
        if !joined.contains(YAML_OUTPUT_FLAG) {
            return OutputMode::Raw;
        }

        if contains_bytes(output, SECRET_MARKER.as_bytes()) {
            OutputMode::DecodeSecret
        } else {
            OutputMode::StripMetadata
        }
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

/// Result of filtering: what to print plus per-key decode failures
#[derive(Debug)]
pub struct Filtered<'a> {
    pub body: Cow<'a, [u8]>,
    pub failures: Vec<DecodeError>,
}

/// Transform captured output according to `mode`
pub fn apply(mode: OutputMode, output: &[u8]) -> Result<Filtered<'_>, KelpError> {
    let (body, failures) = match mode {
        OutputMode::Raw => {
            return Ok(Filtered {
                body: Cow::Borrowed(output),
                failures: Vec::new(),
            });
        }
        OutputMode::DecodeSecret => decode_secret(as_text(output)?)?,
        OutputMode::StripMetadata => (strip_document(as_text(output)?)?, Vec::new()),
    };

    Ok(Filtered {
        body: Cow::Owned(body.into_bytes()),
        failures,
    })
}

fn as_text(output: &[u8]) -> Result<&str, KelpError> {
    std::str::from_utf8(output).map_err(KelpError::yaml_parse)
}

/// Decode a Secret document's data values and re-serialize it
pub fn decode_secret(yaml: &str) -> Result<(String, Vec<DecodeError>), KelpError> {
    let mut secret = SecretDocument::parse(yaml).map_err(KelpError::yaml_parse)?;
    let failures = secret.decode_data();
    tracing::debug!(
        "decoded {} of {} data keys",
        secret.data.len() - failures.len(),
        secret.data.len()
    );

    let rendered = secret.to_yaml().map_err(KelpError::yaml_marshal)?;
    Ok((rendered, failures))
}

/// Strip noisy metadata from a resource document and re-serialize it
pub fn strip_document(yaml: &str) -> Result<String, KelpError> {
    let mut doc = strip::parse_document(yaml).map_err(KelpError::yaml_parse)?;
    strip::strip_metadata(&mut doc);
    serde_yaml::to_string(&doc).map_err(KelpError::yaml_marshal)
}
