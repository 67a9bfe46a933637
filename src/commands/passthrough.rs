//! Forward arguments to kubectl and filter what it prints

use crate::filter::{self, OutputMode};
use crate::k8s::kubectl;
use crate::utils::KelpError;
use crate::utils::prereqs;
use std::io::{self, Write};

/// Run kubectl with `args` and print its (possibly filtered) stdout
pub fn run(args: &[String]) -> Result<(), KelpError> {
    prereqs::kubectl_on_path().map_err(|hint| KelpError::kubectl_not_found(&hint))?;

    let captured = kubectl::run_kubectl_capture(args).map_err(KelpError::kubectl_failed)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_filtered(args, &captured, &mut out)
}

/// Filter captured kubectl stdout and write the result to `out`
///
/// Per-key Secret decode failures are reported on stderr and do not abort.
pub fn print_filtered<W: Write>(
    args: &[String],
    captured: &[u8],
    out: &mut W,
) -> Result<(), KelpError> {
    let mode = OutputMode::detect(args, captured);
    crate::log_info!("Output mode: {:?}", mode);

    let filtered = filter::apply(mode, captured)?;
    for failure in &filtered.failures {
        KelpError::base64_decode(failure).display();
    }

    out.write_all(&filtered.body).map_err(KelpError::output)?;
    out.flush().map_err(KelpError::output)
}
