use std::{backtrace::BacktraceStatus, fmt::Display, path::Path};

use anyhow::Context;
use console::style;

/// Read a whole source file. Failing to open the input is fatal for a run;
/// bytes that are not UTF-8 become U+FFFD and only affect their own line.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).context(format!("failed to read {}", path.display()))?;
    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(e) => {
            tracing::info!("{}: not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    Ok(source)
}

/// Cargo-style status line on stderr, e.g. `    Expanded li x1, 5`.
pub fn print_status(status: &str, msg: impl Display) {
    eprintln!("{:>12} {msg}", style(status).green().bold());
}

/// Per-line diagnostic. Never aborts the run.
pub fn print_line_warning(path: &Path, line_no: usize, msg: impl Display) {
    eprintln!(
        "{}{} {}:{line_no}: {msg}",
        style("warning").yellow().bold(),
        style(":").white().bold(),
        path.display(),
    );
}

pub fn print_error(e: anyhow::Error) {
    for e in e.chain().rev() {
        eprintln!("{}{} {}", style("error").red().bold(), style(":").white().bold(), e);
    }
    let bt = e.backtrace();
    if bt.status() == BacktraceStatus::Captured {
        eprintln!("error backtrace:");
        eprintln!("{bt}");
    }
}
