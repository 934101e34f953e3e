use crate::{commands::common_args::*, utils::*};
use anyhow::{Context, bail};
use clap::Parser;
use rvmini_asm::{LineOutcome, Listing, assemble_source};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "assemble", about = "Assemble a source file into binary words")]
pub struct AssembleCmd {
    /// Path to the assembly source
    input: PathBuf,
    /// Also write the binary words to this file, one per line
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Do not print binary words to stdout
    #[arg(short, long)]
    quiet: bool,
    /// Exit with an error if any line could not be assembled
    #[arg(long)]
    deny_errors: bool,
    #[clap(flatten, next_help_heading = "Log Options")]
    log_options: LogOptions,
}

impl AssembleCmd {
    pub fn run(self) -> anyhow::Result<()> {
        self.log_options.try_setup_logger();

        let source = read_source(&self.input)?;
        let listing = assemble_source(&source);
        tracing::info!(
            "{}: {} lines, {} encoded",
            self.input.display(),
            listing.lines.len(),
            listing.binaries().count()
        );

        report(&self.input, &listing);

        if !self.quiet {
            let stdout = io::stdout();
            write_binaries(&listing, stdout.lock()).context("failed to write to stdout")?;
        }
        if let Some(path) = &self.output {
            write_output_file(path, &listing)?;
            print_status("Written", path.display());
        }

        let skipped = listing.diagnostics().count();
        if self.deny_errors && skipped > 0 {
            bail!("{skipped} line(s) could not be assembled");
        }
        Ok(())
    }
}

/// Pseudo expansions and diagnostics go to stderr, in source order.
fn report(path: &Path, listing: &Listing) {
    for line in &listing.lines {
        match &line.outcome {
            LineOutcome::Expanded(expansion) => {
                print_status("Expanded", format_args!("{} => {expansion}", line.source.trim()))
            }
            LineOutcome::Skipped(e) => print_line_warning(path, line.line_no, e),
            LineOutcome::Encoded { .. } | LineOutcome::Blank => {}
        }
    }
}

pub fn write_binaries<W: Write>(listing: &Listing, mut out: W) -> io::Result<()> {
    for binary in listing.binaries() {
        writeln!(out, "{binary}")?;
    }
    out.flush()
}

fn write_output_file(path: &Path, listing: &Listing) -> anyhow::Result<()> {
    let file = File::create(path).context(format!("failed to create {}", path.display()))?;
    write_binaries(listing, BufWriter::new(file))
        .context(format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SOURCE: &str = "lh x1, 4(x2)\nli x3, 1\nnop\nandi x5, x6, 10\n";

    fn path_str(path: &Path) -> &str {
        path.to_str().expect("temp paths are utf-8")
    }

    fn setup() -> anyhow::Result<(TempDir, PathBuf, PathBuf)> {
        let dir = TempDir::new()?;
        let input = dir.path().join("prog.s");
        fs::write(&input, SOURCE)?;
        let output = dir.path().join("prog.bin");
        Ok((dir, input, output))
    }

    #[test]
    fn test_output_file_has_only_binaries() -> anyhow::Result<()> {
        let (_dir, input, output) = setup()?;
        let cmd = AssembleCmd::try_parse_from([
            "assemble",
            path_str(&input),
            "-o",
            path_str(&output),
            "-q",
        ])?;
        cmd.run()?;

        let written = fs::read_to_string(&output)?;
        let expected = [
            "0000011_00010_010_00001_000000000100",
            "0010011_00110_111_00101_000000001010",
        ]
        .map(|w| w.replace('_', "") + "\n")
        .concat();
        assert_eq!(written, expected);
        Ok(())
    }

    #[test]
    fn test_deny_errors() -> anyhow::Result<()> {
        let (_dir, input, _) = setup()?;
        let cmd =
            AssembleCmd::try_parse_from(["assemble", path_str(&input), "-q", "--deny-errors"])?;
        let err = cmd.run().unwrap_err();
        assert!(err.to_string().contains("1 line(s)"));
        Ok(())
    }

    #[test]
    fn test_missing_input_is_fatal() -> anyhow::Result<()> {
        let (dir, _, _) = setup()?;
        let missing = dir.path().join("missing.s");
        let cmd = AssembleCmd::try_parse_from(["assemble", path_str(&missing)])?;
        let err = cmd.run().unwrap_err();
        assert!(err.to_string().contains("failed to read"));
        Ok(())
    }

    #[test]
    fn test_non_utf8_comment_stays_local() -> anyhow::Result<()> {
        let (_dir, input, output) = setup()?;
        fs::write(&input, b"# instru\xe7\xe3o\nadd x1, x2, x3\n")?;
        let cmd = AssembleCmd::try_parse_from([
            "assemble",
            path_str(&input),
            "-o",
            path_str(&output),
            "-q",
            "--deny-errors",
        ])?;
        cmd.run()?;

        let written = fs::read_to_string(&output)?;
        assert_eq!(
            written,
            "0110011_00010_00011_000_00001_0000000".replace('_', "") + "\n"
        );
        Ok(())
    }

    #[test]
    fn test_non_utf8_instruction_is_a_line_diagnostic() -> anyhow::Result<()> {
        let (_dir, input, output) = setup()?;
        fs::write(&input, b"add\xff x1, x2, x3\nor x1, x2, x3\n")?;
        let source = read_source(&input)?;
        let listing = assemble_source(&source);
        assert_eq!(listing.diagnostics().count(), 1);
        assert_eq!(listing.binaries().count(), 1);

        let cmd =
            AssembleCmd::try_parse_from(["assemble", path_str(&input), "-o", path_str(&output), "-q"])?;
        cmd.run()?;
        assert_eq!(fs::read_to_string(&output)?.lines().count(), 1);
        Ok(())
    }

    #[test]
    fn test_write_binaries() -> anyhow::Result<()> {
        let listing = assemble_source("add x1, x2, x3\n\nbne x1, x0, 4");
        let mut out = Vec::new();
        write_binaries(&listing, &mut out)?;
        let text = String::from_utf8(out)?;
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().all(|l| l.len() == 32));
        Ok(())
    }
}
