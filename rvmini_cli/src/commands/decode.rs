use crate::{commands::common_args::*, utils::*};
use clap::Parser;
use rvmini_asm::{AsmError, Instruction, Word, strip_comment};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "decode", about = "Disassemble a file of binary words")]
pub struct DecodeCmd {
    /// Path to a file with one 32-digit binary word per line
    input: PathBuf,
    #[clap(flatten, next_help_heading = "Log Options")]
    log_options: LogOptions,
}

impl DecodeCmd {
    pub fn run(self) -> anyhow::Result<()> {
        self.log_options.try_setup_logger();

        let source = read_source(&self.input)?;
        for (line_no, result) in decode_source(&source) {
            match result {
                Ok(insn) => println!("{insn}"),
                Err(e) => print_line_warning(&self.input, line_no, e),
            }
        }
        Ok(())
    }
}

/// Decode every non-blank line, keeping 1-based line numbers.
pub fn decode_source(source: &str) -> Vec<(usize, Result<Instruction, AsmError>)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = strip_comment(line);
            (!line.is_empty()).then(|| (i + 1, Word::from_binary(line).and_then(|w| w.disassemble())))
        })
        .collect()
}
