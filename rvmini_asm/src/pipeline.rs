use rayon::prelude::*;
use tracing::debug;

use crate::{AsmError, Expansion, Instruction, encode, expand, parse_line};

/// What became of one source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Encoded {
        instruction: Instruction,
        binary: String,
    },
    /// A pseudo-instruction, reported in its canonical form.
    Expanded(Expansion),
    Skipped(AsmError),
    /// Empty or comment-only.
    Blank,
}

#[derive(Clone, Debug)]
pub struct ListingLine {
    /// 1-based line number in the source.
    pub line_no: usize,
    pub source: String,
    pub outcome: LineOutcome,
}

/// Per-line results for a whole source text, in source order.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    pub lines: Vec<ListingLine>,
}

impl Listing {
    /// Encoded words only, in source order.
    pub fn binaries(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Encoded { binary, .. } => Some(binary.as_str()),
            _ => None,
        })
    }

    pub fn expansions(&self) -> impl Iterator<Item = (usize, &Expansion)> + '_ {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Expanded(expansion) => Some((line.line_no, expansion)),
            _ => None,
        })
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (usize, &AsmError)> + '_ {
        self.lines.iter().filter_map(|line| match &line.outcome {
            LineOutcome::Skipped(e) => Some((line.line_no, e)),
            _ => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics().next().is_some()
    }
}

/// Run one line through the expander, recognizer and encoder.
pub fn assemble_line(line: &str) -> LineOutcome {
    match expand(line) {
        Ok(Some(expansion)) => return LineOutcome::Expanded(expansion),
        Ok(None) => {}
        Err(e) => return LineOutcome::Skipped(e),
    }
    let instruction = match parse_line(line) {
        Ok(Some(instruction)) => instruction,
        Ok(None) => return LineOutcome::Blank,
        Err(e) => return LineOutcome::Skipped(e),
    };
    match encode(&instruction) {
        Ok(binary) => LineOutcome::Encoded {
            instruction,
            binary,
        },
        Err(e) => LineOutcome::Skipped(e),
    }
}

/// Assemble every line of `source`. Lines share no state, so they are
/// processed in parallel and collected back in order.
pub fn assemble_source(source: &str) -> Listing {
    let lines: Vec<&str> = source.lines().collect();
    let lines = lines
        .into_par_iter()
        .enumerate()
        .map(|(i, text)| ListingLine {
            line_no: i + 1,
            source: text.to_string(),
            outcome: assemble_line(text),
        })
        .collect::<Vec<_>>();

    // skipped lines are reported by the caller, once
    for line in &lines {
        if let LineOutcome::Encoded { instruction, binary } = &line.outcome {
            debug!(line = line.line_no, %instruction, %binary, "encoded");
        }
    }
    Listing { lines }
}
