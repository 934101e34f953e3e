use std::collections::TryReserveError;
use thiserror::Error;

/// Per-line assembler failure. None of these abort a run.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AsmError {
    #[error("unsupported or unimplemented instruction: `{mnemonic}`")]
    UnrecognizedMnemonic { mnemonic: String },

    #[error("malformed operands for `{mnemonic}`: {reason}")]
    MalformedOperands { mnemonic: String, reason: String },

    #[error("could not allocate the instruction buffer: {0}")]
    Allocation(TryReserveError),

    #[error("invalid binary word: {reason}")]
    InvalidWord { reason: String },

    #[error("no supported instruction has opcode {opcode:07b} and func {func}")]
    UnknownEncoding { opcode: u32, func: u32 },
}

impl AsmError {
    pub(crate) fn malformed(mnemonic: impl ToString, reason: impl Into<String>) -> Self {
        AsmError::MalformedOperands {
            mnemonic: mnemonic.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<TryReserveError> for AsmError {
    fn from(e: TryReserveError) -> Self {
        AsmError::Allocation(e)
    }
}
