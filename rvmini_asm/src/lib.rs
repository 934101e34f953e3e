mod error;
pub use error::AsmError;

pub mod bits;

mod isa;
pub use isa::{InsnCodes, Layout, Mnemonic, OpcodeClass, PseudoMnemonic};

mod inst;
pub use inst::{Instruction, Operands};

mod parse;
pub use parse::{parse_line, strip_comment};

mod encode;
pub use encode::{WORD_BITS, encode};

mod pseudo;
pub use pseudo::{Expansion, expand};

mod word;
pub use word::Word;

mod pipeline;
pub use pipeline::{LineOutcome, Listing, ListingLine, assemble_line, assemble_source};

#[cfg(test)]
mod test;
