use std::fmt;

use crate::{
    AsmError, PseudoMnemonic,
    parse::{parse_immediate, parse_register, split_mnemonic, split_operands},
};

/// A pseudo-instruction and the real instruction text it stands for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expansion {
    pub pseudo: PseudoMnemonic,
    /// Canonical instruction text, e.g. `addi x1, x0, 5`.
    pub canonical: String,
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

/// Rewrite a pseudo-instruction line.
///
/// Returns `Ok(None)` when the first token is not a pseudo mnemonic. The
/// expansion is only reported; it is not encoded, since `addi` lies outside
/// the supported subset.
pub fn expand(line: &str) -> Result<Option<Expansion>, AsmError> {
    let Some((head, rest)) = split_mnemonic(line) else {
        return Ok(None);
    };
    let Ok(pseudo) = head.parse::<PseudoMnemonic>() else {
        return Ok(None);
    };
    let m = pseudo.as_ref();
    let canonical = match (pseudo, split_operands(m, rest)?.as_slice()) {
        (PseudoMnemonic::Li, &[rd, imm]) => {
            let rd = parse_register(m, rd)?;
            let imm = parse_immediate(m, imm)?;
            format!("addi x{rd}, x0, {imm}")
        }
        (PseudoMnemonic::Li, args) => {
            return Err(AsmError::malformed(
                m,
                format!("expected 2 operands, found {}", args.len()),
            ));
        }
    };
    Ok(Some(Expansion { pseudo, canonical }))
}
