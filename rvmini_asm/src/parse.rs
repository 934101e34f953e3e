//! Recognizer for one line of assembly text.
//!
//! Operand syntax per operation:
//!
//! | operation | syntax              |
//! |-----------|---------------------|
//! | `lh`      | `lh rd, imm(rs1)`   |
//! | `sh`      | `sh rs2, imm(rs1)`  |
//! | `add`     | `add rd, rs1, rs2`  |
//! | `or`      | `or rd, rs1, rs2`   |
//! | `andi`    | `andi rd, rs1, imm` |
//! | `sll`     | `sll rd, rs1, rs2`  |
//! | `bne`     | `bne rs1, rs2, imm` |
//!
//! Registers are written `x<N>`. Immediates are decimal, `0x` hex or `0b`
//! binary, optionally negative.

use itertools::Itertools;

use crate::{AsmError, Instruction, Mnemonic, Operands};

const COMMENT: char = '#';

/// Remove a trailing comment and surrounding whitespace.
pub fn strip_comment(line: &str) -> &str {
    match line.split_once(COMMENT) {
        Some((code, _)) => code.trim(),
        None => line.trim(),
    }
}

/// Split a line into its first token and the operand text after it.
pub(crate) fn split_mnemonic(line: &str) -> Option<(&str, &str)> {
    let line = strip_comment(line);
    if line.is_empty() {
        return None;
    }
    Some(match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    })
}

/// Recognize one source line.
///
/// Blank and comment-only lines give `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, AsmError> {
    let Some((head, rest)) = split_mnemonic(line) else {
        return Ok(None);
    };
    let mnemonic: Mnemonic = head
        .parse()
        .map_err(|_| AsmError::UnrecognizedMnemonic {
            mnemonic: head.to_string(),
        })?;
    let operands = parse_operands(mnemonic, rest)?;
    Ok(Some(Instruction::new(mnemonic, operands)))
}

fn parse_operands(mnemonic: Mnemonic, text: &str) -> Result<Operands, AsmError> {
    use Mnemonic::*;
    let m = mnemonic.as_ref();
    let args = split_operands(m, text)?;
    let operands = match (mnemonic, args.as_slice()) {
        (LH, &[rd, mem]) => {
            let (imm, rs1) = parse_memory(m, mem)?;
            Operands {
                rd: parse_register(m, rd)?,
                rs1,
                imm,
                ..Default::default()
            }
        }
        (SH, &[rs2, mem]) => {
            let (imm, rs1) = parse_memory(m, mem)?;
            Operands {
                rs2: parse_register(m, rs2)?,
                rs1,
                imm,
                ..Default::default()
            }
        }
        // the third operand of `sll` is a register, not a shift amount
        (ADD | OR | SLL, &[rd, rs1, rs2]) => Operands {
            rd: parse_register(m, rd)?,
            rs1: parse_register(m, rs1)?,
            rs2: parse_register(m, rs2)?,
            ..Default::default()
        },
        (ANDI, &[rd, rs1, imm]) => Operands {
            rd: parse_register(m, rd)?,
            rs1: parse_register(m, rs1)?,
            imm: parse_immediate(m, imm)?,
            ..Default::default()
        },
        (BNE, &[rs1, rs2, imm]) => Operands {
            rs1: parse_register(m, rs1)?,
            rs2: parse_register(m, rs2)?,
            imm: parse_immediate(m, imm)?,
            ..Default::default()
        },
        (_, args) => {
            return Err(AsmError::malformed(
                m,
                format!(
                    "expected {} operands, found {}",
                    operand_count(mnemonic),
                    args.len()
                ),
            ));
        }
    };
    Ok(operands)
}

fn operand_count(mnemonic: Mnemonic) -> usize {
    match mnemonic {
        Mnemonic::LH | Mnemonic::SH => 2,
        _ => 3,
    }
}

/// Comma-separated operands, trimmed. Empty entries are an error.
pub(crate) fn split_operands<'a>(mnemonic: &str, text: &'a str) -> Result<Vec<&'a str>, AsmError> {
    if text.is_empty() {
        return Ok(vec![]);
    }
    let args = text.split(',').map(str::trim).collect_vec();
    if args.iter().any(|arg| arg.is_empty()) {
        return Err(AsmError::malformed(mnemonic, format!("empty operand in `{text}`")));
    }
    Ok(args)
}

/// `x<N>` with a decimal index. The index is not range checked.
pub(crate) fn parse_register(mnemonic: &str, text: &str) -> Result<u32, AsmError> {
    let digits = text.strip_prefix(['x', 'X']).unwrap_or_default();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AsmError::malformed(
            mnemonic,
            format!("`{text}` is not a register"),
        ));
    }
    digits.parse().map_err(|_| {
        AsmError::malformed(mnemonic, format!("register index `{digits}` is too large"))
    })
}

/// Signed immediate. Values wider than 32 bits keep their low bits, like
/// every other field.
pub(crate) fn parse_immediate(mnemonic: &str, text: &str) -> Result<i32, AsmError> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        (16, hex)
    } else if let Some(bin) = magnitude
        .strip_prefix("0b")
        .or_else(|| magnitude.strip_prefix("0B"))
    {
        (2, bin)
    } else {
        (10, magnitude)
    };
    // from_str_radix would accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(AsmError::malformed(
            mnemonic,
            format!("`{text}` is not an immediate"),
        ));
    }
    let value = i64::from_str_radix(digits, radix)
        .map_err(|e| AsmError::malformed(mnemonic, format!("`{text}` is not an immediate: {e}")))?;
    let value = if negative { -value } else { value };
    Ok(value as i32)
}

/// `imm(xN)`; the offset defaults to zero when omitted.
fn parse_memory(mnemonic: &str, text: &str) -> Result<(i32, u32), AsmError> {
    let malformed = || AsmError::malformed(mnemonic, format!("`{text}` is not of the form imm(xN)"));
    let (offset, base) = text.split_once('(').ok_or_else(malformed)?;
    let base = base.strip_suffix(')').ok_or_else(malformed)?;
    let offset = offset.trim();
    let imm = if offset.is_empty() {
        0
    } else {
        parse_immediate(mnemonic, offset)?
    };
    Ok((imm, parse_register(mnemonic, base.trim())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpcodeClass;

    fn parse(line: &str) -> Instruction {
        parse_line(line).unwrap().unwrap()
    }

    #[test]
    fn test_parse_load() {
        let insn = parse("lh x1, 4(x2)");
        assert_eq!(insn.class(), OpcodeClass::Load);
        assert_eq!((insn.rd(), insn.rs1(), insn.imm()), (1, 2, 4));
        assert_eq!(insn.func(), 2);
    }

    #[test]
    fn test_parse_store() {
        let insn = parse("  sh x5, -8( x3 )  ");
        assert_eq!((insn.rs2(), insn.rs1(), insn.imm(), insn.rd()), (5, 3, -8, 0));
        let insn = parse("sh x5, (x3)");
        assert_eq!(insn.imm(), 0);
    }

    #[test]
    fn test_parse_register_ops() {
        for (line, func) in [("add x1, x2, x3", 0), ("or x1,x2,x3", 6), ("SLL x1, x2, x3", 1)] {
            let insn = parse(line);
            assert_eq!(insn.class(), OpcodeClass::ArithReg);
            assert_eq!((insn.rd(), insn.rs1(), insn.rs2()), (1, 2, 3));
            assert_eq!(insn.func(), func);
        }
    }

    #[test]
    fn test_parse_immediates() {
        assert_eq!(parse("andi x5, x6, 10").imm(), 10);
        assert_eq!(parse("andi x5, x6, 0xff").imm(), 255);
        assert_eq!(parse("andi x5, x6, -0b11").imm(), -3);
        assert_eq!(parse("bne x1, x0, -12").imm(), -12);
        assert_eq!(parse("andi x5, x6, 0x1_0000_0001".replace('_', "").as_str()).imm(), 1);
    }

    #[test]
    fn test_exact_mnemonic_match() {
        assert!(matches!(
            parse_line("addi x1, x0, 5"),
            Err(AsmError::UnrecognizedMnemonic { mnemonic }) if mnemonic == "addi"
        ));
        assert!(matches!(
            parse_line("nop"),
            Err(AsmError::UnrecognizedMnemonic { .. })
        ));
        // `andi` used to be shadowed by `add` under substring matching
        assert_eq!(parse("andi x1, x2, 3").mnemonic(), Mnemonic::ANDI);
    }

    #[test]
    fn test_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   # only a comment"), Ok(None));
        assert_eq!(parse("add x1, x2, x3 # sum").rs2(), 3);
    }

    #[test]
    fn test_malformed_operands() {
        for line in [
            "add x1, x2",
            "add x1, x2, 3",
            "add x1, , x3",
            "lh x1, 4",
            "lh x1, 4(x2",
            "lh r1, 4(x2)",
            "andi x1, x2, ten",
            "andi x1, x2, --1",
            "bne x1, x2, x3",
            "add x1, x2, x99999999999",
            "sll",
        ] {
            assert!(
                matches!(parse_line(line), Err(AsmError::MalformedOperands { .. })),
                "{line} should be rejected"
            );
        }
    }
}
