use crate::{
    AsmError, Instruction,
    bits::write_binary,
    isa::Layout,
};

/// Length of every encoded word, in binary digits.
pub const WORD_BITS: usize = 32;

const REG_BITS: u32 = 5;
const FUNC_BITS: u32 = 3;
const IMM_BITS: u32 = 12;
const ZERO_TAIL: &str = "0000000";

/// Encode `insn` as a 32 character binary string, most-significant field first.
pub fn encode(insn: &Instruction) -> Result<String, AsmError> {
    let mut word = String::new();
    word.try_reserve_exact(WORD_BITS)?;

    word.push_str(insn.class().opcode_bits());
    match insn.class().layout() {
        Layout::Immediate => encode_immediate(&mut word, insn),
        Layout::Register => encode_register(&mut word, insn),
        Layout::Branch => encode_branch(&mut word, insn),
    }
    debug_assert_eq!(word.len(), WORD_BITS);
    Ok(word)
}

fn encode_immediate(word: &mut String, insn: &Instruction) {
    write_binary(word, insn.rs1() as i32, REG_BITS);
    write_binary(word, insn.func() as i32, FUNC_BITS);
    write_binary(word, insn.rd() as i32, REG_BITS);
    write_binary(word, insn.imm(), IMM_BITS);
}

fn encode_register(word: &mut String, insn: &Instruction) {
    write_binary(word, insn.rs1() as i32, REG_BITS);
    write_binary(word, insn.rs2() as i32, REG_BITS);
    write_binary(word, insn.func() as i32, FUNC_BITS);
    write_binary(word, insn.rd() as i32, REG_BITS);
    word.push_str(ZERO_TAIL);
}

fn encode_branch(word: &mut String, insn: &Instruction) {
    write_binary(word, insn.rs1() as i32, REG_BITS);
    write_binary(word, insn.rs2() as i32, REG_BITS);
    write_binary(word, insn.func() as i32, FUNC_BITS);
    write_binary(word, insn.imm(), IMM_BITS);
}
