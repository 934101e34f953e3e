use crate::{
    AsmError, Instruction, Mnemonic, OpcodeClass, Operands,
    bits::{from_binary, sign_extend},
    encode::WORD_BITS,
    isa::Layout,
};

/// An encoded instruction read back from its binary text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    code: u32,
    class: OpcodeClass,
}

impl Word {
    pub fn from_binary(text: &str) -> Result<Word, AsmError> {
        let text = text.trim();
        if text.len() != WORD_BITS {
            return Err(AsmError::InvalidWord {
                reason: format!("expected {WORD_BITS} binary digits, found {}", text.len()),
            });
        }
        let code = from_binary(text).ok_or_else(|| AsmError::InvalidWord {
            reason: format!("`{text}` contains characters other than 0 and 1"),
        })?;
        let opcode = (code >> 25) & MASK_7;
        let class = OpcodeClass::from_opcode(opcode).ok_or_else(|| AsmError::InvalidWord {
            reason: format!("unknown opcode {opcode:07b}"),
        })?;
        Ok(Word { code, class })
    }

    pub fn encoded(&self) -> u32 {
        self.code
    }

    /// Leading 7 bits. Also defines the layout of the rest of the word.
    pub fn opcode(&self) -> u32 {
        (self.code >> 25) & MASK_7
    }

    pub fn class(&self) -> OpcodeClass {
        self.class
    }

    pub fn layout(&self) -> Layout {
        self.class.layout()
    }

    /// Source register 1, in every layout.
    pub fn rs1(&self) -> u32 {
        (self.code >> 20) & MASK_5
    }

    /// Source register 2 in the register and branch layouts.
    pub fn rs2(&self) -> u32 {
        match self.layout() {
            Layout::Immediate => 0,
            Layout::Register | Layout::Branch => (self.code >> 15) & MASK_5,
        }
    }

    /// Destination register in the immediate and register layouts.
    pub fn rd(&self) -> u32 {
        match self.layout() {
            Layout::Immediate => (self.code >> 12) & MASK_5,
            Layout::Register => (self.code >> 7) & MASK_5,
            Layout::Branch => 0,
        }
    }

    pub fn func(&self) -> u32 {
        match self.layout() {
            Layout::Immediate => (self.code >> 17) & MASK_3,
            Layout::Register | Layout::Branch => (self.code >> 12) & MASK_3,
        }
    }

    /// Sign-extended 12-bit immediate in the immediate and branch layouts.
    pub fn imm(&self) -> i32 {
        match self.layout() {
            Layout::Immediate | Layout::Branch => sign_extend(self.code & MASK_12, 12),
            Layout::Register => 0,
        }
    }

    /// Rebuild the instruction record. Stores come back with `rs2 = 0`
    /// because their layout has no slot for it.
    pub fn disassemble(&self) -> Result<Instruction, AsmError> {
        let mnemonic =
            Mnemonic::from_codes(self.class, self.func()).ok_or(AsmError::UnknownEncoding {
                opcode: self.opcode(),
                func: self.func(),
            })?;
        if self.layout() == Layout::Register && self.code & MASK_7 != 0 {
            return Err(AsmError::InvalidWord {
                reason: format!("trailing field {:07b} must be zero", self.code & MASK_7),
            });
        }
        Ok(Instruction::new(
            mnemonic,
            Operands {
                rd: self.rd(),
                rs1: self.rs1(),
                rs2: self.rs2(),
                imm: self.imm(),
            },
        ))
    }
}

const MASK_3: u32 = 0b111;
const MASK_5: u32 = 0b11111;
const MASK_7: u32 = 0b1111111;
const MASK_12: u32 = 0xFFF;
