use std::fmt;

use crate::isa::{Mnemonic, OpcodeClass};

/// Operand values bound from source text. Fields an operation does not use stay zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    pub rd: u32,
    pub rs1: u32,
    pub rs2: u32,
    pub imm: i32,
}

/// One recognized instruction, ready for encoding.
///
/// The opcode class and function-select field always come from the operation
/// table, so a record can not exist without a class. Register indices and the
/// immediate are stored as written; the encoder truncates them to field width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    mnemonic: Mnemonic,
    class: OpcodeClass,
    rs1: u32,
    rs2: u32,
    rd: u32,
    imm: i32,
    func: u32,
}

impl Instruction {
    pub fn new(mnemonic: Mnemonic, operands: Operands) -> Self {
        let codes = mnemonic.codes();
        Instruction {
            mnemonic,
            class: codes.class,
            rs1: operands.rs1,
            rs2: operands.rs2,
            rd: operands.rd,
            imm: operands.imm,
            func: codes.func,
        }
    }

    pub fn mnemonic(&self) -> Mnemonic {
        self.mnemonic
    }

    pub fn class(&self) -> OpcodeClass {
        self.class
    }

    /// First source register.
    pub fn rs1(&self) -> u32 {
        self.rs1
    }

    /// Second source register. Zero for loads and immediate arithmetic.
    pub fn rs2(&self) -> u32 {
        self.rs2
    }

    /// Destination register. Zero for stores and branches.
    pub fn rd(&self) -> u32 {
        self.rd
    }

    pub fn imm(&self) -> i32 {
        self.imm
    }

    pub fn func(&self) -> u32 {
        self.func
    }

    pub fn operands(&self) -> Operands {
        Operands {
            rd: self.rd,
            rs1: self.rs1,
            rs2: self.rs2,
            imm: self.imm,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic;
        match m {
            Mnemonic::LH => write!(f, "{m} x{}, {}(x{})", self.rd, self.imm, self.rs1),
            Mnemonic::SH => write!(f, "{m} x{}, {}(x{})", self.rs2, self.imm, self.rs1),
            Mnemonic::ADD | Mnemonic::OR | Mnemonic::SLL => {
                write!(f, "{m} x{}, x{}, x{}", self.rd, self.rs1, self.rs2)
            }
            Mnemonic::ANDI => write!(f, "{m} x{}, x{}, {}", self.rd, self.rs1, self.imm),
            Mnemonic::BNE => write!(f, "{m} x{}, x{}, {}", self.rs1, self.rs2, self.imm),
        }
    }
}
