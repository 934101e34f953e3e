use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Supported operations. Parsing is an exact, case-insensitive match on the
/// whole mnemonic, so `addi` is never taken for `add`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Mnemonic {
    LH,
    SH,
    ADD,
    OR,
    ANDI,
    SLL,
    BNE,
}
use Mnemonic::*;

/// Convenience forms rewritten into a real instruction before encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PseudoMnemonic {
    /// `li rd, imm`
    Li,
}

/// Instruction family. Selects both the opcode and the binary layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum OpcodeClass {
    Load,
    Store,
    ArithImm,
    ArithReg,
    Branch,
}

/// Field order of an encoded word, most-significant field first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// `[opcode:7][rs1:5][func:3][rd:5][imm:12]`
    Immediate,
    /// `[opcode:7][rs1:5][rs2:5][func:3][rd:5][zero:7]`
    Register,
    /// `[opcode:7][rs1:5][rs2:5][func:3][imm:12]`
    Branch,
}

impl OpcodeClass {
    pub const fn opcode(self) -> u32 {
        match self {
            OpcodeClass::Load => 0b0000011,
            OpcodeClass::Store => 0b0100011,
            OpcodeClass::ArithImm => 0b0010011,
            OpcodeClass::ArithReg => 0b0110011,
            OpcodeClass::Branch => 0b1100011,
        }
    }

    /// The opcode as fixed binary text, leading field of every word.
    pub const fn opcode_bits(self) -> &'static str {
        match self {
            OpcodeClass::Load => "0000011",
            OpcodeClass::Store => "0100011",
            OpcodeClass::ArithImm => "0010011",
            OpcodeClass::ArithReg => "0110011",
            OpcodeClass::Branch => "1100011",
        }
    }

    pub const fn layout(self) -> Layout {
        match self {
            OpcodeClass::Load | OpcodeClass::Store | OpcodeClass::ArithImm => Layout::Immediate,
            OpcodeClass::ArithReg => Layout::Register,
            OpcodeClass::Branch => Layout::Branch,
        }
    }

    pub fn from_opcode(opcode: u32) -> Option<Self> {
        use strum::IntoEnumIterator;
        OpcodeClass::iter().find(|class| class.opcode() == opcode)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InsnCodes {
    pub mnemonic: Mnemonic,
    pub class: OpcodeClass,
    pub func: u32,
}

impl Mnemonic {
    pub const fn codes(self) -> InsnCodes {
        SUBSET_ISA[self as usize]
    }

    /// Inverse of [`Mnemonic::codes`].
    pub fn from_codes(class: OpcodeClass, func: u32) -> Option<Mnemonic> {
        SUBSET_ISA
            .iter()
            .find(|codes| codes.class == class && codes.func == func)
            .map(|codes| codes.mnemonic)
    }
}

const fn insn(mnemonic: Mnemonic, class: OpcodeClass, func: u32) -> InsnCodes {
    InsnCodes {
        mnemonic,
        class,
        func,
    }
}

type InstructionTable = [InsnCodes; 7];

// Indexed by `Mnemonic as usize`; keep in declaration order.
const SUBSET_ISA: InstructionTable = [
    insn(LH, OpcodeClass::Load, 0x2),
    insn(SH, OpcodeClass::Store, 0x2),
    insn(ADD, OpcodeClass::ArithReg, 0x0),
    insn(OR, OpcodeClass::ArithReg, 0x6),
    insn(ANDI, OpcodeClass::ArithImm, 0x7),
    insn(SLL, OpcodeClass::ArithReg, 0x1),
    insn(BNE, OpcodeClass::Branch, 0x1),
];
