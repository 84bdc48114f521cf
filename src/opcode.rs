use crate::constants;
use num_derive::{FromPrimitive, ToPrimitive};
use util::InteropGetName;
use util_derive::{EnumFromStr, InteropGetName};

/// The closed LS-8 instruction set. Each variant's discriminant IS its opcode byte —
/// `00000000` through `10101101` in the table below — so operand count and the
/// "sets program counter" bit can be read straight off `self as u8` without a
/// second lookup table.
///
/// Opcode bits: `CC A T IIII` — `CC` operand count, `A` ALU flag (informational),
/// `T` "sets pc" flag.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, EnumFromStr)]
pub enum Opcode {
    NOP = 0b0000_0000,
    HLT = 0b0000_0001,
    /// Pops the interrupt-saved state and resumes normal execution.
    RET = 0b0001_0001,
    IRET = 0b0001_0011,
    PUSH = 0b0100_0101,
    POP = 0b0100_0110,
    /// Writes the decimal representation of the operand register to the host writer.
    PRN = 0b0100_0111,
    /// Writes the raw byte value of the operand register to the host writer.
    PRA = 0b0100_1000,
    CALL = 0b0101_0000,
    /// Raises interrupt `register & 0b111`.
    INT = 0b0101_0010,
    JMP = 0b0101_0100,
    JEQ = 0b0101_0101,
    JNE = 0b0101_0110,
    JGT = 0b0101_0111,
    JLT = 0b0101_1000,
    JLE = 0b0101_1001,
    JGE = 0b0101_1010,
    INC = 0b0110_0101,
    DEC = 0b0110_0110,
    NOT = 0b0110_1001,
    LDI = 0b1000_0010,
    LD = 0b1000_0011,
    ST = 0b1000_0100,
    ADD = 0b1010_0000,
    SUB = 0b1010_0001,
    MUL = 0b1010_0010,
    DIV = 0b1010_0011,
    MOD = 0b1010_0100,
    CMP = 0b1010_0111,
    AND = 0b1010_1000,
    OR = 0b1010_1010,
    XOR = 0b1010_1011,
    SHL = 0b1010_1100,
    SHR = 0b1010_1101,
}

impl Opcode {
    /// Number of operand bytes this instruction consumes, derived from bits 7-6.
    pub fn operand_count(self) -> u8 {
        ((self as u8) & constants::OPERAND_COUNT_MASK) >> constants::OPERAND_COUNT_OFFSET
    }

    /// Whether this instruction is responsible for updating the program counter itself.
    pub fn sets_pc(self) -> bool {
        ((self as u8) & constants::SETS_PC_MASK) != 0
    }

    /// The informational ALU bit. No behavioural impact; carried for fidelity with the table.
    pub fn alu_flag(self) -> bool {
        ((self as u8) & constants::ALU_FLAG_MASK) != 0
    }

    /// The fixed operand-kind slots this instruction declares, in order.
    pub fn operand_kinds(self) -> &'static [OperandKind] {
        use OperandKind::{Immediate, Register};
        match self {
            Opcode::NOP | Opcode::HLT | Opcode::RET | Opcode::IRET => &[],

            Opcode::PUSH
            | Opcode::POP
            | Opcode::PRN
            | Opcode::PRA
            | Opcode::CALL
            | Opcode::INT
            | Opcode::JMP
            | Opcode::JEQ
            | Opcode::JNE
            | Opcode::JGT
            | Opcode::JLT
            | Opcode::JLE
            | Opcode::JGE
            | Opcode::INC
            | Opcode::DEC
            | Opcode::NOT => &[Register],

            Opcode::LDI => &[Register, Immediate],

            Opcode::LD
            | Opcode::ST
            | Opcode::ADD
            | Opcode::SUB
            | Opcode::MUL
            | Opcode::DIV
            | Opcode::MOD
            | Opcode::CMP
            | Opcode::AND
            | Opcode::OR
            | Opcode::XOR
            | Opcode::SHL
            | Opcode::SHR => &[Register, Register],
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

// `util-derive`'s `InteropGetName` indexes a names table with `self as usize`, which only
// works for dense discriminants starting at 0. `Opcode`'s discriminants are the sparse
// opcode byte values above, so the name table is looked up by pattern instead.
impl InteropGetName for Opcode {
    fn interop_name(&self) -> &'static [u8] {
        macro_rules! name {
            ($variant:ident) => {
                concat!(stringify!($variant), "\0").as_bytes()
            };
        }
        match self {
            Opcode::NOP => name!(NOP),
            Opcode::HLT => name!(HLT),
            Opcode::RET => name!(RET),
            Opcode::IRET => name!(IRET),
            Opcode::PUSH => name!(PUSH),
            Opcode::POP => name!(POP),
            Opcode::PRN => name!(PRN),
            Opcode::PRA => name!(PRA),
            Opcode::CALL => name!(CALL),
            Opcode::INT => name!(INT),
            Opcode::JMP => name!(JMP),
            Opcode::JEQ => name!(JEQ),
            Opcode::JNE => name!(JNE),
            Opcode::JGT => name!(JGT),
            Opcode::JLT => name!(JLT),
            Opcode::JLE => name!(JLE),
            Opcode::JGE => name!(JGE),
            Opcode::INC => name!(INC),
            Opcode::DEC => name!(DEC),
            Opcode::NOT => name!(NOT),
            Opcode::LDI => name!(LDI),
            Opcode::LD => name!(LD),
            Opcode::ST => name!(ST),
            Opcode::ADD => name!(ADD),
            Opcode::SUB => name!(SUB),
            Opcode::MUL => name!(MUL),
            Opcode::DIV => name!(DIV),
            Opcode::MOD => name!(MOD),
            Opcode::CMP => name!(CMP),
            Opcode::AND => name!(AND),
            Opcode::OR => name!(OR),
            Opcode::XOR => name!(XOR),
            Opcode::SHL => name!(SHL),
            Opcode::SHR => name!(SHR),
        }
    }
}

/// The fixed operand kind a mnemonic's operand slot accepts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperandKind {
    Register,
    Immediate,
}

/// The eight general-purpose registers. R5/R6/R7 double as the Interrupt Mask, Interrupt
/// Status, and Stack Pointer by convention only.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive, InteropGetName, EnumFromStr,
)]
pub enum RegisterId {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl std::fmt::Display for RegisterId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl RegisterId {
    pub fn index(self) -> usize {
        self as usize
    }
}
