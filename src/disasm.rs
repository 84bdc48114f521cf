use num::FromPrimitive;

use crate::memory::Memory;
use crate::opcode::{Opcode, OperandKind};

/// Renders the instruction at `address` as one line of mnemonic text, the way a debugging
/// trace would. Not a disassembler for a whole image — just the one instruction a `step()`
/// is about to execute. An unrecognised opcode byte is shown as `???`.
pub fn disassemble(memory: &Memory, address: u8) -> String {
    let byte = memory.read(address);
    let opcode = match Opcode::from_u8(byte) {
        Some(opcode) => opcode,
        None => return format!("??? (0x{:02X})", byte),
    };

    let mut text = opcode.to_string();
    let mut operand_address = address.wrapping_add(1);
    for kind in opcode.operand_kinds() {
        let operand = memory.read(operand_address);
        match kind {
            OperandKind::Register => text.push_str(&format!(" R{}", operand)),
            OperandKind::Immediate => text.push_str(&format!(" {}", operand)),
        }
        operand_address = operand_address.wrapping_add(1);
    }
    text
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disassembles_a_two_operand_instruction() {
        let mut memory = Memory::new();
        memory.load(&[0b1000_0010, 3, 8]).unwrap(); // LDI R3, 8
        assert_eq!(disassemble(&memory, 0), "LDI R3 8");
    }

    #[test]
    fn disassembles_a_zero_operand_instruction() {
        let mut memory = Memory::new();
        memory.load(&[0b0000_0001]).unwrap(); // HLT
        assert_eq!(disassemble(&memory, 0), "HLT");
    }

    #[test]
    fn unrecognised_opcode_is_shown_as_unknown() {
        let mut memory = Memory::new();
        memory.load(&[0xFF]).unwrap();
        assert_eq!(disassemble(&memory, 0), "??? (0xFF)");
    }
}
