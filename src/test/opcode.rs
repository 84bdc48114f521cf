use num::FromPrimitive;

use crate::Opcode;

#[test]
fn decode_matches_the_opcode_byte_bit_formula() {
    let mut seen = 0;
    for byte in 0u8..=255 {
        let opcode = match Opcode::from_u8(byte) {
            Some(opcode) => opcode,
            None => continue,
        };
        seen += 1;
        assert_eq!(
            opcode.operand_count(),
            (byte >> 6) & 0b11,
            "operand_count() mismatch for {:?} ({:#04x})",
            opcode,
            byte
        );
        assert_eq!(
            opcode.sets_pc(),
            ((byte >> 4) & 1) != 0,
            "sets_pc() mismatch for {:?} ({:#04x})",
            opcode,
            byte
        );
    }
    assert_eq!(seen, 33);
}
