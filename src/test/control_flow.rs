use crate::{BufferWriter, Cpu, NullReader};

const LDI: u8 = 0x82;
const JMP: u8 = 0x54;
const JEQ: u8 = 0x55;
const CMP: u8 = 0xA7;
const PRN: u8 = 0x47;
const HLT: u8 = 0x01;

#[test]
fn jmp_skips_the_following_instruction() {
    let cpu = super::run(&[
        LDI, 0, 5, // R0 = 5
        LDI, 1, 11, // R1 = address of the PRN below
        JMP, 1, // jump to R1, skipping the next LDI
        LDI, 0, 99, // skipped
        PRN, 0, // prints R0
        HLT,
    ]);
    assert_eq!(cpu.writer().as_slice(), b"5");
}

#[test]
fn jeq_taken_when_flags_equal() {
    let cpu = super::run(&[
        LDI, 0, 5, // R0 = 5
        LDI, 1, 5, // R1 = 5
        CMP, 0, 1,
        LDI, 2, 17, // R2 = address of the PRN below
        JEQ, 2,
        LDI, 3, 1, // skipped
        PRN, 3,
        HLT,
    ]);
    assert_eq!(cpu.writer().as_slice(), b"0");
}

#[test]
fn jeq_not_taken_when_flags_differ() {
    let cpu = super::run(&[
        LDI, 0, 5, // R0 = 5
        LDI, 1, 6, // R1 = 6
        CMP, 0, 1,
        LDI, 2, 17,
        JEQ, 2,
        LDI, 3, 1, // not skipped
        PRN, 3,
        HLT,
    ]);
    assert_eq!(cpu.writer().as_slice(), b"1");
}

#[test]
fn program_counter_wraps_past_the_end_of_memory() {
    let mut cpu = Cpu::new(NullReader, BufferWriter::new());
    let mut program = [0u8; 256];
    program[0] = LDI;
    program[1] = 0;
    program[2] = 255;
    program[3] = JMP;
    program[4] = 0;
    program[255] = 0x00; // NOP

    cpu.load(&program).unwrap();
    cpu.step().unwrap(); // LDI R0, 255
    cpu.step().unwrap(); // JMP R0
    assert_eq!(cpu.program_counter(), 255);
    cpu.step().unwrap(); // NOP at 255, advances past the end of memory
    assert_eq!(cpu.program_counter(), 0);
}
