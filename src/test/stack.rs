use crate::{BufferWriter, Cpu, NullReader};

const LDI: u8 = 0x82;
const PUSH: u8 = 0x45;
const POP: u8 = 0x46;
const CALL: u8 = 0x50;
const RET: u8 = 0x11;
const PRN: u8 = 0x47;
const HLT: u8 = 0x01;

#[test]
fn push_pop_round_trips_through_the_stack() {
    let cpu = super::run(&[LDI, 0, 42, PUSH, 0, LDI, 0, 0, POP, 0, PRN, 0, HLT]);
    assert_eq!(cpu.writer().as_slice(), b"42");
    assert_eq!(cpu.registers().sp(), 0xF3);
}

#[test]
fn call_and_ret_round_trip() {
    let cpu = super::run(&[
        LDI, 1, 8, // R1 = address of `sub`
        CALL, 1,
        PRN, 0,
        HLT,
        /* sub: */ LDI, 0, 7, RET,
    ]);
    assert_eq!(cpu.writer().as_slice(), b"7");
}

#[test]
fn stack_pointer_starts_at_its_initial_value_and_decrements_on_push() {
    let mut cpu = Cpu::new(NullReader, BufferWriter::new());
    assert_eq!(cpu.registers().sp(), 0xF3);

    cpu.load(&[LDI, 0, 1, PUSH, 0, HLT]).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.registers().sp(), 0xF2);
}
