use super::run;
use crate::{BufferWriter, Cpu, NullReader, RuntimeError};

const LDI: u8 = 0x82;
const HLT: u8 = 0x01;
const ADD: u8 = 0xA0;
const SUB: u8 = 0xA1;
const MUL: u8 = 0xA2;
const DIV: u8 = 0xA3;
const MOD: u8 = 0xA4;
const CMP: u8 = 0xA7;
const AND: u8 = 0xA8;
const OR: u8 = 0xAA;
const XOR: u8 = 0xAB;
const SHL: u8 = 0xAC;
const SHR: u8 = 0xAD;
const INC: u8 = 0x65;
const DEC: u8 = 0x66;
const NOT: u8 = 0x69;

#[test]
fn add_wraps_on_overflow() {
    let cpu = run(&[LDI, 0, 250, LDI, 1, 10, ADD, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 4);
}

#[test]
fn sub_wraps_on_underflow() {
    let cpu = run(&[LDI, 0, 3, LDI, 1, 5, SUB, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 254);
}

#[test]
fn mul_wraps() {
    let cpu = run(&[LDI, 0, 100, LDI, 1, 3, MUL, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 44);
}

#[test]
fn div_and_mod() {
    let cpu = run(&[LDI, 0, 17, LDI, 1, 5, DIV, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 3);

    let cpu = run(&[LDI, 0, 17, LDI, 1, 5, MOD, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 2);
}

#[test]
fn div_by_zero_is_a_runtime_error() {
    let mut cpu = Cpu::new(NullReader, BufferWriter::new());
    cpu.load(&[LDI, 0, 1, LDI, 1, 0, DIV, 0, 1, HLT]).unwrap();
    cpu.step().unwrap(); // LDI R0, 1
    cpu.step().unwrap(); // LDI R1, 0
    match cpu.step() {
        Err(RuntimeError::DivisionByZero) => {}
        other => panic!("expected DivisionByZero, got {:?}", other),
    }
}

#[test]
fn mod_by_zero_is_a_runtime_error() {
    let mut cpu = Cpu::new(NullReader, BufferWriter::new());
    cpu.load(&[LDI, 0, 1, LDI, 1, 0, MOD, 0, 1, HLT]).unwrap();
    cpu.step().unwrap();
    cpu.step().unwrap();
    match cpu.step() {
        Err(RuntimeError::DivisionByZero) => {}
        other => panic!("expected DivisionByZero, got {:?}", other),
    }
}

#[test]
fn bitwise_ops() {
    let cpu = run(&[LDI, 0, 0b1100, LDI, 1, 0b1010, AND, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 0b1000);

    let cpu = run(&[LDI, 0, 0b1100, LDI, 1, 0b1010, OR, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 0b1110);

    let cpu = run(&[LDI, 0, 0b1100, LDI, 1, 0b1010, XOR, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 0b0110);
}

#[test]
fn shifts_saturate_to_zero_past_eight_bits() {
    let cpu = run(&[LDI, 0, 1, LDI, 1, 3, SHL, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 8);

    let cpu = run(&[LDI, 0, 0b1000_0000, LDI, 1, 9, SHR, 0, 1, HLT]);
    assert_eq!(cpu.registers().get(0), 0);
}

#[test]
fn inc_dec_not() {
    let cpu = run(&[LDI, 0, 255, INC, 0, HLT]);
    assert_eq!(cpu.registers().get(0), 0);

    let cpu = run(&[LDI, 0, 0, DEC, 0, HLT]);
    assert_eq!(cpu.registers().get(0), 255);

    let cpu = run(&[LDI, 0, 0b0000_1111, NOT, 0, HLT]);
    assert_eq!(cpu.registers().get(0), 0b1111_0000);
}

#[test]
fn cmp_sets_flags_for_conditional_jumps() {
    let cpu = run(&[LDI, 0, 3, LDI, 1, 5, CMP, 0, 1, HLT]);
    let flags = cpu.flags();
    assert!(flags.less);
    assert!(!flags.greater);
    assert!(!flags.equal);
}
