use std::num::Wrapping;

use num::FromPrimitive;

use crate::constants;
use crate::error::RuntimeError;
use crate::flags::Flags;
use crate::io::{ReadByte, Reader, Writer};
use crate::memory::{Memory, ProgramTooLarge};
use crate::opcode::Opcode;
use crate::registers::Registers;

/// Cycles between timer ticks when a frequency isn't configured explicitly. Arbitrary;
/// hosts that care about wall-clock timing set their own via [`Cpu::with_frequency`].
pub const DEFAULT_FREQUENCY: u64 = 10_000;

/// Whether the machine is still runnable after a step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    Continue,
    Halted,
}

/// The LS-8 CPU: 256 bytes of memory, eight registers, and a fetch-decode-execute loop,
/// parameterised over a host-supplied reader and writer (static polymorphism — no heap
/// allocation or dynamic dispatch per step unless the host itself chooses `Box<dyn Reader>`).
///
/// # Examples
/// ```
/// use ls8::{Cpu, NullReader, BufferWriter};
///
/// let mut cpu = Cpu::new(NullReader, BufferWriter::new());
/// cpu.load(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap(); // LDI R0,8; PRN R0; HLT
/// while cpu.step().unwrap() != ls8::StepOutcome::Halted {}
/// assert_eq!(cpu.writer().as_slice(), b"8");
/// ```
pub struct Cpu<R: Reader, W: Writer> {
    memory: Memory,
    registers: Registers,
    program_counter: u8,
    flags: Flags,
    interrupts_enabled: bool,
    cycles: u64,
    last_timer_interrupt: u64,
    frequency: u64,
    halted: bool,
    reader: R,
    writer: W,
}

impl<R: Reader, W: Writer> Cpu<R, W> {
    pub fn new(reader: R, writer: W) -> Cpu<R, W> {
        Cpu::with_frequency(reader, writer, DEFAULT_FREQUENCY)
    }

    pub fn with_frequency(reader: R, writer: W, frequency: u64) -> Cpu<R, W> {
        Cpu {
            memory: Memory::new(),
            registers: Registers::new(),
            program_counter: constants::LOAD_BASE,
            flags: Flags::default(),
            interrupts_enabled: true,
            cycles: 0,
            last_timer_interrupt: 0,
            frequency,
            halted: false,
            reader,
            writer,
        }
    }

    /// Copies `bytes` into memory at address 0. Refuses (does not truncate) programs over
    /// 256 bytes.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), ProgramTooLarge> {
        self.memory.load(bytes)
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Whether interrupts are currently deliverable. Cleared on dispatch, restored by `IRET`.
    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn program_counter(&self) -> u8 {
        self.program_counter
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Lets a host poke register contents directly between steps (e.g. a wasm debugger UI).
    /// The fetch-decode-execute loop itself never needs this; only host-side tooling does.
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Exposes the reader so a host can feed it new input between steps (e.g. a queue-backed
    /// reader that a UI event handler pushes keystrokes into).
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Re-initialises all state as at construction, keeping the host reader/writer and the
    /// configured frequency, but clearing memory and registers.
    pub fn reset(&mut self) {
        self.memory.reset();
        self.registers.reset();
        self.program_counter = constants::LOAD_BASE;
        self.flags = Flags::default();
        self.interrupts_enabled = true;
        self.cycles = 0;
        self.last_timer_interrupt = 0;
        self.halted = false;
    }

    fn push(&mut self, value: u8) {
        let sp = Wrapping(self.registers.sp()) - Wrapping(1);
        self.registers.set_sp(sp.0);
        self.memory.write(sp.0, value);
    }

    fn pop(&mut self) -> u8 {
        let sp = self.registers.sp();
        let value = self.memory.read(sp);
        self.registers.set_sp((Wrapping(sp) + Wrapping(1)).0);
        value
    }

    /// Raises interrupt `n` if the corresponding bit of the Interrupt Mask is set. Returns
    /// whether the interrupt was actually taken (and thus whether the program counter was
    /// overwritten as a side effect).
    fn raise_interrupt(&mut self, n: u8) -> bool {
        if self.registers.im() & (1 << n) == 0 {
            return false;
        }

        self.interrupts_enabled = false;
        self.registers.set_is(1 << n);

        self.push(self.program_counter);
        self.push(self.flags.to_byte());
        for r in 0..=6 {
            self.push(self.registers.get(r));
        }

        self.program_counter = self
            .memory
            .read(constants::INTERRUPT_VECTOR_BASE.wrapping_add(n));
        true
    }

    /// Executes exactly one instruction, polling for interrupts first.
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        self.cycles += 1;

        if self.interrupts_enabled {
            if self.cycles - self.last_timer_interrupt >= self.frequency {
                self.last_timer_interrupt = self.cycles;
                self.raise_interrupt(constants::TIMER_INTERRUPT);
            }

            match self.reader.read_byte()? {
                ReadByte::Byte(byte) => {
                    self.memory.write(constants::KEYBOARD_SLOT, byte);
                    self.raise_interrupt(constants::KEYBOARD_INTERRUPT);
                }
                ReadByte::WouldBlock | ReadByte::EndOfStream => {}
            }
        }

        let instruction_byte = self.memory.read(self.program_counter);
        let opcode = Opcode::from_u8(instruction_byte)
            .ok_or(RuntimeError::InvalidInstruction(instruction_byte))?;

        let took_branch = self.execute(opcode)?;

        if !self.halted && (!opcode.sets_pc() || !took_branch) {
            self.program_counter = (Wrapping(self.program_counter)
                + Wrapping(opcode.operand_count() + 1))
            .0;
        }

        Ok(if self.halted {
            StepOutcome::Halted
        } else {
            StepOutcome::Continue
        })
    }

    fn operand_a(&self) -> u8 {
        self.memory
            .read((Wrapping(self.program_counter) + Wrapping(1)).0)
    }

    fn operand_b(&self) -> u8 {
        self.memory
            .read((Wrapping(self.program_counter) + Wrapping(2)).0)
    }

    /// Executes `opcode`'s effect and returns whether it overwrote the program counter
    /// itself (suppressing the default post-increment in [`Cpu::step`]).
    fn execute(&mut self, opcode: Opcode) -> Result<bool, RuntimeError> {
        let mut took_branch = false;

        macro_rules! reg {
            ($slot:expr) => {
                self.registers.get(($slot & 0b111) as usize)
            };
        }
        macro_rules! set_reg {
            ($slot:expr, $value:expr) => {
                self.registers.set(($slot & 0b111) as usize, $value)
            };
        }

        match opcode {
            Opcode::NOP => {}

            Opcode::HLT => {
                self.halted = true;
            }

            Opcode::RET => {
                self.program_counter = self.pop();
                took_branch = true;
            }

            Opcode::IRET => {
                if self.interrupts_enabled {
                    return Err(RuntimeError::InterruptReturnOutsideInterrupt);
                }

                self.registers.set_is(0);
                for r in (0..=6).rev() {
                    let value = self.pop();
                    self.registers.set(r, value);
                }

                let flags_byte = self.pop();
                self.flags = Flags::from_byte(flags_byte)
                    .ok_or(RuntimeError::InterruptReturnInvalidFlagsValue(flags_byte))?;

                self.program_counter = self.pop();
                self.interrupts_enabled = true;
                took_branch = true;
            }

            Opcode::PUSH => {
                let a = self.operand_a();
                self.push(reg!(a));
            }

            Opcode::POP => {
                let a = self.operand_a();
                let value = self.pop();
                set_reg!(a, value);
            }

            Opcode::PRN => {
                let value = reg!(self.operand_a());
                self.writer.print_decimal(value)?;
            }

            Opcode::PRA => {
                let value = reg!(self.operand_a());
                self.writer.write(&[value])?;
            }

            Opcode::CALL => {
                let a = self.operand_a();
                self.push((Wrapping(self.program_counter) + Wrapping(2)).0);
                self.program_counter = reg!(a);
                took_branch = true;
            }

            Opcode::INT => {
                let n = reg!(self.operand_a()) & 0b111;
                took_branch = self.raise_interrupt(n);
            }

            Opcode::JMP => {
                self.program_counter = reg!(self.operand_a());
                took_branch = true;
            }

            Opcode::JEQ => {
                if self.flags.equal {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::JNE => {
                if !self.flags.equal {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::JGT => {
                if self.flags.greater {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::JLT => {
                if self.flags.less {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::JLE => {
                if self.flags.less || self.flags.equal {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::JGE => {
                if self.flags.greater || self.flags.equal {
                    self.program_counter = reg!(self.operand_a());
                    took_branch = true;
                }
            }

            Opcode::INC => {
                let a = self.operand_a();
                set_reg!(a, (Wrapping(reg!(a)) + Wrapping(1)).0);
            }

            Opcode::DEC => {
                let a = self.operand_a();
                set_reg!(a, (Wrapping(reg!(a)) - Wrapping(1)).0);
            }

            Opcode::NOT => {
                let a = self.operand_a();
                set_reg!(a, !reg!(a));
            }

            Opcode::LDI => {
                let a = self.operand_a();
                let imm = self.operand_b();
                set_reg!(a, imm);
            }

            Opcode::LD => {
                let a = self.operand_a();
                let b = self.operand_b();
                let value = self.memory.read(reg!(b));
                set_reg!(a, value);
            }

            Opcode::ST => {
                let a = self.operand_a();
                let b = self.operand_b();
                self.memory.write(reg!(a), reg!(b));
            }

            Opcode::ADD => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, (Wrapping(reg!(a)) + Wrapping(reg!(b))).0);
            }

            Opcode::SUB => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, (Wrapping(reg!(a)) - Wrapping(reg!(b))).0);
            }

            Opcode::MUL => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, (Wrapping(reg!(a)) * Wrapping(reg!(b))).0);
            }

            Opcode::DIV => {
                let (a, b) = (self.operand_a(), self.operand_b());
                let divisor = reg!(b);
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                set_reg!(a, reg!(a) / divisor);
            }

            Opcode::MOD => {
                let (a, b) = (self.operand_a(), self.operand_b());
                let divisor = reg!(b);
                if divisor == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                set_reg!(a, reg!(a) % divisor);
            }

            Opcode::CMP => {
                let (a, b) = (self.operand_a(), self.operand_b());
                self.flags.compare(reg!(a), reg!(b));
            }

            Opcode::AND => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, reg!(a) & reg!(b));
            }

            Opcode::OR => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, reg!(a) | reg!(b));
            }

            Opcode::XOR => {
                let (a, b) = (self.operand_a(), self.operand_b());
                set_reg!(a, reg!(a) ^ reg!(b));
            }

            Opcode::SHL => {
                let (a, b) = (self.operand_a(), self.operand_b());
                let shift = reg!(b);
                set_reg!(a, if shift >= 8 { 0 } else { reg!(a) << shift });
            }

            Opcode::SHR => {
                let (a, b) = (self.operand_a(), self.operand_b());
                let shift = reg!(b);
                set_reg!(a, if shift >= 8 { 0 } else { reg!(a) >> shift });
            }
        }

        Ok(took_branch)
    }
}
