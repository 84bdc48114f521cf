use std::fmt;
use std::io;

/// An error raised by `Cpu::step`.
#[derive(Debug)]
pub enum RuntimeError {
    /// The byte at the program counter did not match any known opcode.
    InvalidInstruction(u8),
    /// `IRET` executed while `interrupts_enabled` was already true.
    InterruptReturnOutsideInterrupt,
    /// `IRET` popped a flags byte with a reserved bit set.
    InterruptReturnInvalidFlagsValue(u8),
    /// `DIV`/`MOD` with a zero divisor.
    DivisionByZero,
    /// The host reader returned an error other than would-block or end-of-stream.
    Io(io::Error),
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RuntimeError::InvalidInstruction(byte) => {
                write!(f, "invalid instruction byte {:#04x}", byte)
            }
            RuntimeError::InterruptReturnOutsideInterrupt => {
                write!(f, "IRET executed while not handling an interrupt")
            }
            RuntimeError::InterruptReturnInvalidFlagsValue(byte) => {
                write!(f, "IRET popped an invalid flags byte {:#04x}", byte)
            }
            RuntimeError::DivisionByZero => write!(f, "division by zero"),
            RuntimeError::Io(err) => write!(f, "host I/O error: {}", err),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RuntimeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RuntimeError {
    fn from(err: io::Error) -> RuntimeError {
        RuntimeError::Io(err)
    }
}
