use std::fmt;

/// The reason a line failed to assemble.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssemblyErrorKind {
    DuplicateSymbol(String),
    ExpectedInstructionName(String),
    NotEnoughParameters {
        mnemonic: String,
        expected: usize,
        found: usize,
    },
    UnexpectedOperand {
        mnemonic: String,
        token: String,
    },
    InvalidIntegerLiteral(String),
    SymbolNotFound(String),
}

/// A single assembler diagnostic. `translate` keeps going after one of these to surface every
/// diagnostic in one pass, then fails overall if the returned vector is non-empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AssemblyError {
    pub kind: AssemblyErrorKind,
    pub line: Option<u32>,
}

impl AssemblyError {
    pub fn new(kind: AssemblyErrorKind, line: u32) -> AssemblyError {
        AssemblyError {
            kind,
            line: Some(line),
        }
    }
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }

        match &self.kind {
            AssemblyErrorKind::DuplicateSymbol(name) => {
                write!(f, "label \"{}\" is already defined", name)
            }
            AssemblyErrorKind::ExpectedInstructionName(token) => {
                write!(f, "\"{}\" is not a known mnemonic", token)
            }
            AssemblyErrorKind::NotEnoughParameters {
                mnemonic,
                expected,
                found,
            } => write!(
                f,
                "{} takes {} operand(s), found {}",
                mnemonic, expected, found
            ),
            AssemblyErrorKind::UnexpectedOperand { mnemonic, token } => {
                write!(f, "\"{}\" is not a valid operand for {}", token, mnemonic)
            }
            AssemblyErrorKind::InvalidIntegerLiteral(token) => {
                write!(f, "\"{}\" is not a valid integer literal", token)
            }
            AssemblyErrorKind::SymbolNotFound(name) => {
                write!(f, "undefined label \"{}\"", name)
            }
        }
    }
}

impl std::error::Error for AssemblyError {}
