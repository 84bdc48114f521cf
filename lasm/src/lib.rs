//! Two-pass translator from LS-8 assembly source to a flat binary image.
//!
//! A program is a sequence of lines. Each line is one of:
//!
//! | form | example | emits |
//! |---|---|---|
//! | label-only | `loop:` | nothing, just records the address |
//! | data byte | `value: db 42` | one byte |
//! | data string | `greeting: ds Hello!` | the line's remaining bytes, verbatim |
//! | instruction | `LDI R0, 8` | the opcode byte plus 0-2 operand bytes |
//!
//! Comments start with `;` or `#` and run to the end of the line. Operand tokens are
//! classified as a register (`R0`..`R7`), an integer literal (`42`, `0x2A`, `0b101010`,
//! each optionally `-`-prefixed) or a symbol reference (anything else); a symbol used
//! before its label is seen resolves in a second pass once every label's address is known.

mod error;
mod operand;

pub use error::{AssemblyError, AssemblyErrorKind};

use ls8::Opcode;
use operand::Token;
use std::collections::HashMap;
use util::EnumFromStr;

struct Fixup {
    symbol: String,
    code_index: usize,
    line: u32,
}

#[derive(Default)]
struct Assembler {
    code: Vec<u8>,
    symbols: HashMap<String, u8>,
    fixups: Vec<Fixup>,
    errors: Vec<AssemblyError>,
}

impl Assembler {
    fn error(&mut self, kind: AssemblyErrorKind, line: u32) {
        self.errors.push(AssemblyError::new(kind, line));
    }

    fn define_symbol(&mut self, name: &str, line: u32) {
        if self.symbols.contains_key(name) {
            self.error(AssemblyErrorKind::DuplicateSymbol(name.to_string()), line);
            return;
        }
        self.symbols.insert(name.to_string(), self.code.len() as u8);
    }

    fn process_line(&mut self, line: u32, raw: &str) {
        let stripped = strip_comment(raw);
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return;
        }

        let (label, rest) = split_leading_label(trimmed);
        if let Some(label) = label {
            self.define_symbol(label, line);
        }
        let rest = rest.trim();
        if rest.is_empty() {
            return;
        }

        let mut parts = rest.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or("");
        let remainder = parts.next().unwrap_or("").trim_start();

        match head.to_ascii_uppercase().as_str() {
            "DB" => self.assemble_db(remainder, line),
            "DS" => self.assemble_ds(remainder),
            _ => self.assemble_instruction(head, remainder, line),
        }
    }

    fn assemble_db(&mut self, remainder: &str, line: u32) {
        let tokens = operand::tokenize(remainder);
        if tokens.is_empty() {
            self.error(
                AssemblyErrorKind::NotEnoughParameters {
                    mnemonic: "db".to_string(),
                    expected: 1,
                    found: tokens.len(),
                },
                line,
            );
            return;
        }
        if tokens.len() > 1 {
            self.error(
                AssemblyErrorKind::UnexpectedOperand {
                    mnemonic: "db".to_string(),
                    token: tokens[1].to_string(),
                },
                line,
            );
            return;
        }
        match operand::parse_integer(tokens[0]) {
            Ok(value) => self.code.push(value),
            Err(()) => self.error(
                AssemblyErrorKind::InvalidIntegerLiteral(tokens[0].to_string()),
                line,
            ),
        }
    }

    fn assemble_ds(&mut self, remainder: &str) {
        self.code.extend(remainder.as_bytes());
    }

    fn assemble_instruction(&mut self, mnemonic: &str, remainder: &str, line: u32) {
        let opcode = match <Opcode as EnumFromStr>::from_str(&mnemonic.to_ascii_uppercase()) {
            Ok(opcode) => opcode,
            Err(_) => {
                self.error(
                    AssemblyErrorKind::ExpectedInstructionName(mnemonic.to_string()),
                    line,
                );
                return;
            }
        };

        let kinds = opcode.operand_kinds();
        let tokens = operand::tokenize(remainder);

        if tokens.len() < kinds.len() {
            self.error(
                AssemblyErrorKind::NotEnoughParameters {
                    mnemonic: mnemonic.to_string(),
                    expected: kinds.len(),
                    found: tokens.len(),
                },
                line,
            );
            return;
        }
        if tokens.len() > kinds.len() {
            self.error(
                AssemblyErrorKind::UnexpectedOperand {
                    mnemonic: mnemonic.to_string(),
                    token: tokens[kinds.len()].to_string(),
                },
                line,
            );
            return;
        }

        self.code.push(opcode as u8);

        for (&token, &kind) in tokens.iter().zip(kinds.iter()) {
            let parsed = match operand::classify(token) {
                Ok(parsed) => parsed,
                Err(()) => {
                    self.error(
                        AssemblyErrorKind::InvalidIntegerLiteral(token.to_string()),
                        line,
                    );
                    self.code.push(0);
                    continue;
                }
            };

            match (kind, parsed) {
                (ls8::OperandKind::Register, Token::Register(id)) => self.code.push(id),
                (ls8::OperandKind::Immediate, Token::Integer(value)) => self.code.push(value),
                (ls8::OperandKind::Immediate, Token::Symbol(name)) => {
                    self.fixups.push(Fixup {
                        symbol: name,
                        code_index: self.code.len(),
                        line,
                    });
                    self.code.push(0);
                }
                (_, _) => {
                    self.error(
                        AssemblyErrorKind::UnexpectedOperand {
                            mnemonic: mnemonic.to_string(),
                            token: token.to_string(),
                        },
                        line,
                    );
                    self.code.push(0);
                }
            }
        }
    }

    fn resolve_fixups(&mut self) {
        for fixup in &self.fixups {
            match self.symbols.get(&fixup.symbol) {
                Some(&address) => self.code[fixup.code_index] = address,
                None => self.errors.push(AssemblyError::new(
                    AssemblyErrorKind::SymbolNotFound(fixup.symbol.clone()),
                    fixup.line,
                )),
            }
        }
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(|c| c == ';' || c == '#') {
        Some(index) => &line[..index],
        None => line,
    }
}

fn split_leading_label(line: &str) -> (Option<&str>, &str) {
    let mut parts = line.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    if first.len() > 1 && first.ends_with(':') {
        (Some(&first[..first.len() - 1]), parts.next().unwrap_or(""))
    } else {
        (None, line)
    }
}

/// Assembles `text` into a flat binary image, or every diagnostic collected while trying.
///
/// # Examples
///
/// ```
/// let code = lasm::translate("LDI R0, 8\nPRN R0\nHLT\n").unwrap();
/// assert_eq!(code, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
/// ```
pub fn translate(text: &str) -> Result<Vec<u8>, Vec<AssemblyError>> {
    let mut assembler = Assembler::default();

    for (index, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.trim_end_matches('\r');
        assembler.process_line(index as u32 + 1, line);
    }
    assembler.resolve_fixups();

    if assembler.errors.is_empty() {
        Ok(assembler.code)
    } else {
        Err(assembler.errors)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assembles_a_minimal_program() {
        let code = translate("LDI R0, 8\nPRN R0\nHLT\n").unwrap();
        assert_eq!(code, vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
    }

    #[test]
    fn labels_resolve_forward_and_backward() {
        let source = "\
            start:\n\
            LDI R0, again\n\
            again:\n\
            LDI R1, start\n\
            HLT\n\
        ";
        let code = translate(source).unwrap();
        // start == 0, again == 3
        assert_eq!(code, vec![0x82, 0x00, 0x03, 0x82, 0x01, 0x00, 0x01]);
    }

    #[test]
    fn db_emits_one_byte() {
        assert_eq!(translate("value: db 0x2A\nHLT\n").unwrap(), vec![0x2A, 0x01]);
    }

    #[test]
    fn db_with_too_many_operands_is_reported_as_unexpected_operand() {
        let errors = translate("value: db 0x2A, 0x2B\nHLT\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::UnexpectedOperand {
                mnemonic: "db".to_string(),
                token: "0x2B".to_string(),
            }
        );
    }

    #[test]
    fn ds_emits_the_remainder_verbatim() {
        assert_eq!(
            translate("greeting: ds Hi!\nHLT\n").unwrap(),
            vec![b'H', b'i', b'!', 0x01]
        );
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        assert_eq!(
            translate("; a comment\n\nHLT ; trailing\n").unwrap(),
            vec![0x01]
        );
    }

    #[test]
    fn unknown_mnemonic_is_reported() {
        let errors = translate("FROB R0\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::ExpectedInstructionName("FROB".to_string())
        );
        assert_eq!(errors[0].line, Some(1));
    }

    #[test]
    fn duplicate_label_is_reported() {
        let errors = translate("a:\na:\nHLT\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::DuplicateSymbol("a".to_string())
        );
    }

    #[test]
    fn missing_operand_is_reported() {
        let errors = translate("LDI R0\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::NotEnoughParameters {
                mnemonic: "LDI".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn extra_operand_is_reported() {
        let errors = translate("HLT R0\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::UnexpectedOperand {
                mnemonic: "HLT".to_string(),
                token: "R0".to_string(),
            }
        );
    }

    #[test]
    fn register_token_rejected_in_immediate_slot() {
        let errors = translate("LDI R0, R1\n").unwrap_err();
        match &errors[0].kind {
            AssemblyErrorKind::UnexpectedOperand { token, .. } => assert_eq!(token, "R1"),
            other => panic!("unexpected error kind: {:?}", other),
        }
    }

    #[test]
    fn unresolved_symbol_is_reported() {
        let errors = translate("LDI R0, nowhere\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::SymbolNotFound("nowhere".to_string())
        );
    }

    #[test]
    fn invalid_integer_literal_is_reported() {
        let errors = translate("LDI R0, 0xZZ\n").unwrap_err();
        assert_eq!(
            errors[0].kind,
            AssemblyErrorKind::InvalidIntegerLiteral("0xZZ".to_string())
        );
    }
}
