use std::io::{self, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal;

use ls8::{ReadByte, Reader, Writer};

/// Puts the terminal into raw mode for the lifetime of the value and takes it back out on
/// drop, so a `cpu.step()` that errors partway through doesn't leave the user's shell wedged.
pub struct TerminalReader {
    raw_mode_enabled: bool,
}

impl TerminalReader {
    pub fn new() -> io::Result<TerminalReader> {
        terminal::enable_raw_mode()?;
        Ok(TerminalReader {
            raw_mode_enabled: true,
        })
    }
}

impl Reader for TerminalReader {
    fn read_byte(&mut self) -> io::Result<ReadByte> {
        if !event::poll(Duration::from_secs(0))? {
            return Ok(ReadByte::WouldBlock);
        }

        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char(c) if c.is_ascii() => Ok(ReadByte::Byte(c as u8)),
                KeyCode::Enter => Ok(ReadByte::Byte(b'\n')),
                KeyCode::Backspace => Ok(ReadByte::Byte(0x08)),
                KeyCode::Esc => Ok(ReadByte::Byte(0x1b)),
                _ => Ok(ReadByte::WouldBlock),
            },
            _ => Ok(ReadByte::WouldBlock),
        }
    }
}

impl Drop for TerminalReader {
    fn drop(&mut self) {
        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Writes straight to stdout. `PRN`/`PRA` output interleaves with whatever the reader's raw
/// mode is doing to the terminal; the host is responsible for any fancier presentation.
pub struct TerminalWriter;

impl Writer for TerminalWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().write_all(bytes)?;
        io::stdout().flush()
    }
}
