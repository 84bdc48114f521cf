use std::io;

/// The result of a single non-blocking read attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ReadByte {
    Byte(u8),
    WouldBlock,
    EndOfStream,
}

/// A non-blocking source of keyboard bytes. Implementations MUST NOT block; a host with
/// nothing pending reports `WouldBlock` rather than waiting.
pub trait Reader {
    fn read_byte(&mut self) -> io::Result<ReadByte>;
}

/// The CPU's display sink.
pub trait Writer {
    /// Writes raw bytes, as `PRA` does for a single register value.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Writes the decimal representation of a single byte, as `PRN` does.
    fn print_decimal(&mut self, value: u8) -> io::Result<()> {
        self.write(value.to_string().as_bytes())
    }
}

/// A reader that never has a byte available. Useful for tests and for hosts with no
/// keyboard input.
#[derive(Clone, Copy, Default)]
pub struct NullReader;

impl Reader for NullReader {
    fn read_byte(&mut self) -> io::Result<ReadByte> {
        Ok(ReadByte::EndOfStream)
    }
}

/// A writer that records bytes in a `Vec<u8>` in order. Useful for tests.
#[derive(Clone, Debug, Default)]
pub struct BufferWriter(Vec<u8>);

impl BufferWriter {
    pub fn new() -> BufferWriter {
        BufferWriter(Vec::new())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }

    /// Empties the buffer so a host can drain it incrementally instead of reading
    /// ever-growing output on every poll.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl Writer for BufferWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.extend_from_slice(bytes);
        Ok(())
    }
}
