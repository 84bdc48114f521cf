use std::collections::VecDeque;
use std::io;

use ls8::{ReadByte, Reader};

/// Feeds keyboard bytes pushed in from the JS host one at a time; reports `WouldBlock` once
/// the queue runs dry rather than blocking or signalling end-of-stream (the host is still
/// there, it just hasn't typed anything).
#[derive(Default)]
pub struct QueueReader(VecDeque<u8>);

impl QueueReader {
    pub fn new() -> QueueReader {
        QueueReader(VecDeque::new())
    }

    pub fn push(&mut self, byte: u8) {
        self.0.push_back(byte);
    }
}

impl Reader for QueueReader {
    fn read_byte(&mut self) -> io::Result<ReadByte> {
        Ok(match self.0.pop_front() {
            Some(byte) => ReadByte::Byte(byte),
            None => ReadByte::WouldBlock,
        })
    }
}
