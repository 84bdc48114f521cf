use crate::constants::MEMORY_SIZE;

/// A fixed 256-byte, byte-addressed store.
///
/// # Examples
/// ```
/// use ls8::Memory;
///
/// let mut memory = Memory::new();
/// memory.write(0x10, 42);
/// assert_eq!(memory.read(0x10), 42);
/// ```
#[derive(Clone)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `address`. Addresses outside 0..256 never occur since `address` is a
    /// `u8` and the store is exactly 256 bytes wide.
    pub fn read(&self, address: u8) -> u8 {
        self.data[address as usize]
    }

    pub fn write(&mut self, address: u8, value: u8) {
        self.data[address as usize] = value;
    }

    /// Copies `bytes` into memory starting at address 0.
    ///
    /// # Errors
    /// Returns an error if `bytes` is longer than the store; the image is not truncated.
    ///
    /// # Examples
    /// ```
    /// use ls8::Memory;
    ///
    /// let mut memory = Memory::new();
    /// assert!(memory.load(&[1, 2, 3]).is_ok());
    /// assert_eq!(memory.read(1), 2);
    /// ```
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), ProgramTooLarge> {
        if bytes.len() > MEMORY_SIZE {
            return Err(ProgramTooLarge {
                size: bytes.len(),
                capacity: MEMORY_SIZE,
            });
        }

        self.data[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn reset(&mut self) {
        self.data = [0; MEMORY_SIZE];
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory::new()
    }
}

/// A program did not fit inside the 256-byte address space.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProgramTooLarge {
    pub size: usize,
    pub capacity: usize,
}

impl std::fmt::Display for ProgramTooLarge {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "program is {} bytes, but memory only holds {} bytes",
            self.size, self.capacity
        )
    }
}

impl std::error::Error for ProgramTooLarge {}
