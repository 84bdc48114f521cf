/// Total addressable memory, in bytes.
pub const MEMORY_SIZE: usize = 256;

/// Address execution begins at after a load or reset.
pub const LOAD_BASE: u8 = 0x00;

/// Value R7 (the stack pointer) takes on reset. The stack grows downward from here.
pub const INITIAL_STACK_POINTER: u8 = 0xF3;

/// Address a pending keyboard byte is deposited at before the keyboard interrupt fires.
pub const KEYBOARD_SLOT: u8 = 0xF4;

/// Base address of the interrupt vector table; the handler for interrupt `n` lives at
/// `INTERRUPT_VECTOR_BASE + n`.
pub const INTERRUPT_VECTOR_BASE: u8 = 0xF8;

/// Number of interrupt lines.
pub const INTERRUPT_COUNT: u8 = 8;

/// Interrupt number raised by the timer.
pub const TIMER_INTERRUPT: u8 = 0;

/// Interrupt number raised by a pending keyboard byte.
pub const KEYBOARD_INTERRUPT: u8 = 1;

/// Register index of the Interrupt Mask register.
pub const IM: usize = 5;
/// Register index of the Interrupt Status register.
pub const IS: usize = 6;
/// Register index of the Stack Pointer register.
pub const SP: usize = 7;

pub const OPERAND_COUNT_MASK   : u8 = 0b1100_0000;
pub const ALU_FLAG_MASK        : u8 = 0b0010_0000;
pub const SETS_PC_MASK         : u8 = 0b0001_0000;

pub const OPERAND_COUNT_OFFSET : u8 = 6;
pub const ALU_FLAG_OFFSET      : u8 = 5;
pub const SETS_PC_OFFSET       : u8 = 4;

/// Bits of the flags byte that must be zero on restore.
pub const FLAGS_RESERVED_MASK  : u8 = 0b1111_1000;
