//! C-ABI surface over the LS-8 core for a hand-written JS/WASM host: instance lifecycle,
//! stepping, register/memory/flags inspection, keyboard injection, and output draining.
//! Buffer allocation, scheduling and key-event capture live in the JS layer, not here.

mod assembler;
mod instance;
mod io;
mod register;
mod result;
mod util;

pub use assembler::{ls8_assemble, ls8_code_destroy, ls8_code_get_data};
pub use instance::{
    ls8_clear_output, ls8_create, ls8_cycles, ls8_destroy, ls8_drain_output, ls8_get_flags,
    ls8_get_register, ls8_halted, ls8_inject_key, ls8_load, ls8_memory_get_ptr,
    ls8_program_counter, ls8_reset, ls8_set_register, ls8_step,
};
pub use register::{ls8_register_get_count, ls8_register_get_name};
pub use result::{ls8_result_get_description, Ls8Result};
pub use util::ls8_memcpy;
