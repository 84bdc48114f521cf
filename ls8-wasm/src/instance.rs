use ls8::{BufferWriter, Cpu, StepOutcome};

use crate::io::QueueReader;
use crate::result::Ls8Result;
use crate::util::{destroy, into_ptr};

pub struct Instance(Cpu<QueueReader, BufferWriter>);

#[no_mangle]
pub unsafe extern "C" fn ls8_create() -> *mut Instance {
    into_ptr(Instance(Cpu::new(QueueReader::new(), BufferWriter::new())))
}

#[no_mangle]
pub unsafe extern "C" fn ls8_destroy(instance: *mut Instance) {
    destroy(instance)
}

#[no_mangle]
pub unsafe extern "C" fn ls8_reset(instance: *mut Instance) {
    (*instance).0.reset()
}

#[no_mangle]
pub unsafe extern "C" fn ls8_load(
    instance: *mut Instance,
    bytes: *const u8,
    bytes_len: usize,
) -> Ls8Result {
    let image = std::slice::from_raw_parts(bytes, bytes_len);
    match (*instance).0.load(image) {
        Ok(()) => Ls8Result::Ok,
        Err(_) => Ls8Result::ProgramTooLarge,
    }
}

#[no_mangle]
pub unsafe extern "C" fn ls8_step(instance: *mut Instance) -> Ls8Result {
    match (*instance).0.step() {
        Ok(_) => Ls8Result::Ok,
        Err(_) => Ls8Result::RuntimeError,
    }
}

#[no_mangle]
pub unsafe extern "C" fn ls8_halted(instance: *const Instance) -> u8 {
    (*instance).0.halted() as u8
}

#[no_mangle]
pub unsafe extern "C" fn ls8_program_counter(instance: *const Instance) -> u8 {
    (*instance).0.program_counter()
}

#[no_mangle]
pub unsafe extern "C" fn ls8_cycles(instance: *const Instance) -> u64 {
    (*instance).0.cycles()
}

#[no_mangle]
pub unsafe extern "C" fn ls8_get_register(
    instance: *const Instance,
    index: u8,
    value: *mut u8,
) -> Ls8Result {
    if index >= 8 {
        return Ls8Result::OutOfRange;
    }
    *value = (*instance).0.registers().get(index as usize);
    Ls8Result::Ok
}

#[no_mangle]
pub unsafe extern "C" fn ls8_set_register(
    instance: *mut Instance,
    index: u8,
    value: u8,
) -> Ls8Result {
    if index >= 8 {
        return Ls8Result::OutOfRange;
    }
    (*instance).0.registers_mut().set(index as usize, value);
    Ls8Result::Ok
}

#[no_mangle]
pub unsafe extern "C" fn ls8_get_flags(
    instance: *const Instance,
    less: *mut u8,
    greater: *mut u8,
    equal: *mut u8,
) {
    let flags = (*instance).0.flags();
    *less = flags.less as u8;
    *greater = flags.greater as u8;
    *equal = flags.equal as u8;
}

#[no_mangle]
pub unsafe extern "C" fn ls8_memory_get_ptr(
    instance: *const Instance,
    ptr: *mut *const u8,
    len: *mut usize,
) {
    let slice = (*instance).0.memory().as_slice();
    *ptr = slice.as_ptr();
    *len = slice.len();
}

#[no_mangle]
pub unsafe extern "C" fn ls8_inject_key(instance: *mut Instance, byte: u8) {
    (*instance).0.reader_mut().push(byte);
}

#[no_mangle]
pub unsafe extern "C" fn ls8_drain_output(
    instance: *mut Instance,
    ptr: *mut *const u8,
    len: *mut usize,
) {
    let slice = (*instance).0.writer().as_slice();
    *ptr = slice.as_ptr();
    *len = slice.len();
}

#[no_mangle]
pub unsafe extern "C" fn ls8_clear_output(instance: *mut Instance) {
    (*instance).0.writer_mut().clear();
}
