use std::os::raw::c_char;

/// Every FFI entry point returns one of these instead of panicking across the boundary.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ls8Result {
    Ok = 0,
    Utf8Error = 1,
    AssemblerError = 2,
    RuntimeError = 3,
    ProgramTooLarge = 4,
    OutOfRange = 5,
}

#[no_mangle]
pub unsafe extern "C" fn ls8_result_get_description(
    result: i32,
    desc: *mut *const c_char,
) -> Ls8Result {
    let text: &'static [u8] = match result {
        0 => b"Ok\0",
        1 => b"Utf8Error\0",
        2 => b"AssemblerError\0",
        3 => b"RuntimeError\0",
        4 => b"ProgramTooLarge\0",
        5 => b"OutOfRange\0",
        _ => return Ls8Result::OutOfRange,
    };
    *desc = text.as_ptr() as *const c_char;
    Ls8Result::Ok
}
