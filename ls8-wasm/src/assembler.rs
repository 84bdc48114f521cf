use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use crate::result::Ls8Result;
use crate::util::{destroy, into_ptr};

thread_local! {
    static LAST_ERROR: Cell<CString> = Cell::new(Default::default());
}

/// Assembles `source` and boxes the resulting image; the caller reads it out through
/// `ls8_code_get_data` and must eventually call `ls8_code_destroy`. On an assembler failure
/// `error` (if non-null) is pointed at a description valid until the next call on this thread.
#[no_mangle]
pub unsafe extern "C" fn ls8_assemble(
    source: *const c_char,
    code: *mut *mut Vec<u8>,
    error: *mut *const c_char,
) -> Ls8Result {
    let src = match CStr::from_ptr(source).to_str() {
        Ok(src) => src,
        Err(_) => return Ls8Result::Utf8Error,
    };

    match lasm::translate(src) {
        Ok(bytes) => {
            *code = into_ptr(bytes);
            Ls8Result::Ok
        }
        Err(errors) => {
            if !error.is_null() {
                let message = errors
                    .iter()
                    .map(|err| err.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                LAST_ERROR.with(|cell| {
                    let c_string = CString::new(message).unwrap_or_default();
                    *error = c_string.as_ptr();
                    cell.set(c_string);
                });
            }
            Ls8Result::AssemblerError
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn ls8_code_get_data(
    code: *const Vec<u8>,
    data: *mut *const u8,
    data_len: *mut usize,
) {
    *data = (*code).as_ptr();
    *data_len = (*code).len();
}

#[no_mangle]
pub unsafe extern "C" fn ls8_code_destroy(code: *mut Vec<u8>) {
    destroy(code);
}
