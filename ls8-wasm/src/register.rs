use std::os::raw::c_char;

use num_traits::FromPrimitive;
use util::InteropGetName;

use crate::result::Ls8Result;

#[no_mangle]
pub unsafe extern "C" fn ls8_register_get_count() -> u32 {
    8
}

#[no_mangle]
pub unsafe extern "C" fn ls8_register_get_name(
    index: u32,
    name: *mut *const c_char,
) -> Ls8Result {
    match ls8::RegisterId::from_u32(index) {
        Some(id) => {
            *name = id.interop_name().as_ptr() as *const c_char;
            Ls8Result::Ok
        }
        None => Ls8Result::OutOfRange,
    }
}
