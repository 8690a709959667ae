//! ipmiprims-ffi: C-ABI exports for ipmiprims message validation and response construction.

mod args;
mod error;
mod msg;
mod types;

use std::panic::AssertUnwindSafe;

pub use msg::{ipmi_build_response, ipmi_checksum, ipmi_validate_checksum};
pub use types::{
    IpmiMsg, IpmiResult, IPMI_ERR_BODY_CHECKSUM, IPMI_ERR_HEADER_CHECKSUM, IPMI_ERR_INTERNAL,
    IPMI_ERR_INVALID_ARGUMENT, IPMI_ERR_INVALID_LENGTH, IPMI_ERR_PAYLOAD_TOO_LARGE, IPMI_OK,
    IPMI_PACKET_MAX_BUFFER,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

#[no_mangle]
pub extern "C" fn ipmi_init() -> IpmiResult {
    ffi_boundary(IpmiResult::Internal, || {
        error::clear_error_state();
        IpmiResult::Ok
    })
}

#[no_mangle]
pub extern "C" fn ipmi_cleanup() {
    ffi_boundary((), || {
        error::clear_error_state();
    });
}

#[no_mangle]
pub extern "C" fn ipmi_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}
