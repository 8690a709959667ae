use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;

use ipmiprims_frame::FrameError;

use crate::types::IpmiResult;

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::default();
    });
}

pub(crate) fn set_error_message(message: impl Into<String>) {
    let message = message.into();
    let sanitized = message.replace('\0', "?");
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::new(sanitized).unwrap_or_default();
    });
}

pub(crate) fn set_invalid_argument(message: impl Into<String>) -> IpmiResult {
    set_error_message(message);
    IpmiResult::InvalidArgument
}

pub(crate) fn set_panic_error() {
    set_error_message("panic across FFI boundary");
}

pub(crate) fn map_frame_error(err: &FrameError) -> IpmiResult {
    set_error_message(err.to_string());
    match err {
        FrameError::InvalidLength { .. } => IpmiResult::InvalidLength,
        FrameError::InvalidHeaderChecksum { .. } => IpmiResult::InvalidHeaderChecksum,
        FrameError::InvalidBodyChecksum { .. } => IpmiResult::InvalidBodyChecksum,
        FrameError::PayloadTooLarge { .. } => IpmiResult::PayloadTooLarge,
        FrameError::Truncated { .. } => IpmiResult::InvalidArgument,
    }
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|state| state.borrow().as_ptr())
}

#[cfg(test)]
pub(crate) fn last_error_message() -> String {
    LAST_ERROR.with(|state| state.borrow().to_string_lossy().into_owned())
}
