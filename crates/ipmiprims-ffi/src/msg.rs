use ipmiprims_frame::{build_response, checksum, validate, Message};

use crate::args::{bytes_arg, required_ref};
use crate::error;
use crate::types::{IpmiMsg, IpmiResult};

/// Validate both checksums of `msg`.
///
/// # Safety
/// `msg` must be null or point to a valid `IpmiMsg`.
#[no_mangle]
pub unsafe extern "C" fn ipmi_validate_checksum(msg: *const IpmiMsg) -> IpmiResult {
    crate::ffi_boundary(IpmiResult::Internal, || {
        error::clear_error_state();

        // SAFETY: Pointer validity is guaranteed by the caller.
        let Some(msg) = (unsafe { required_ref(msg, "msg") }) else {
            return IpmiResult::InvalidArgument;
        };

        match validate(&Message::from(msg)) {
            Ok(()) => IpmiResult::Ok,
            Err(err) => error::map_frame_error(&err),
        }
    })
}

/// Build the response to `req` into `resp`.
///
/// `resp` is written only on success.
///
/// # Safety
/// `req` must point to a valid `IpmiMsg`, `resp` must point to writable
/// `IpmiMsg` storage, and if `data_len > 0`, `data` must be readable for
/// `data_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn ipmi_build_response(
    req: *const IpmiMsg,
    resp: *mut IpmiMsg,
    completion_code: u8,
    data: *const u8,
    data_len: usize,
) -> IpmiResult {
    crate::ffi_boundary(IpmiResult::Internal, || {
        error::clear_error_state();

        // SAFETY: Pointer validity is guaranteed by the caller.
        let Some(req) = (unsafe { required_ref(req, "req") }) else {
            return IpmiResult::InvalidArgument;
        };
        if resp.is_null() {
            return error::set_invalid_argument("resp cannot be null");
        }
        // SAFETY: Null and length are validated in helper.
        let Some(payload) = (unsafe { bytes_arg(data, data_len, "data") }) else {
            return IpmiResult::InvalidArgument;
        };

        match build_response(&Message::from(req), completion_code, payload) {
            Ok(response) => {
                // SAFETY: Non-null checked above; writability guaranteed by the caller.
                unsafe { *resp = IpmiMsg::from(&response) };
                IpmiResult::Ok
            }
            Err(err) => error::map_frame_error(&err),
        }
    })
}

/// Compute the two's-complement checksum of `len` bytes at `data` into `out`.
///
/// # Safety
/// If `len > 0`, `data` must be readable for `len` bytes; `out` must be
/// writable.
#[no_mangle]
pub unsafe extern "C" fn ipmi_checksum(data: *const u8, len: usize, out: *mut u8) -> IpmiResult {
    crate::ffi_boundary(IpmiResult::Internal, || {
        error::clear_error_state();

        if out.is_null() {
            return error::set_invalid_argument("out cannot be null");
        }
        // SAFETY: Null and length are validated in helper.
        let Some(bytes) = (unsafe { bytes_arg(data, len, "data") }) else {
            return IpmiResult::InvalidArgument;
        };

        // SAFETY: Non-null checked above; writability guaranteed by the caller.
        unsafe { *out = checksum(bytes) };
        IpmiResult::Ok
    })
}
