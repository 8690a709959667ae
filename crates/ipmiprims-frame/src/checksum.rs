//! Two's-complement checksum arithmetic used by IPMB messages.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};
use crate::message::Message;

/// Bytes that precede the payload in the body checksum input:
/// requester address, sequence/LUN, command, and (responses only) completion code.
const BODY_PREFIX_MAX: usize = 4;

/// Widened unsigned sum of `bytes`.
///
/// Wraps at 2^64, which leaves the value mod 256 intact.
pub fn sum(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &byte| acc.wrapping_add(u64::from(byte)))
}

/// Two's-complement checksum: the byte that makes `bytes` sum to zero mod 256.
///
/// Returns `0` for empty input.
pub fn checksum(bytes: &[u8]) -> u8 {
    let folded = bytes.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte));
    0u8.wrapping_sub(folded)
}

/// Header checksum (checksum 1) over the responder address and NetFn/LUN.
pub fn header_checksum(responder_address: u8, netfn_lun: u8) -> u8 {
    checksum(&[responder_address, netfn_lun])
}

/// Assemble the bytes covered by the body checksum (checksum 2), in wire order.
///
/// The completion code participates only when `message` is a response.
/// Fails without touching the payload when `payload_length` exceeds capacity.
pub fn body_checksum_input<const CAP: usize>(message: &Message<CAP>) -> Result<Bytes> {
    let payload = message.payload()?;

    let mut input = BytesMut::with_capacity(BODY_PREFIX_MAX + payload.len());
    input.put_u8(message.requester_address);
    input.put_u8(message.seq_lun);
    input.put_u8(message.command);
    if message.is_response() {
        input.put_u8(message.completion_code);
    }
    input.put_slice(payload);

    Ok(input.freeze())
}

/// Body checksum (checksum 2) for `message` as it currently stands.
pub fn body_checksum<const CAP: usize>(message: &Message<CAP>) -> Result<u8> {
    body_checksum_input(message).map(|input| checksum(&input))
}

/// Reject a payload length the message buffer cannot hold.
pub(crate) fn check_length(length: usize, capacity: usize) -> Result<()> {
    if length > capacity {
        return Err(FrameError::InvalidLength { length, capacity });
    }
    Ok(())
}
