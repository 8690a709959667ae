use tracing::{debug, trace};

use crate::checksum::{check_length, sum};
use crate::error::{FrameError, Result};
use crate::message::Message;

/// Validate both checksums of `message`.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. `payload_length` within capacity ([`FrameError::InvalidLength`])
/// 2. header checksum ([`FrameError::InvalidHeaderChecksum`])
/// 3. body checksum, including the completion code for responses
///    ([`FrameError::InvalidBodyChecksum`])
pub fn validate<const CAP: usize>(message: &Message<CAP>) -> Result<()> {
    if let Err(err) = check_length(message.payload_length, CAP) {
        debug!(
            length = message.payload_length,
            capacity = CAP,
            "rejecting message with invalid payload length"
        );
        return Err(err);
    }

    let header = sum(&[
        message.responder_address,
        message.netfn_lun,
        message.header_checksum,
    ]);
    if header % 256 != 0 {
        let found = message.header_checksum;
        let expected = corrected(found, header);
        debug!(expected, found, "header checksum mismatch");
        return Err(FrameError::InvalidHeaderChecksum { expected, found });
    }

    let mut body = sum(&[
        message.requester_address,
        message.seq_lun,
        message.command,
        message.body_checksum,
    ]);
    body = body.wrapping_add(sum(&message.payload[..message.payload_length]));
    if message.is_response() {
        body = body.wrapping_add(u64::from(message.completion_code));
    }
    if body % 256 != 0 {
        let found = message.body_checksum;
        let expected = corrected(found, body);
        debug!(
            expected,
            found,
            response = message.is_response(),
            "body checksum mismatch"
        );
        return Err(FrameError::InvalidBodyChecksum { expected, found });
    }

    trace!(
        netfn_lun = message.netfn_lun,
        command = message.command,
        payload_length = message.payload_length,
        "message checksums valid"
    );
    Ok(())
}

/// The checksum byte that would have brought `total` to zero mod 256.
fn corrected(found: u8, total: u64) -> u8 {
    found.wrapping_sub((total % 256) as u8)
}
