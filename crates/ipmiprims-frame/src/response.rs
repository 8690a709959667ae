use tracing::{debug, trace};

use crate::error::Result;
use crate::message::Message;

/// Build the response to `request`.
///
/// Addresses are swapped, the NetFn/LUN byte is incremented by one (plain
/// 8-bit wraparound, so `0xFF` becomes `0x00`), sequence and command are
/// copied, and both checksums are computed for the new message.
///
/// Fails with [`FrameError::PayloadTooLarge`](crate::FrameError::PayloadTooLarge)
/// if `payload` does not fit; no message is produced in that case.
pub fn build_response<const CAP: usize>(
    request: &Message<CAP>,
    completion_code: u8,
    payload: &[u8],
) -> Result<Message<CAP>> {
    let mut response = Message {
        responder_address: request.requester_address,
        netfn_lun: request.netfn_lun.wrapping_add(1),
        requester_address: request.responder_address,
        seq_lun: request.seq_lun,
        command: request.command,
        completion_code,
        ..Message::default()
    };

    if let Err(err) = response.set_payload(payload) {
        debug!(
            size = payload.len(),
            capacity = CAP,
            command = request.command,
            "response payload does not fit"
        );
        return Err(err);
    }
    response.seal()?;

    trace!(
        netfn_lun = response.netfn_lun,
        command = response.command,
        completion_code,
        payload_length = response.payload_length,
        "built response"
    );
    Ok(response)
}
