use bytes::{Buf, BufMut, BytesMut};
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::message::{is_response, Message};
use crate::validate::validate;

/// Connection header: responder address + NetFn/LUN + checksum 1.
pub const HEADER_SIZE: usize = 3;

/// Smallest request on the wire: header + requester + seq/LUN + command + checksum 2.
pub const REQUEST_MIN_SIZE: usize = HEADER_SIZE + 4;

/// Smallest response on the wire: a request plus the completion code.
pub const RESPONSE_MIN_SIZE: usize = REQUEST_MIN_SIZE + 1;

/// Configuration for the message codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Run [`validate`] on every decoded message. Default: true.
    pub verify_checksums: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            verify_checksums: true,
        }
    }
}

impl<const CAP: usize> Message<CAP> {
    /// The total wire size of this message.
    pub fn wire_size(&self) -> usize {
        let min = if self.is_response() {
            RESPONSE_MIN_SIZE
        } else {
            REQUEST_MIN_SIZE
        };
        min + self.payload_length
    }
}

/// Encode a message into the IPMB wire format.
///
/// Wire format:
/// ```text
/// ┌────────┬───────────┬─────┐┌────────┬─────────┬─────┬──────────┬──────────┬─────┐
/// │ rsAddr │ NetFn/LUN │ cs1 ││ rqAddr │ Seq/LUN │ cmd │ [cc]     │ payload  │ cs2 │
/// │  (1B)  │   (1B)    │(1B) ││  (1B)  │  (1B)   │(1B) │(response)│ (len B)  │(1B) │
/// └────────┴───────────┴─────┘└────────┴─────────┴─────┴──────────┴──────────┴─────┘
/// ```
///
/// Checksum bytes are written as stored; seal the message first.
pub fn encode_message<const CAP: usize>(msg: &Message<CAP>, dst: &mut BytesMut) -> Result<()> {
    let payload = msg.payload()?;

    dst.reserve(msg.wire_size());
    dst.put_u8(msg.responder_address);
    dst.put_u8(msg.netfn_lun);
    dst.put_u8(msg.header_checksum);
    dst.put_u8(msg.requester_address);
    dst.put_u8(msg.seq_lun);
    dst.put_u8(msg.command);
    if msg.is_response() {
        dst.put_u8(msg.completion_code);
    }
    dst.put_slice(payload);
    dst.put_u8(msg.body_checksum);
    Ok(())
}

/// Decode one complete message from `src`.
///
/// `src` holds a whole bus transaction; every byte between the body prefix and
/// the trailing checksum is payload. With `config.verify_checksums` set the
/// result is also run through [`validate`].
pub fn decode_message<const CAP: usize>(src: &[u8], config: &CodecConfig) -> Result<Message<CAP>> {
    let response = src.len() > 1 && is_response(src[1]);
    let min = if response {
        RESPONSE_MIN_SIZE
    } else {
        REQUEST_MIN_SIZE
    };
    if src.len() < min {
        return Err(FrameError::Truncated {
            len: src.len(),
            min,
        });
    }

    let payload_len = src.len() - min;
    if payload_len > CAP {
        return Err(FrameError::PayloadTooLarge {
            size: payload_len,
            max: CAP,
        });
    }

    let mut buf = src;
    let mut msg = Message::<CAP> {
        responder_address: buf.get_u8(),
        netfn_lun: buf.get_u8(),
        header_checksum: buf.get_u8(),
        requester_address: buf.get_u8(),
        seq_lun: buf.get_u8(),
        command: buf.get_u8(),
        ..Message::default()
    };
    if response {
        msg.completion_code = buf.get_u8();
    }
    buf.copy_to_slice(&mut msg.payload[..payload_len]);
    msg.payload_length = payload_len;
    msg.body_checksum = buf.get_u8();

    if config.verify_checksums {
        if let Err(err) = validate(&msg) {
            debug!(%err, len = src.len(), "dropping message that failed validation");
            return Err(err);
        }
    }

    Ok(msg)
}
