use crate::checksum::{self, check_length};
use crate::error::{FrameError, Result};

/// Default payload capacity of a [`Message`], in bytes.
///
/// This is a sizing choice for the fixed buffer, not an IPMB protocol limit.
/// Use `Message::<N>` for a different capacity.
pub const PAYLOAD_CAPACITY: usize = 256;

/// Lowest bit of the NetFn: clear for requests, set for responses.
pub const RESPONSE_BIT: u8 = 0x01;

const LUN_MASK: u8 = 0x03;
const NETFN_SHIFT: u32 = 2;

/// NetFn from a packed NetFn/LUN byte (upper 6 bits).
pub fn netfn(netfn_lun: u8) -> u8 {
    netfn_lun >> NETFN_SHIFT
}

/// LUN from a packed NetFn/LUN byte (lower 2 bits).
pub fn lun(netfn_lun: u8) -> u8 {
    netfn_lun & LUN_MASK
}

/// Pack a NetFn and LUN into one byte.
///
/// Only the low 6 bits of `netfn` and the low 2 bits of `lun` are kept.
pub fn netfn_lun(netfn: u8, lun: u8) -> u8 {
    (netfn << NETFN_SHIFT) | (lun & LUN_MASK)
}

/// Returns `true` when the NetFn packed in `netfn_lun` is odd (a response).
pub fn is_response(netfn_lun: u8) -> bool {
    netfn(netfn_lun) & RESPONSE_BIT != 0
}

/// An IPMI request or response carried over IPMB.
///
/// `payload` is a fixed buffer of `CAP` bytes; only `payload[..payload_length]`
/// is meaningful. `payload_length` is deliberately left public and unchecked
/// so that malformed input stays representable: every operation that reads the
/// payload rejects a length above `CAP` instead of clamping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message<const CAP: usize = PAYLOAD_CAPACITY> {
    /// Responder's bus address (7-bit, stored as a full byte).
    pub responder_address: u8,
    /// NetFn in the upper 6 bits, LUN in the lower 2 bits.
    pub netfn_lun: u8,
    /// Checksum 1, over `responder_address` and `netfn_lun`.
    pub header_checksum: u8,
    /// Requester's bus address.
    pub requester_address: u8,
    /// Sequence number and LUN. Opaque here.
    pub seq_lun: u8,
    /// Command code within the NetFn. Opaque here.
    pub command: u8,
    /// Response status; only covered by checksum 2 for responses.
    pub completion_code: u8,
    /// Payload buffer.
    pub payload: [u8; CAP],
    /// Number of valid bytes in `payload`.
    pub payload_length: usize,
    /// Checksum 2, over the body fields and payload.
    pub body_checksum: u8,
}

impl<const CAP: usize> Default for Message<CAP> {
    fn default() -> Self {
        Self {
            responder_address: 0,
            netfn_lun: 0,
            header_checksum: 0,
            requester_address: 0,
            seq_lun: 0,
            command: 0,
            completion_code: 0,
            payload: [0; CAP],
            payload_length: 0,
            body_checksum: 0,
        }
    }
}

impl<const CAP: usize> Message<CAP> {
    /// Build a request with both checksums filled in.
    ///
    /// `netfn_lun` is used as given; pack an even NetFn for a request.
    pub fn request(
        responder_address: u8,
        netfn_lun: u8,
        requester_address: u8,
        seq_lun: u8,
        command: u8,
        payload: &[u8],
    ) -> Result<Self> {
        let mut msg = Self {
            responder_address,
            netfn_lun,
            requester_address,
            seq_lun,
            command,
            ..Self::default()
        };
        msg.set_payload(payload)?;
        msg.seal()?;
        Ok(msg)
    }

    /// Payload capacity of this message type.
    pub const fn capacity() -> usize {
        CAP
    }

    /// Network function (upper 6 bits of `netfn_lun`).
    pub fn netfn(&self) -> u8 {
        netfn(self.netfn_lun)
    }

    /// Logical unit number (lower 2 bits of `netfn_lun`).
    pub fn lun(&self) -> u8 {
        lun(self.netfn_lun)
    }

    /// Whether this message is a response (odd NetFn).
    pub fn is_response(&self) -> bool {
        is_response(self.netfn_lun)
    }

    /// The valid payload prefix.
    ///
    /// Fails with [`FrameError::InvalidLength`] if `payload_length` exceeds the capacity.
    pub fn payload(&self) -> Result<&[u8]> {
        check_length(self.payload_length, CAP)?;
        Ok(&self.payload[..self.payload_length])
    }

    pub(crate) fn set_payload(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > CAP {
            return Err(FrameError::PayloadTooLarge {
                size: payload.len(),
                max: CAP,
            });
        }
        self.payload[..payload.len()].copy_from_slice(payload);
        self.payload_length = payload.len();
        Ok(())
    }

    /// Recompute both checksum fields from the current contents.
    pub(crate) fn seal(&mut self) -> Result<()> {
        self.header_checksum = checksum::header_checksum(self.responder_address, self.netfn_lun);
        self.body_checksum = checksum::body_checksum(self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn netfn_lun_packing() {
        assert_eq!(netfn_lun(0x06, 0), 0x18);
        assert_eq!(netfn_lun(0x07, 0), 0x1C);
        assert_eq!(netfn_lun(0x0A, 3), 0x2B);
        assert_eq!(netfn_lun(0x06, 0x07), 0x1B);
        assert_eq!(netfn(0x1C), 0x07);
        assert_eq!(lun(0x1C), 0);
        assert_eq!(netfn(0x2B), 0x0A);
        assert_eq!(lun(0x2B), 3);
    }

    #[test]
    fn parity_follows_netfn_not_lun() {
        assert!(!is_response(0x18));
        assert!(is_response(0x1C));
        // LUN bits never mark a response.
        assert!(!is_response(0x19));
        assert!(!is_response(0x1B));
        assert!(is_response(0x1F));
        // NetFn 1 packed with LUN 2.
        assert!(is_response(0x06));
        assert!(is_response(0x07));
    }

    #[test]
    fn message_accessors_unpack_netfn_lun() {
        let msg = Message::<PAYLOAD_CAPACITY> {
            netfn_lun: netfn_lun(0x0A, 2),
            ..Message::default()
        };
        assert_eq!(msg.netfn(), 0x0A);
        assert_eq!(msg.lun(), 2);
        assert!(!msg.is_response());
    }

    #[test]
    fn request_is_sealed() {
        let msg: Message = Message::request(0x20, 0x18, 0x81, 0x00, 0x01, &[]).unwrap();

        assert_eq!(msg.header_checksum, checksum::checksum(&[0x20, 0x18]));
        assert_eq!(msg.body_checksum, checksum::checksum(&[0x81, 0x00, 0x01]));
        assert!(validate(&msg).is_ok());
    }

    #[test]
    fn response_with_completion_code_validates() {
        let mut msg = Message::<PAYLOAD_CAPACITY> {
            responder_address: 0x81,
            netfn_lun: 0x1C,
            requester_address: 0x20,
            seq_lun: 0x00,
            command: 0x01,
            completion_code: 0xC1,
            ..Message::default()
        };
        msg.header_checksum = checksum::checksum(&[0x81, 0x1C]);
        msg.body_checksum = checksum::checksum(&[0x20, 0x00, 0x01, 0xC1]);

        assert!(msg.is_response());
        assert_eq!(validate(&msg), Ok(()));
    }

    #[test]
    fn request_rejects_oversized_payload() {
        let err = Message::<4>::request(0x20, 0x18, 0x81, 0x00, 0x01, &[0; 5]).unwrap_err();
        assert_eq!(err, FrameError::PayloadTooLarge { size: 5, max: 4 });
    }

    #[test]
    fn payload_returns_valid_prefix() {
        let msg: Message = Message::request(0x20, 0x10, 0x81, 0x04, 0x2D, &[0x10, 0x20]).unwrap();
        assert_eq!(msg.payload().unwrap(), &[0x10, 0x20]);
        assert_eq!(Message::<PAYLOAD_CAPACITY>::capacity(), 256);
    }

    #[test]
    fn payload_rejects_length_past_capacity() {
        let msg = Message::<16> {
            payload_length: 17,
            ..Message::default()
        };
        assert!(matches!(
            msg.payload(),
            Err(FrameError::InvalidLength {
                length: 17,
                capacity: 16
            })
        ));
    }

    #[test]
    fn messages_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Message>();
    }
}
