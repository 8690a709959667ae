/// Errors that can occur while validating, building, or decoding IPMI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The declared payload length exceeds the message payload capacity.
    #[error("invalid payload length ({length} bytes, capacity {capacity})")]
    InvalidLength { length: usize, capacity: usize },

    /// The header checksum does not cover `responder_address` and `netfn_lun`.
    #[error("invalid header checksum (expected {expected:#04x}, found {found:#04x})")]
    InvalidHeaderChecksum { expected: u8, found: u8 },

    /// The body checksum does not cover the request/response body.
    #[error("invalid body checksum (expected {expected:#04x}, found {found:#04x})")]
    InvalidBodyChecksum { expected: u8, found: u8 },

    /// A response payload does not fit in the message payload capacity.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The wire buffer is shorter than the smallest message of its kind.
    #[error("truncated message ({len} bytes, need at least {min})")]
    Truncated { len: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
