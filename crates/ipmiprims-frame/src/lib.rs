//! IPMB message framing for IPMI.
//!
//! This is the core integrity layer of ipmiprims. Every message carries two
//! two's-complement checksums:
//! - Checksum 1 over the responder address and NetFn/LUN
//! - Checksum 2 over the requester address, sequence/LUN, command, the
//!   completion code (responses only), and the payload
//!
//! A message is validated before it is routed to a handler, and handlers
//! build their reply with [`build_response`]. No I/O happens here.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod message;
pub mod response;
pub mod validate;

pub use checksum::{body_checksum, body_checksum_input, checksum, header_checksum, sum};
pub use codec::{
    decode_message, encode_message, CodecConfig, HEADER_SIZE, REQUEST_MIN_SIZE, RESPONSE_MIN_SIZE,
};
pub use error::{FrameError, Result};
pub use message::{is_response, lun, netfn, netfn_lun, Message, PAYLOAD_CAPACITY, RESPONSE_BIT};
pub use response::build_response;
pub use validate::validate;
