//! IPMI message integrity over IPMB.
//!
//! ipmiprims validates and builds the envelope of IPMI messages exchanged over
//! IPMB: the header and body checksums, and the request-to-response transform.
//! Command dispatch, NetFn catalogs, and bus I/O live with the caller.
//!
//! # Crate Structure
//!
//! - [`frame`] — Checksum engine, validator, response builder, and wire codec
//!
//! # Example
//!
//! ```
//! use ipmiprims::frame::{build_response, netfn_lun, validate, Message};
//!
//! // Get Device ID (App NetFn 0x06) from 0x81 to the BMC at 0x20.
//! let request: Message =
//!     Message::request(0x20, netfn_lun(0x06, 0), 0x81, 0x00, 0x01, &[]).unwrap();
//! assert!(validate(&request).is_ok());
//!
//! let response = build_response(&request, 0x00, &[0x20, 0x01]).unwrap();
//! assert_eq!(response.responder_address, 0x81);
//! assert!(validate(&response).is_ok());
//! ```

/// Re-export frame types.
pub mod frame {
    pub use ipmiprims_frame::*;
}
