use ipmiprims_frame::{Message, PAYLOAD_CAPACITY};

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpmiResult {
    Ok = 0,
    InvalidArgument = 1,
    InvalidLength = 2,
    InvalidHeaderChecksum = 3,
    InvalidBodyChecksum = 4,
    PayloadTooLarge = 5,
    Internal = 99,
}

#[allow(dead_code)]
pub const IPMI_OK: IpmiResult = IpmiResult::Ok;
#[allow(dead_code)]
pub const IPMI_ERR_INVALID_ARGUMENT: IpmiResult = IpmiResult::InvalidArgument;
#[allow(dead_code)]
pub const IPMI_ERR_INVALID_LENGTH: IpmiResult = IpmiResult::InvalidLength;
#[allow(dead_code)]
pub const IPMI_ERR_HEADER_CHECKSUM: IpmiResult = IpmiResult::InvalidHeaderChecksum;
#[allow(dead_code)]
pub const IPMI_ERR_BODY_CHECKSUM: IpmiResult = IpmiResult::InvalidBodyChecksum;
#[allow(dead_code)]
pub const IPMI_ERR_PAYLOAD_TOO_LARGE: IpmiResult = IpmiResult::PayloadTooLarge;
#[allow(dead_code)]
pub const IPMI_ERR_INTERNAL: IpmiResult = IpmiResult::Internal;

/// Size of the `data` buffer in [`IpmiMsg`].
pub const IPMI_PACKET_MAX_BUFFER: usize = PAYLOAD_CAPACITY;

/// C layout of an IPMB message.
///
/// `data_len` is taken as given; values above [`IPMI_PACKET_MAX_BUFFER`] are
/// reported as `InvalidLength` rather than clamped.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpmiMsg {
    pub rs_addr: u8,
    pub netfn_lun: u8,
    pub checksum1: u8,
    pub rq_addr: u8,
    pub rq_seq_lun: u8,
    pub cmd: u8,
    pub completion_code: u8,
    pub data: [u8; IPMI_PACKET_MAX_BUFFER],
    pub checksum2: u8,
    pub data_len: usize,
}

impl Default for IpmiMsg {
    fn default() -> Self {
        Self {
            rs_addr: 0,
            netfn_lun: 0,
            checksum1: 0,
            rq_addr: 0,
            rq_seq_lun: 0,
            cmd: 0,
            completion_code: 0,
            data: [0; IPMI_PACKET_MAX_BUFFER],
            checksum2: 0,
            data_len: 0,
        }
    }
}

impl From<&IpmiMsg> for Message {
    fn from(msg: &IpmiMsg) -> Self {
        Self {
            responder_address: msg.rs_addr,
            netfn_lun: msg.netfn_lun,
            header_checksum: msg.checksum1,
            requester_address: msg.rq_addr,
            seq_lun: msg.rq_seq_lun,
            command: msg.cmd,
            completion_code: msg.completion_code,
            payload: msg.data,
            payload_length: msg.data_len,
            body_checksum: msg.checksum2,
        }
    }
}

impl From<&Message> for IpmiMsg {
    fn from(msg: &Message) -> Self {
        Self {
            rs_addr: msg.responder_address,
            netfn_lun: msg.netfn_lun,
            checksum1: msg.header_checksum,
            rq_addr: msg.requester_address,
            rq_seq_lun: msg.seq_lun,
            cmd: msg.command,
            completion_code: msg.completion_code,
            data: msg.payload,
            checksum2: msg.body_checksum,
            data_len: msg.payload_length,
        }
    }
}
