use std::io::{IsTerminal, Write};

use bytes::BytesMut;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use ipmiprims_frame::{encode_message, FrameError, Message};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageReport {
    kind: &'static str,
    responder_address: u8,
    netfn_lun: u8,
    netfn: u8,
    lun: u8,
    header_checksum: u8,
    requester_address: u8,
    seq_lun: u8,
    command: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_code: Option<u8>,
    payload_length: usize,
    payload: String,
    body_checksum: u8,
    wire: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip)]
    wire_bytes: Vec<u8>,
}

impl MessageReport {
    /// Summarize `msg`; `error` is the validation failure, if any.
    pub fn new(msg: &Message, error: Option<&FrameError>) -> Self {
        let mut wire = BytesMut::new();
        let encoded = encode_message(msg, &mut wire);
        let error = error.or(encoded.as_ref().err()).map(ToString::to_string);

        Self {
            kind: if msg.is_response() {
                "response"
            } else {
                "request"
            },
            responder_address: msg.responder_address,
            netfn_lun: msg.netfn_lun,
            netfn: msg.netfn(),
            lun: msg.lun(),
            header_checksum: msg.header_checksum,
            requester_address: msg.requester_address,
            seq_lun: msg.seq_lun,
            command: msg.command,
            completion_code: msg.is_response().then_some(msg.completion_code),
            payload_length: msg.payload_length,
            payload: msg.payload().map(hex::encode).unwrap_or_default(),
            body_checksum: msg.body_checksum,
            wire: hex::encode(&wire),
            valid: error.is_none(),
            error,
            wire_bytes: wire.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChecksumReport {
    length: usize,
    sum: u64,
    checksum: u8,
}

impl ChecksumReport {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            length: bytes.len(),
            sum: ipmiprims_frame::sum(bytes),
            checksum: ipmiprims_frame::checksum(bytes),
        }
    }
}

pub fn print_message(report: &MessageReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut rows = vec![
                ("KIND", report.kind.to_string()),
                ("RS ADDR", byte(report.responder_address)),
                ("NETFN", byte(report.netfn)),
                ("LUN", report.lun.to_string()),
                ("CHECKSUM 1", byte(report.header_checksum)),
                ("RQ ADDR", byte(report.requester_address)),
                ("SEQ/LUN", byte(report.seq_lun)),
                ("COMMAND", byte(report.command)),
            ];
            if let Some(cc) = report.completion_code {
                rows.push(("COMPLETION", byte(cc)));
            }
            rows.push(("PAYLOAD", format!("[{}] {}", report.payload_length, report.payload)));
            rows.push(("CHECKSUM 2", byte(report.body_checksum)));
            rows.push(("STATUS", status(report)));

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in rows {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} rs={} netfn={} lun={} rq={} seq_lun={} cmd={} len={} wire={} status={}",
                report.kind,
                byte(report.responder_address),
                byte(report.netfn),
                report.lun,
                byte(report.requester_address),
                byte(report.seq_lun),
                byte(report.command),
                report.payload_length,
                report.wire,
                status(report)
            );
        }
        OutputFormat::Raw => print_raw(&report.wire_bytes),
    }
}

pub fn print_checksum(report: &ChecksumReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["LENGTH", "SUM", "CHECKSUM"])
                .add_row(vec![
                    report.length.to_string(),
                    report.sum.to_string(),
                    byte(report.checksum),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "length={} sum={} checksum={}",
                report.length,
                report.sum,
                byte(report.checksum)
            );
        }
        OutputFormat::Raw => print_raw(&[report.checksum]),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn byte(value: u8) -> String {
    format!("{value:#04x}")
}

fn status(report: &MessageReport) -> String {
    match &report.error {
        Some(err) => format!("invalid ({err})"),
        None => "valid".to_string(),
    }
}
