#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

fn ipmiprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipmiprims"))
        .args(["--log-level", "error", "--format", "json"])
        .args(args)
        .output()
        .expect("ipmiprims should run")
}

fn json_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be json")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "ipmicli-{tag}-{}-{}.bin",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn validate_accepts_get_device_id_request() {
    let output = ipmiprims(&["validate", "20 18 C8 81 00 01 7E"]);

    assert!(output.status.success());
    let report = json_stdout(&output);
    assert_eq!(report["valid"], true);
    assert_eq!(report["kind"], "request");
    assert_eq!(report["netfn"], 0x06);
    assert_eq!(report["lun"], 0);
    assert_eq!(report["command"], 1);
    assert!(report.get("completion_code").is_none());
}

#[test]
fn validate_reports_header_checksum_failure() {
    let output = ipmiprims(&["validate", "20 18 00 81 00 01 7E"]);

    assert_eq!(output.status.code(), Some(60));
    let report = json_stdout(&output);
    assert_eq!(report["valid"], false);
    assert!(report["error"]
        .as_str()
        .expect("error should be a string")
        .contains("header checksum"));
}

#[test]
fn validate_reports_body_checksum_failure() {
    let output = ipmiprims(&["validate", "20 18 C8 81 00 01 00"]);

    assert_eq!(output.status.code(), Some(60));
    let report = json_stdout(&output);
    assert!(report["error"]
        .as_str()
        .expect("error should be a string")
        .contains("body checksum"));
}

#[test]
fn validate_rejects_truncated_message() {
    let output = ipmiprims(&["validate", "20 18 C8"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated message"));
}

#[test]
fn validate_reads_raw_file() {
    let path = unique_temp_file("validate");
    std::fs::write(&path, [0x20, 0x18, 0xC8, 0x81, 0x00, 0x01, 0x7E])
        .expect("temp file should be writable");

    let output = ipmiprims(&["validate", "--file", path.to_str().expect("utf-8 path")]);

    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["valid"], true);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn respond_builds_checksummed_response() {
    // NetFn 0x06 on LUN 3: the increment carries into NetFn 0x07.
    let output = ipmiprims(&["respond", "20 1B C5 81 00 01 7E", "--completion-code", "0"]);

    assert!(output.status.success());
    let report = json_stdout(&output);
    assert_eq!(report["kind"], "response");
    assert_eq!(report["responder_address"], 0x81);
    assert_eq!(report["requester_address"], 0x20);
    assert_eq!(report["netfn_lun"], 0x1C);
    assert_eq!(report["netfn"], 0x07);
    assert_eq!(report["lun"], 0);
    assert_eq!(report["completion_code"], 0);
    assert_eq!(report["wire"], "811c6320000100df");
    assert_eq!(report["valid"], true);
}

#[test]
fn respond_to_lun_zero_request_only_moves_lun() {
    let output = ipmiprims(&["respond", "20 18 C8 81 00 01 7E", "-c", "0xC1"]);

    assert!(output.status.success());
    let report = json_stdout(&output);
    assert_eq!(report["kind"], "request");
    assert_eq!(report["netfn_lun"], 0x19);
    assert_eq!(report["netfn"], 0x06);
    assert_eq!(report["lun"], 1);
    assert!(report.get("completion_code").is_none());
    assert_eq!(report["wire"], "811966200001df");
    assert_eq!(report["valid"], true);
}

#[test]
fn respond_rejects_response_input() {
    let output = ipmiprims(&["respond", "81 1C 63 20 00 01 C1 1E"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already a response"));
}

#[test]
fn respond_output_validates() {
    let output = ipmiprims(&[
        "respond",
        "20 1B C5 81 00 01 7E",
        "-c",
        "0xC1",
        "--data",
        "DE AD BE EF",
    ]);
    assert!(output.status.success());
    let wire = json_stdout(&output)["wire"]
        .as_str()
        .expect("wire should be a string")
        .to_string();

    let output = ipmiprims(&["validate", &wire]);
    assert!(output.status.success());
    let report = json_stdout(&output);
    assert_eq!(report["completion_code"], 0xC1);
    assert_eq!(report["payload"], "deadbeef");
}

#[test]
fn respond_rejects_invalid_request() {
    let output = ipmiprims(&["respond", "20 18 00 81 00 01 7E"]);

    assert_eq!(output.status.code(), Some(60));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("request rejected"));
}

#[test]
fn checksum_prints_sum_and_checksum() {
    let output = ipmiprims(&["checksum", "20 06"]);

    assert!(output.status.success());
    let report = json_stdout(&output);
    assert_eq!(report["sum"], 0x26);
    assert_eq!(report["checksum"], 0xDA);
}

#[test]
fn invalid_hex_is_usage_error() {
    let output = ipmiprims(&["checksum", "zz"]);
    assert_eq!(output.status.code(), Some(64));
}

#[test]
fn version_reports_package_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_ipmiprims"))
        .arg("version")
        .output()
        .expect("version should run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("ipmiprims {}", env!("CARGO_PKG_VERSION"))
    );
}
