use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::input::parse_byte;
use crate::output::OutputFormat;

pub mod checksum;
pub mod respond;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the two's-complement checksum of a byte string.
    Checksum(ChecksumArgs),
    /// Decode a wire message and verify both checksums.
    Validate(ValidateArgs),
    /// Decode a request and print the response envelope for it.
    Respond(RespondArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Checksum(args) => checksum::run(args, format),
        Command::Validate(args) => validate::run(args, format),
        Command::Respond(args) => respond::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ChecksumArgs {
    /// Bytes as hex (e.g. "20 06").
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Wire message as hex (e.g. "20 18 C8 81 00 01 7E").
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the raw wire message from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RespondArgs {
    /// Request wire message as hex.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read the raw request from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Completion code (decimal or 0x-prefixed hex).
    #[arg(long, short = 'c', default_value = "0", value_parser = parse_byte)]
    pub completion_code: u8,
    /// Response payload as hex.
    #[arg(long)]
    pub data: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
