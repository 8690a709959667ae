use std::fs;
use std::path::Path;

use crate::exit::{io_error, CliError, CliResult, USAGE};

/// Decode a hex byte string, ignoring whitespace, `:` and `-` separators, and `0x` prefixes.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let cleaned: String = input
        .split(|c: char| c.is_whitespace() || c == ':' || c == '-')
        .map(|chunk| {
            chunk
                .strip_prefix("0x")
                .or_else(|| chunk.strip_prefix("0X"))
                .unwrap_or(chunk)
        })
        .collect();

    hex::decode(&cleaned).map_err(|err| CliError::new(USAGE, format!("invalid hex input: {err}")))
}

/// Resolve the message bytes from a hex argument or a raw binary file.
pub fn read_message(hex: Option<&str>, file: Option<&Path>) -> CliResult<Vec<u8>> {
    if let Some(hex) = hex {
        return parse_hex(hex);
    }
    if let Some(path) = file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Err(CliError::new(USAGE, "either a hex message or --file is required"))
}

/// Parse a single byte given as decimal or `0x`-prefixed hex.
pub fn parse_byte(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(digits) => u8::from_str_radix(digits, 16),
        None => input.parse::<u8>(),
    };
    parsed.map_err(|_| format!("expected a byte (0-255 or 0x00-0xFF), got {input:?}"))
}
