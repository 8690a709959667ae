use crate::cmd::ChecksumArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::input::parse_hex;
use crate::output::{print_checksum, ChecksumReport, OutputFormat};

pub fn run(args: ChecksumArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = parse_hex(&args.hex)?;
    print_checksum(&ChecksumReport::new(&bytes), format);
    Ok(SUCCESS)
}
