use ipmiprims_frame::{build_response, decode_message, CodecConfig, Message};

use crate::cmd::RespondArgs;
use crate::exit::{frame_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::input::{parse_hex, read_message};
use crate::output::{print_message, MessageReport, OutputFormat};

pub fn run(args: RespondArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = read_message(args.hex.as_deref(), args.file.as_deref())?;
    let request: Message = decode_message(&bytes, &CodecConfig::default())
        .map_err(|err| frame_error("request rejected", err))?;

    if request.is_response() {
        return Err(CliError::new(
            DATA_INVALID,
            format!(
                "request rejected: NetFn {:#04x} (NetFn/LUN {:#04x}) is already a response",
                request.netfn(),
                request.netfn_lun
            ),
        ));
    }

    let payload = match &args.data {
        Some(data) => parse_hex(data)?,
        None => Vec::new(),
    };

    let response = build_response(&request, args.completion_code, &payload)
        .map_err(|err| frame_error("build failed", err))?;
    tracing::debug!(
        command = response.command,
        completion_code = response.completion_code,
        payload_length = response.payload_length,
        "built response"
    );

    print_message(&MessageReport::new(&response, None), format);
    Ok(SUCCESS)
}
