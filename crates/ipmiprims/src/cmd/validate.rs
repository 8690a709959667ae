use ipmiprims_frame::{decode_message, validate, CodecConfig, Message};

use crate::cmd::ValidateArgs;
use crate::exit::{frame_error, CliResult, DATA_INVALID, SUCCESS};
use crate::input::read_message;
use crate::output::{print_message, MessageReport, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = read_message(args.hex.as_deref(), args.file.as_deref())?;

    // Decode without verification so an invalid message can still be shown.
    let config = CodecConfig {
        verify_checksums: false,
    };
    let msg: Message =
        decode_message(&bytes, &config).map_err(|err| frame_error("decode failed", err))?;

    let verdict = validate(&msg);
    if let Err(err) = &verdict {
        tracing::warn!(error = %err, "message failed validation");
    }

    print_message(&MessageReport::new(&msg, verdict.as_ref().err()), format);

    match verdict {
        Ok(()) => Ok(SUCCESS),
        Err(_) => Ok(DATA_INVALID),
    }
}
