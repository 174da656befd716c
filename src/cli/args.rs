use tracing::debug;

use crate::constants::{PASSTHROUGH_SEPARATOR, RUNTIME_OVERRIDE_FLAG};

/// Wrapper-level options pulled out of the raw arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapperOptions {
    /// Value of the last `--bun` occurrence
    pub runtime_override: Option<String>,
    /// Everything else, in original order
    pub forwarded: Vec<String>,
}

/// Extract `--bun <path>` and `--bun=<path>` in a single left-to-right pass.
///
/// A later occurrence overwrites an earlier one. A trailing `--bun` with no
/// value is not an occurrence and is forwarded as-is.
pub fn extract_wrapper_options<I, S>(argv: I) -> WrapperOptions
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let value_prefix = format!("{}=", RUNTIME_OVERRIDE_FLAG);
    let mut options = WrapperOptions::default();
    let mut args = argv.into_iter().map(Into::<String>::into);

    while let Some(arg) = args.next() {
        if arg == RUNTIME_OVERRIDE_FLAG {
            if let Some(value) = args.next() {
                options.runtime_override = Some(value);
                continue;
            }
            options.forwarded.push(arg);
        } else if let Some(value) = arg.strip_prefix(&value_prefix) {
            options.runtime_override = Some(value.to_string());
        } else {
            options.forwarded.push(arg);
        }
    }

    debug!(
        "Wrapper options: runtime override {:?}, {} forwarded args",
        options.runtime_override,
        options.forwarded.len()
    );
    options
}

/// Drop a leading bare `--` (legacy passthrough syntax). Later ones are kept.
pub fn strip_passthrough_separator(mut args: Vec<String>) -> Vec<String> {
    if args.first().map(String::as_str) == Some(PASSTHROUGH_SEPARATOR) {
        args.remove(0);
    }
    args
}
