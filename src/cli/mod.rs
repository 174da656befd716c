/// Wrapper argument handling and mode classification - Gateway
mod args;
mod mode;

pub use args::{extract_wrapper_options, strip_passthrough_separator, WrapperOptions};
pub use mode::{classify, first_positional, is_cli_subcommand, ExecutionMode};
