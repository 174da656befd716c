/// Constants module to avoid magic strings in the launcher

// External runtime
pub const RUNTIME_NAME: &str = "bun";
pub const ENTRYPOINT: &str = "src/bin/opencode-manager.ts";

// CLI subcommands that route to the CLI module instead of the TUI
pub const CLI_SUBCOMMANDS: &[&str] = &["projects", "sessions", "chat", "tokens"];

// Argument syntax
pub const RUNTIME_OVERRIDE_FLAG: &str = "--bun";
pub const PASSTHROUGH_SEPARATOR: &str = "--";
pub const FLAG_PREFIX: char = '-';

// Exit codes reserved for the launcher itself
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_LAUNCH_FAILURE: i32 = 126;
pub const EXIT_RUNTIME_NOT_FOUND: i32 = 127;
pub const EXIT_SIGNAL_BASE: i32 = 128;

// Configuration
pub const CONFIG_ENV_PREFIX: &str = "OPENCODE_MANAGER_";
pub const CONFIG_FILE_NAME: &str = "config.toml";
