//! Launch the OpenCode metadata manager (TUI or CLI).
//!
//! Usage:
//!   opencode-manager                    # Launch TUI (default)
//!   opencode-manager projects list      # CLI: list projects
//!   opencode-manager sessions list      # CLI: list sessions
//!   opencode-manager -- --help          # Show TUI help
//!   opencode-manager --bun ~/.bun/bin/bun chat

use colored::Colorize;
use tracing::warn;

use opencode_manager::{launch, load_config, utils::init_logger, LauncherConfig};

fn main() {
    init_logger();

    let config = load_config().unwrap_or_else(|e| {
        warn!("Ignoring configuration: {:#}", e);
        LauncherConfig::default()
    });

    let code = match launch(&config, std::env::args().skip(1)) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
