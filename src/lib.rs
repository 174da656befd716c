pub mod app;
pub mod cli;
pub mod constants;
pub mod launcher;
pub mod runtime;
pub mod utils;

pub use app::{load_config, LauncherConfig};
pub use cli::{classify, ExecutionMode};
pub use launcher::{launch, Dispatcher, LaunchPlan};
pub use runtime::RuntimeLocator;
pub use utils::LauncherError;
