use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use super::ChildInvocation;
use crate::{
    app::LauncherConfig,
    cli::{classify, extract_wrapper_options, strip_passthrough_separator, ExecutionMode},
    constants::ENTRYPOINT,
    runtime::{ExecutableSearch, RuntimeLocator, SystemSearch},
    utils::LauncherError,
};

/// Everything decided about one invocation before anything is spawned
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub mode: ExecutionMode,
    pub runtime_override: Option<String>,
    pub invocation: ChildInvocation,
}

/// Routes wrapper arguments to the bun entrypoint
#[derive(Debug)]
pub struct Dispatcher<S = SystemSearch> {
    locator: RuntimeLocator<S>,
    entrypoint: String,
    working_dir: PathBuf,
    configured_runtime: Option<String>,
}

impl Dispatcher<SystemSearch> {
    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(RuntimeLocator::default(), config)
    }
}

impl<S: ExecutableSearch> Dispatcher<S> {
    pub fn new(locator: RuntimeLocator<S>, config: &LauncherConfig) -> Self {
        Self {
            locator,
            entrypoint: ENTRYPOINT.to_string(),
            working_dir: config.working_dir(),
            configured_runtime: config.bun.clone(),
        }
    }

    #[cfg(test)]
    fn with_entrypoint(mut self, entrypoint: &str) -> Self {
        self.entrypoint = entrypoint.to_string();
        self
    }

    /// Extract wrapper options, normalize, classify and resolve bun.
    /// Nothing is spawned.
    pub fn plan<I, T>(&self, argv: I) -> Result<LaunchPlan, LauncherError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let options = extract_wrapper_options(argv);
        let forwarded = strip_passthrough_separator(options.forwarded);

        let mode = classify(&forwarded);
        debug!("Execution mode: {}", mode);

        // Command line beats config; an empty value means "search"
        let runtime_override = options
            .runtime_override
            .or_else(|| self.configured_runtime.clone());
        let program = self.locator.require(runtime_override.as_deref())?;

        let mut args = Vec::with_capacity(forwarded.len() + 1);
        args.push(self.entrypoint.clone());
        args.extend(forwarded);

        Ok(LaunchPlan {
            mode,
            runtime_override,
            invocation: ChildInvocation {
                program,
                args,
                cwd: self.working_dir.clone(),
            },
        })
    }

    /// Plan and run, returning the child's exit code unchanged
    pub fn run<I, T>(&self, argv: I) -> Result<i32, LauncherError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let plan = self.plan(argv)?;
        info!(
            "Launching {} in {} mode",
            plan.invocation.program.display(),
            plan.mode
        );
        plan.invocation.run()
    }
}

/// Run the launcher for one set of arguments under the given configuration.
/// In dry-run mode the plan is printed as JSON instead of executed.
pub fn launch<I, T>(config: &LauncherConfig, argv: I) -> Result<i32, LauncherError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let dispatcher = Dispatcher::from_config(config);

    if config.dry_run {
        let plan = dispatcher.plan(argv)?;
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(0);
    }

    dispatcher.run(argv)
}
