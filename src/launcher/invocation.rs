use serde::Serialize;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

use crate::{
    constants::{EXIT_FAILURE, EXIT_SIGNAL_BASE},
    utils::LauncherError,
};

/// A fully assembled child process: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildInvocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ChildInvocation {
    /// Build the command with stdin, stdout and stderr inherited
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .current_dir(&self.cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Fail early when the working directory is missing, so the error
    /// names the directory rather than the program
    fn check_working_dir(&self) -> Result<(), LauncherError> {
        let metadata = std::fs::metadata(&self.cwd).map_err(|source| LauncherError::WorkingDir {
            path: self.cwd.clone(),
            source,
        })?;

        if !metadata.is_dir() {
            return Err(LauncherError::WorkingDir {
                path: self.cwd.clone(),
                source: std::io::Error::other("not a directory"),
            });
        }
        Ok(())
    }

    /// Run to completion and return the child's exit code
    pub fn run(&self) -> Result<i32, LauncherError> {
        self.check_working_dir()?;

        debug!(
            "Spawning {} {:?} in {}",
            self.program.display(),
            self.args,
            self.cwd.display()
        );

        let status = self
            .command()
            .status()
            .map_err(|source| LauncherError::ChildLaunch {
                program: self.program.clone(),
                source,
            })?;

        let code = exit_code_of(status);
        debug!("Child exited with {}", code);
        Ok(code)
    }
}

/// Map an exit status to a process exit code.
/// A signal-terminated child on Unix maps to 128 + signal, as shells report it.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return EXIT_SIGNAL_BASE + signal;
        }
    }

    EXIT_FAILURE
}
