use std::path::PathBuf;
use thiserror::Error;

use crate::constants::{EXIT_FAILURE, EXIT_LAUNCH_FAILURE, EXIT_RUNTIME_NOT_FOUND};

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("{name} executable not found. Please install Bun (https://bun.sh).")]
    RuntimeNotFound { name: String },

    #[error("Failed to launch {}: {source}", program.display())]
    ChildLaunch {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Working directory {} is not usable: {source}. Set project_dir in the config or OPENCODE_MANAGER_PROJECT_DIR.",
        path.display()
    )]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render launch plan: {0}")]
    Render(#[from] serde_json::Error),
}

impl LauncherError {
    /// Exit code the launcher terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RuntimeNotFound { .. } => EXIT_RUNTIME_NOT_FOUND,
            Self::ChildLaunch { .. } | Self::WorkingDir { .. } => EXIT_LAUNCH_FAILURE,
            Self::Render(_) => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let not_found = LauncherError::RuntimeNotFound {
            name: "bun".to_string(),
        };
        let launch = LauncherError::ChildLaunch {
            program: PathBuf::from("/nope/bun"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert_eq!(not_found.exit_code(), EXIT_RUNTIME_NOT_FOUND);
        assert_eq!(launch.exit_code(), EXIT_LAUNCH_FAILURE);
        assert_ne!(not_found.exit_code(), 0);
        assert_ne!(launch.exit_code(), not_found.exit_code());
    }

    #[test]
    fn test_not_found_message_suggests_install() {
        let err = LauncherError::RuntimeNotFound {
            name: "bun".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("bun executable not found"));
        assert!(message.contains("install Bun"));
    }

    #[test]
    fn test_working_dir_message_names_directory() {
        let err = LauncherError::WorkingDir {
            path: PathBuf::from("/moved/build/tree"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let message = err.to_string();
        assert!(message.contains("/moved/build/tree"));
        assert!(!message.contains("Failed to launch"));
        assert_eq!(err.exit_code(), EXIT_LAUNCH_FAILURE);
    }

    #[test]
    fn test_launch_message_names_program() {
        let err = LauncherError::ChildLaunch {
            program: PathBuf::from("/opt/bun/bin/bun"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/opt/bun/bin/bun"));
    }
}
