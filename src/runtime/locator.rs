use std::path::PathBuf;
use tracing::debug;

use crate::{constants::RUNTIME_NAME, utils::LauncherError};

/// Lookup of an executable by name, normally on PATH
#[cfg_attr(test, mockall::automock)]
pub trait ExecutableSearch {
    fn search(&self, name: &str) -> Option<PathBuf>;
}

/// PATH search backed by the `which` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSearch;

impl ExecutableSearch for SystemSearch {
    fn search(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Resolves the path of the bun executable
#[derive(Debug, Clone)]
pub struct RuntimeLocator<S = SystemSearch> {
    search: S,
    name: String,
}

impl Default for RuntimeLocator<SystemSearch> {
    fn default() -> Self {
        Self::new(SystemSearch)
    }
}

impl<S: ExecutableSearch> RuntimeLocator<S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            name: RUNTIME_NAME.to_string(),
        }
    }

    /// Name searched for when no override is given
    pub fn runtime_name(&self) -> &str {
        &self.name
    }

    /// Return the explicit path unchanged, or search for the runtime.
    ///
    /// An explicit path is not checked for existence; a bad one surfaces when
    /// the child is spawned. An empty string counts as no override.
    pub fn locate(&self, explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit.filter(|p| !p.is_empty()) {
            debug!("Using explicit runtime path {}", path);
            return Some(PathBuf::from(path));
        }

        let found = self.search.search(&self.name);
        debug!("Searched PATH for {}: {:?}", self.name, found);
        found
    }

    /// Like [`locate`](Self::locate), but a missing runtime is an error
    pub fn require(&self, explicit: Option<&str>) -> Result<PathBuf, LauncherError> {
        self.locate(explicit)
            .ok_or_else(|| LauncherError::RuntimeNotFound {
                name: self.name.clone(),
            })
    }
}
