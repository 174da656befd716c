use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_FILE_NAME};

/// Directory holding the launcher's sources, fixed at build time.
/// The entrypoint path is relative to it.
pub fn source_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Launcher configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Path to the bun executable (overridden by `--bun` on the command line)
    #[serde(default, deserialize_with = "lenient_string")]
    pub bun: Option<String>,

    /// Working directory for the child process
    #[serde(default, deserialize_with = "lenient_path")]
    pub project_dir: Option<PathBuf>,

    /// Print the planned invocation as JSON instead of running it
    #[serde(default)]
    pub dry_run: bool,
}

impl LauncherConfig {
    /// Working directory the child is started in
    pub fn working_dir(&self) -> PathBuf {
        self.project_dir
            .clone()
            .unwrap_or_else(|| source_dir().to_path_buf())
    }
}

// Env values are parsed into typed values, so `OPENCODE_MANAGER_BUN=123`
// arrives as a number. Paths take any scalar back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Signed(n) => n.to_string(),
            Scalar::Unsigned(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

fn lenient_path<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<PathBuf>, D::Error> {
    Ok(lenient_string(deserializer)?.map(PathBuf::from))
}

/// Defaults merged with a TOML file, if one exists at `path`
fn layered(path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(LauncherConfig::default()));

    if let Some(path) = path.filter(|p| p.exists()) {
        figment = figment.merge(Toml::file(path));
    }

    figment
}

/// Load configuration from an explicit file plus `OPENCODE_MANAGER_*` variables
pub fn load_config_from(path: Option<&Path>) -> Result<LauncherConfig> {
    layered(path)
        .merge(Env::prefixed(CONFIG_ENV_PREFIX))
        .extract()
        .context("Failed to load configuration")
}

/// Load configuration from the global config file and the environment
pub fn load_config() -> Result<LauncherConfig> {
    let global_config = get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME));
    load_config_from(global_config.as_deref())
}

/// Get the configuration directory, without creating it
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "opencode-manager") {
        return Some(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to home directory
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("opencode-manager"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LauncherConfig::default();
        assert_eq!(config.bun, None);
        assert!(!config.dry_run);
        assert_eq!(config.working_dir(), source_dir());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config: LauncherConfig = layered(Some(&dir.path().join("absent.toml")))
            .extract()
            .unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
bun = "/opt/bun/bin/bun"
project_dir = "/srv/opencode"
dry_run = true
"#
        )
        .unwrap();

        let config: LauncherConfig = layered(Some(file.path())).extract().unwrap();
        assert_eq!(config.bun.as_deref(), Some("/opt/bun/bin/bun"));
        assert_eq!(config.working_dir(), PathBuf::from("/srv/opencode"));
        assert!(config.dry_run);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bun = [\"unclosed\"").unwrap();

        let result: std::result::Result<LauncherConfig, _> = layered(Some(file.path())).extract();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_sets_runtime_and_dry_run() {
        Jail::expect_with(|jail| {
            jail.set_env("OPENCODE_MANAGER_BUN", "/env/bun");
            jail.set_env("OPENCODE_MANAGER_DRY_RUN", "true");

            let config = load_config_from(None).map_err(|e| format!("{:#}", e))?;
            assert_eq!(config.bun.as_deref(), Some("/env/bun"));
            assert!(config.dry_run);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
bun = "/file/bun"
project_dir = "/file/project"
"#,
            )?;
            jail.set_env("OPENCODE_MANAGER_BUN", "/env/bun");

            let config = load_config_from(Some(Path::new("config.toml")))
                .map_err(|e| format!("{:#}", e))?;
            assert_eq!(config.bun.as_deref(), Some("/env/bun"));
            assert_eq!(config.project_dir, Some(PathBuf::from("/file/project")));
            assert!(!config.dry_run);
            Ok(())
        });
    }

    #[test]
    fn test_numeric_env_paths_stay_text() {
        Jail::expect_with(|jail| {
            jail.set_env("OPENCODE_MANAGER_BUN", "123");
            jail.set_env("OPENCODE_MANAGER_PROJECT_DIR", "2024");

            let config = load_config_from(None).map_err(|e| format!("{:#}", e))?;
            assert_eq!(config.bun.as_deref(), Some("123"));
            assert_eq!(config.project_dir, Some(PathBuf::from("2024")));
            Ok(())
        });
    }
}
