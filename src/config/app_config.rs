use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::errors::{GistError, Result};

/// Git binary used when no override is given.
const DEFAULT_GIT: &str = "git";

/// Legacy variable honored after `GIST_GIT_PATH`.
const GIT_PATH_ENV: &str = "GIT_PATH";

/// Runtime settings for one gist invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Location of the profile store file.
    pub store_path: PathBuf,
    /// Git executable to invoke.
    pub git_path: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    /// Build the configuration from command-line values.
    ///
    /// `store_path` and `git_path` already include their `GIST_*`
    /// environment overrides (clap reads those). Anything still unset
    /// falls back to `GIT_PATH` and the defaults.
    pub fn new(
        store_path: Option<PathBuf>,
        git_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        let store_path = match store_path {
            Some(path) => path,
            None => default_store_path()?,
        };
        let git_path = resolve_git_path(git_path, std::env::var_os(GIT_PATH_ENV));

        Ok(Self {
            store_path,
            git_path,
            verbose,
        })
    }
}

/// `$HOME/.config/gist/config.yaml`.
pub fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| GistError::InvalidConfig {
        detail: "Could not determine home directory. Set GIST_CONFIG_PATH instead.".into(),
    })?;
    Ok(home.join(".config").join("gist").join("config.yaml"))
}

fn resolve_git_path(explicit: Option<PathBuf>, legacy: Option<OsString>) -> PathBuf {
    explicit
        .or_else(|| legacy.filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GIT))
}
