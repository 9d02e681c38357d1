use std::path::PathBuf;

/// All domain errors for gist.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum GistError {
    #[error(
        "Profile store not found: {path}\n\n  \
         Run 'gist init' to create it with an example profile,\n  \
         or point GIST_CONFIG_PATH at an existing file."
    )]
    StoreNotFound { path: PathBuf },

    #[error(
        "Profile '{name}' not found\n\n  \
         Run 'gist list' to see the configured profiles."
    )]
    ProfileNotFound { name: String },

    #[error(
        "not inside a git repository\n\n  \
         Profiles are applied to the local config of a repository.\n  \
         Change into a working tree and try again."
    )]
    NotARepository,

    #[error("git command failed: {detail}")]
    ExternalTool { detail: String },

    #[error("Invalid profile: {detail}")]
    InvalidProfile { detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GistError>;
