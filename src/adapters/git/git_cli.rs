use std::path::PathBuf;
use std::process::Command;

use crate::core::errors::{GistError, Result};
use crate::core::models::identity::{Identity, IdentityField, Scope};
use crate::core::traits::identity_provider::IdentityProvider;

/// Identity provider that shells out to the system `git` binary.
///
/// Commands run in the current directory and block until git exits.
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Path to the git binary.
    git_path: PathBuf,
}

impl GitCli {
    /// Create a provider for the given git binary.
    pub fn with_path(git_path: PathBuf) -> Self {
        Self { git_path }
    }

    /// Run a git command and return its trimmed stdout on success.
    fn run_git(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(git = %self.git_path.display(), ?args, "running git");

        let output = Command::new(&self.git_path)
            .args(args)
            .output()
            .map_err(|e| GistError::ExternalTool {
                detail: format!("failed to run {}: {e}", self.git_path.display()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GistError::ExternalTool {
                detail: format!(
                    "git {} exited with {}: {}",
                    args.join(" "),
                    output.status,
                    stderr.trim()
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Read one config value; unset or unreadable values are empty.
    fn config_value(&self, scope: Scope, key: &str) -> String {
        let mut args = vec!["config"];
        if scope == Scope::Global {
            args.push("--global");
        }
        args.push(key);
        self.run_git(&args).unwrap_or_else(|e| {
            tracing::debug!(%scope, key, error = %e, "git config value unavailable");
            String::new()
        })
    }
}

impl IdentityProvider for GitCli {
    fn working_tree(&self) -> Option<PathBuf> {
        self.run_git(&["rev-parse", "--show-toplevel"])
            .ok()
            .filter(|root| !root.is_empty())
            .map(PathBuf::from)
    }

    fn identity(&self, scope: Scope) -> Identity {
        Identity {
            display_name: self.config_value(scope, IdentityField::DisplayName.git_key()),
            email: self.config_value(scope, IdentityField::Email.git_key()),
        }
    }

    fn set_field(&self, field: IdentityField, value: &str) -> Result<()> {
        self.run_git(&["config", field.git_key(), value])
            .map(|_| ())
            .map_err(|e| match e {
                GistError::ExternalTool { detail } => GistError::ExternalTool {
                    detail: format!("failed to set {}: {detail}", field.git_key()),
                },
                other => other,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_git() -> GitCli {
        GitCli::with_path(PathBuf::from("/nonexistent/gist-test/git"))
    }

    #[test]
    fn missing_binary_is_not_a_repository() {
        assert_eq!(missing_git().working_tree(), None);
    }

    #[test]
    fn missing_binary_reads_empty_identity() {
        assert_eq!(missing_git().identity(Scope::Global), Identity::default());
        assert_eq!(missing_git().identity(Scope::Local), Identity::default());
    }

    #[test]
    fn missing_binary_write_is_external_tool_error() {
        let result = missing_git().set_field(IdentityField::Email, "a@b");
        match result {
            Err(GistError::ExternalTool { detail }) => assert!(detail.contains("user.email")),
            other => panic!("expected ExternalTool error, got {other:?}"),
        }
    }
}
