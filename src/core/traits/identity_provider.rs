use std::path::PathBuf;

use crate::core::errors::Result;
use crate::core::models::identity::{Identity, IdentityField, Scope};

/// Port for the version-control tool that owns the identity settings.
///
/// Implementations live in `adapters::git`. Services only depend on this
/// trait, so tests can substitute an in-memory fake.
pub trait IdentityProvider: Send + Sync {
    /// Root of the working tree containing the current directory, if any.
    fn working_tree(&self) -> Option<PathBuf>;

    /// Read the configured identity at `scope`.
    ///
    /// Read failures are not errors: unknown values come back empty.
    fn identity(&self, scope: Scope) -> Identity;

    /// Write one identity field into the repository-scoped config.
    fn set_field(&self, field: IdentityField, value: &str) -> Result<()>;
}
