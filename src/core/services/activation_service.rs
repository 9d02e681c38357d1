use std::path::PathBuf;

use crate::core::errors::{GistError, Result};
use crate::core::models::identity::IdentityField;
use crate::core::models::profile::Profile;
use crate::core::traits::identity_provider::IdentityProvider;

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    /// Root of the repository the profile was applied to.
    pub repo_root: PathBuf,
    /// Set when the signing key could not be written.
    pub warning: Option<String>,
}

/// Writes a profile into the repository-scoped git config.
pub struct ActivationService<P: IdentityProvider> {
    pub provider: P,
}

impl<P: IdentityProvider> ActivationService<P> {
    /// Apply `profile` to the repository containing the current directory.
    ///
    /// `user.name` and `user.email` must both be written. A failed
    /// `user.signingkey` write is reported on the returned `Activation`
    /// instead of failing the whole operation.
    pub fn activate(&self, profile: &Profile) -> Result<Activation> {
        let repo_root = self
            .provider
            .working_tree()
            .ok_or(GistError::NotARepository)?;

        self.provider
            .set_field(IdentityField::DisplayName, &profile.display_name)?;
        self.provider.set_field(IdentityField::Email, &profile.email)?;

        let mut warning = None;
        if let Some(key) = profile.signing_key() {
            if let Err(e) = self.provider.set_field(IdentityField::SigningKey, key) {
                tracing::warn!(profile = %profile.name, error = %e, "signing key not applied");
                warning = Some(format!("failed to set signingkey: {e}"));
            }
        }

        tracing::debug!(profile = %profile.name, root = %repo_root.display(), "profile activated");
        Ok(Activation { repo_root, warning })
    }
}
