use crate::core::models::identity::{Identity, Scope};
use crate::core::models::profile::Profile;
use crate::core::services::profile_store::ProfileStore;
use crate::core::traits::identity_provider::IdentityProvider;

/// Outcome of looking up the active profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Config level the identity was read from.
    pub scope: Scope,
    pub profile: Option<&'a Profile>,
}

/// First profile whose display name and email both equal `identity`.
///
/// Comparison is exact. An incomplete identity never matches.
pub fn resolve<'a>(store: &'a ProfileStore, identity: &Identity) -> Option<&'a Profile> {
    if !identity.is_complete() {
        return None;
    }

    store
        .iter()
        .find(|p| p.display_name == identity.display_name && p.email == identity.email)
}

/// Determines which stored profile git is currently configured with.
pub struct ProfileResolver<P: IdentityProvider> {
    pub provider: P,
}

impl<P: IdentityProvider> ProfileResolver<P> {
    /// Match against the repository identity inside a working tree,
    /// otherwise against the global identity.
    pub fn current<'a>(&self, store: &'a ProfileStore) -> Resolution<'a> {
        let scope = match self.provider.working_tree() {
            Some(_) => Scope::Local,
            None => Scope::Global,
        };
        let identity = self.provider.identity(scope);
        tracing::debug!(
            %scope,
            name = %identity.display_name,
            email = %identity.email,
            "resolving active profile"
        );

        Resolution {
            scope,
            profile: resolve(store, &identity),
        }
    }
}
