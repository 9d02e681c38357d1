use crate::core::errors::{GistError, Result};
use crate::core::models::profile::Profile;

/// Ordered, in-memory collection of profiles.
///
/// Order is insertion order. Names are not forced to be unique; every
/// lookup by name resolves to the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: Vec<Profile>,
}

impl ProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// The store `gist init` writes: a single placeholder profile.
    pub fn example() -> Self {
        Self::new(vec![Profile {
            name: "example".into(),
            display_name: "Your Name".into(),
            email: "you@example.com".into(),
            signing_key: None,
        }])
    }

    /// First profile whose name matches exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Add a profile at the end. Duplicate names are accepted.
    pub fn append(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Remove the first profile named `name` and return it.
    pub fn remove(&mut self, name: &str) -> Result<Profile> {
        let idx = self
            .profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| GistError::ProfileNotFound {
                name: name.to_string(),
            })?;
        Ok(self.profiles.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
