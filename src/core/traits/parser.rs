use crate::core::errors::Result;
use crate::core::models::profile::Profile;

/// Port for reading and writing the profile store file format.
///
/// The only implementation is `ProfileYamlParser`, which handles the
/// flat YAML subset gist writes.
pub trait ProfileParser: Send + Sync {
    /// Parse raw file content into profiles, in file order.
    fn parse(&self, content: &str) -> Result<Vec<Profile>>;

    /// Serialize profiles back to the file format.
    fn serialize(&self, profiles: &[Profile]) -> String;
}
