use crate::core::errors::Result;
use crate::core::services::profile_store::ProfileStore;

/// Port for the durable copy of the profile store.
pub trait ProfileStorage: Send + Sync {
    /// Read the whole store. A missing backing file is `StoreNotFound`.
    fn load(&self) -> Result<ProfileStore>;

    /// Replace the durable copy with `store`.
    fn save(&self, store: &ProfileStore) -> Result<()>;
}
