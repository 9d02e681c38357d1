use crate::core::errors::{GistError, Result};
use crate::core::models::profile::Profile;
use crate::core::services::profile_store::ProfileStore;
use crate::core::traits::profile_storage::ProfileStorage;

/// Manages profiles through a `ProfileStorage` backend.
///
/// Every mutation is a full load, change, save cycle.
pub struct ProfileService<S: ProfileStorage> {
    pub storage: S,
}

impl<S: ProfileStorage> ProfileService<S> {
    /// Load all profiles.
    pub fn load(&self) -> Result<ProfileStore> {
        self.storage.load()
    }

    /// Look up a profile by name.
    pub fn find(&self, name: &str) -> Result<Profile> {
        self.storage
            .load()?
            .find(name)
            .cloned()
            .ok_or_else(|| GistError::ProfileNotFound {
                name: name.to_string(),
            })
    }

    /// Append a profile and persist. A store that does not exist yet
    /// starts out empty.
    pub fn add(&self, profile: Profile) -> Result<()> {
        validate(&profile)?;

        let mut store = match self.storage.load() {
            Ok(store) => store,
            Err(GistError::StoreNotFound { .. }) => ProfileStore::default(),
            Err(e) => return Err(e),
        };
        store.append(profile);
        self.storage.save(&store)
    }

    /// Remove the first profile named `name` and persist.
    pub fn remove(&self, name: &str) -> Result<Profile> {
        let mut store = self.storage.load()?;
        let removed = store.remove(name)?;
        self.storage.save(&store)?;
        Ok(removed)
    }
}

/// Name, display name and email are required.
fn validate(profile: &Profile) -> Result<()> {
    if profile.name.is_empty() || profile.display_name.is_empty() || profile.email.is_empty() {
        return Err(GistError::InvalidProfile {
            detail: "profile name, username and email are required".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use super::*;

    /// Storage kept in memory; `None` means the file does not exist.
    #[derive(Default)]
    struct MemoryStorage {
        store: Mutex<Option<ProfileStore>>,
        saves: Mutex<usize>,
    }

    impl ProfileStorage for MemoryStorage {
        fn load(&self) -> Result<ProfileStore> {
            self.store
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| GistError::StoreNotFound {
                    path: PathBuf::from("memory"),
                })
        }

        fn save(&self, store: &ProfileStore) -> Result<()> {
            *self.store.lock().unwrap() = Some(store.clone());
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    fn profile(name: &str) -> Profile {
        Profile {
            name: name.into(),
            display_name: "Jane Doe".into(),
            email: format!("{name}@example.com"),
            signing_key: None,
        }
    }

    #[test]
    fn add_to_missing_store_creates_it() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };

        service.add(profile("work")).unwrap();

        let store = service.load().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(service.find("work").unwrap().email, "work@example.com");
    }

    #[test]
    fn add_appends_in_order() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };
        service.add(profile("a")).unwrap();
        service.add(profile("b")).unwrap();

        let names: Vec<_> = service
            .load()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn add_rejects_blank_required_fields() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };
        let mut incomplete = profile("work");
        incomplete.email.clear();

        let result = service.add(incomplete);
        assert!(matches!(result, Err(GistError::InvalidProfile { .. })));
        assert_eq!(*service.storage.saves.lock().unwrap(), 0);
    }

    #[test]
    fn remove_persists() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };
        service.add(profile("a")).unwrap();
        service.add(profile("b")).unwrap();

        let removed = service.remove("a").unwrap();
        assert_eq!(removed.name, "a");
        assert!(matches!(
            service.find("a"),
            Err(GistError::ProfileNotFound { .. })
        ));
        assert_eq!(service.load().unwrap().len(), 1);
    }

    #[test]
    fn remove_missing_does_not_save() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };
        service.add(profile("a")).unwrap();

        let result = service.remove("zzz");
        assert!(matches!(result, Err(GistError::ProfileNotFound { .. })));
        assert_eq!(*service.storage.saves.lock().unwrap(), 1);
    }

    #[test]
    fn remove_without_store_reports_missing_store() {
        let service = ProfileService {
            storage: MemoryStorage::default(),
        };
        assert!(matches!(
            service.remove("a"),
            Err(GistError::StoreNotFound { .. })
        ));
    }
}
