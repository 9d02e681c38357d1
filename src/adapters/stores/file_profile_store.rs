use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::adapters::parsers::profile_yaml_parser::ProfileYamlParser;
use crate::core::errors::{GistError, Result};
use crate::core::services::profile_store::ProfileStore;
use crate::core::traits::parser::ProfileParser;
use crate::core::traits::profile_storage::ProfileStorage;

/// File-based profile store, by default `~/.config/gist/config.yaml`.
///
/// Example file:
/// ```text
/// profiles:
///   - name: work
///     username: "Jane Doe"
///     email: "jane@company.com"
///     signingkey: "4AEE18F83AFDEB23"
/// ```
#[derive(Clone)]
pub struct FileProfileStore {
    path: PathBuf,
}

impl FileProfileStore {
    /// Create a store backed by the given file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Return the file path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the example store unless a file already exists.
    ///
    /// Any existing file is left untouched, even one that does not parse.
    /// Returns whether a file was created.
    pub fn initialize_default(&self) -> Result<bool> {
        if self.path.try_exists()? {
            tracing::debug!(path = %self.path.display(), "store already present");
            return Ok(false);
        }
        self.save(&ProfileStore::example())?;
        Ok(true)
    }
}

impl ProfileStorage for FileProfileStore {
    fn load(&self) -> Result<ProfileStore> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => GistError::StoreNotFound {
                path: self.path.clone(),
            },
            _ => GistError::Io(e),
        })?;

        let profiles = ProfileYamlParser.parse(&content)?;
        tracing::debug!(path = %self.path.display(), count = profiles.len(), "loaded profiles");
        Ok(ProfileStore::new(profiles))
    }

    /// Replace the file through a temporary sibling and a rename, so a
    /// reader never sees a half-written store.
    fn save(&self, store: &ProfileStore) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(dir)?;

        let content = ProfileYamlParser.serialize(store.profiles());
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&self.path).map_err(|e| e.error)?;
        tracing::debug!(path = %self.path.display(), count = store.len(), "saved profiles");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::profile::Profile;

    fn temp_store() -> (tempfile::TempDir, FileProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gist").join("config.yaml");
        let store = FileProfileStore::new(path);
        (dir, store)
    }

    fn sample(name: &str, key: Option<&str>) -> Profile {
        Profile {
            name: name.into(),
            display_name: format!("{name} dev"),
            email: format!("{name}@example.com"),
            signing_key: key.map(String::from),
        }
    }

    #[test]
    fn load_missing_file_is_store_not_found() {
        let (_dir, store) = temp_store();
        let result = store.load();
        assert!(matches!(result, Err(GistError::StoreNotFound { .. })));
    }

    #[test]
    fn save_creates_parent_dirs_and_loads_back() {
        let (_dir, store) = temp_store();
        let profiles = ProfileStore::new(vec![sample("work", Some("ABC")), sample("home", None)]);

        store.save(&profiles).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), profiles);
    }

    #[test]
    fn save_overwrites_whole_file() {
        let (_dir, store) = temp_store();
        store
            .save(&ProfileStore::new(vec![sample("a", None), sample("b", None)]))
            .unwrap();
        store.save(&ProfileStore::new(vec![sample("c", None)])).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(!content.contains("name: a"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn load_hand_edited_file() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "# my identities\nprofiles:\n- name: oss\n  username: 'J D'\n  email: jd@oss\n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        let p = loaded.find("oss").unwrap();
        assert_eq!(p.display_name, "J D");
        assert_eq!(p.email, "jd@oss");
    }

    #[test]
    fn initialize_default_writes_example() {
        let (_dir, store) = temp_store();

        assert!(store.initialize_default().unwrap());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, ProfileStore::example());
    }

    #[test]
    fn initialize_default_twice_is_noop() {
        let (_dir, store) = temp_store();
        store.initialize_default().unwrap();
        let first = fs::read(store.path()).unwrap();

        assert!(!store.initialize_default().unwrap());
        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn initialize_default_keeps_existing_malformed_file() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "- name:\n{{ not yaml").unwrap();

        assert!(!store.initialize_default().unwrap());
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "- name:\n{{ not yaml"
        );
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = temp_store();
        store.initialize_default().unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
