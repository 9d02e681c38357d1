pub mod add;
pub mod info;
pub mod init;
pub mod list;
pub mod remove;
pub mod set;

use crate::adapters::git::git_cli::GitCli;
use crate::adapters::stores::file_profile_store::FileProfileStore;
use crate::config::app_config::AppConfig;
use crate::core::services::profile_service::ProfileService;

/// Profile service over the configured store file.
fn profile_service(config: &AppConfig) -> ProfileService<FileProfileStore> {
    ProfileService {
        storage: FileProfileStore::new(config.store_path.clone()),
    }
}

/// Git provider for the configured executable.
fn git(config: &AppConfig) -> GitCli {
    GitCli::with_path(config.git_path.clone())
}
