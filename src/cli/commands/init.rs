use crate::adapters::stores::file_profile_store::FileProfileStore;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute the `gist init` command.
///
/// Writes the example store unless a file is already present.
pub fn execute(config: &AppConfig) -> Result<()> {
    let store = FileProfileStore::new(config.store_path.clone());
    let path = store.path().display();

    if store.initialize_default()? {
        output::success(&format!("Config initialized at {path}"));
        println!("\n  Edit it or run 'gist add' to create your own profiles.");
    } else {
        output::success(&format!("Config already exists at {path}"));
    }

    Ok(())
}
