use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute the `gist remove <profile>` command.
pub fn execute(config: &AppConfig, name: &str) -> Result<()> {
    let removed = super::profile_service(config).remove(name)?;
    output::success(&format!("Profile {} removed.", removed.name));
    Ok(())
}
