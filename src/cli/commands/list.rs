use colored::Colorize;

use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;

/// Execute the `gist list` command.
pub fn execute(config: &AppConfig) -> Result<()> {
    let store = super::profile_service(config).load()?;

    output::header("available profiles:");
    if store.is_empty() {
        println!("  (none)");
        println!("\n  Run 'gist add' to create one.");
        return Ok(());
    }

    for profile in store.iter() {
        println!(
            "  • {}\t{}",
            profile.name,
            format!("({})", profile.email).dimmed()
        );
    }

    Ok(())
}
