use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::activation_service::ActivationService;

/// Execute the `gist set <profile>` command.
pub fn execute(config: &AppConfig, name: &str) -> Result<()> {
    let profile = super::profile_service(config).find(name)?;

    let service = ActivationService {
        provider: super::git(config),
    };
    let activation = service.activate(&profile)?;

    if let Some(warning) = &activation.warning {
        output::warning(&format!("warning: {warning}"));
    }
    output::success(&format!(
        "Set profile \"{}\" for repository {}",
        profile.name,
        activation.repo_root.display()
    ));

    Ok(())
}
