use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::services::profile_resolver::ProfileResolver;

/// Execute the `gist info` command.
///
/// Reports the stored profile matching the repository identity when run
/// inside a working tree, or the global identity otherwise.
pub fn execute(config: &AppConfig) -> Result<()> {
    let store = super::profile_service(config).load()?;
    let resolver = ProfileResolver {
        provider: super::git(config),
    };
    let resolution = resolver.current(&store);

    output::header(&format!("current profile ({}):", resolution.scope));
    match resolution.profile {
        Some(profile) => {
            output::field("name", &profile.name);
            output::field("user", &profile.to_string());
            if let Some(key) = profile.signing_key() {
                output::field("signingkey", key);
            }
        }
        None => println!("  (none)"),
    }

    Ok(())
}
