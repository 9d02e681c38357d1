use std::io::{self, BufRead, Write};

use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::Result;
use crate::core::models::profile::Profile;

/// Execute the `gist add` command.
///
/// Prompts for the profile fields on stdin, appends the profile and saves
/// the store, creating it if needed.
pub fn execute(config: &AppConfig) -> Result<()> {
    let profile = read_profile(&mut io::stdin().lock(), &mut io::stdout())?;
    let name = profile.name.clone();

    super::profile_service(config).add(profile)?;
    output::success(&format!("Profile {name} added."));
    Ok(())
}

/// Ask for name, username, email and an optional signing key.
///
/// End of input counts as an empty answer.
fn read_profile(input: &mut impl BufRead, out: &mut impl Write) -> Result<Profile> {
    let name = prompt(input, out, "Enter profile name: ")?;
    let display_name = prompt(input, out, "Enter username (git user.name): ")?;
    let email = prompt(input, out, "Enter email (git user.email): ")?;
    let signing_key = prompt(input, out, "Enter signing key (optional): ")?;

    Ok(Profile {
        name,
        display_name,
        email,
        signing_key: (!signing_key.is_empty()).then_some(signing_key),
    })
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, question: &str) -> Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
