use crate::core::errors::Result;
use crate::core::models::profile::Profile;
use crate::core::traits::parser::ProfileParser;

/// Header line that opens the profile list.
const HEADER: &str = "profiles:";

/// Parses and serializes the profile store file.
///
/// Supports the flat YAML subset gist writes itself:
/// - a `profiles:` header
/// - one `- name:` line per profile, followed by its field lines
/// - `username`, `email` and `signingkey` fields
/// - values optionally wrapped in `"` or `'`
/// - comment lines (`# ...`) and blank lines
///
/// Nested structures, multi-line scalars and escapes are not supported.
pub struct ProfileYamlParser;

impl ProfileYamlParser {
    /// Split a `key: value` line, dropping a leading list dash.
    ///
    /// Returns `None` when the line has no `:`.
    fn parse_key_value(raw: &str) -> Option<(&str, &str)> {
        let mut line = raw.trim();
        if let Some(rest) = line.strip_prefix('-') {
            line = rest.trim();
        }

        let (key, value) = line.split_once(':')?;
        Some((key.trim(), strip_quotes(value.trim())))
    }
}

/// Remove one layer of surrounding quote characters (`"` or `'`).
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

impl ProfileParser for ProfileYamlParser {
    fn parse(&self, content: &str) -> Result<Vec<Profile>> {
        let mut profiles: Vec<Profile> = Vec::new();
        // Index of the record that field lines currently apply to.
        let mut cursor: Option<usize> = None;

        for raw in content.lines() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(HEADER) {
                continue;
            }

            let Some((key, value)) = Self::parse_key_value(raw) else {
                continue;
            };

            if key == "name" {
                profiles.push(Profile::named(value));
                cursor = Some(profiles.len() - 1);
                continue;
            }

            // Field lines before the first `name:` have no record to land in.
            let Some(current) = cursor else {
                continue;
            };
            let current = &mut profiles[current];

            match key {
                "username" => current.display_name = value.to_string(),
                "email" => current.email = value.to_string(),
                "signingkey" => {
                    current.signing_key = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {}
            }
        }

        Ok(profiles)
    }

    /// Names are written bare, so a name with surrounding whitespace or
    /// quote characters comes back trimmed and unquoted.
    fn serialize(&self, profiles: &[Profile]) -> String {
        let mut output = String::from(HEADER);
        output.push('\n');

        for profile in profiles {
            output.push_str(&format!("  - name: {}\n", profile.name));
            output.push_str(&format!("    username: \"{}\"\n", profile.display_name));
            output.push_str(&format!("    email: \"{}\"\n", profile.email));
            if let Some(key) = profile.signing_key() {
                output.push_str(&format!("    signingkey: \"{key}\"\n"));
            }
        }

        output
    }
}
