/// A named git identity: the values written to `user.name`,
/// `user.email` and, optionally, `user.signingkey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub display_name: String,
    pub email: String,
    pub signing_key: Option<String>,
}

impl Profile {
    /// Start a record with only its name set, as the parser does when it
    /// meets a `name:` line.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: String::new(),
            email: String::new(),
            signing_key: None,
        }
    }

    /// The signing key, treating an empty string as "not configured".
    pub fn signing_key(&self) -> Option<&str> {
        self.signing_key.as_deref().filter(|k| !k.is_empty())
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.display_name, self.email)
    }
}
