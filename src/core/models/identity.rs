/// Which git configuration level an identity is read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Repository config (`.git/config`).
    Local,
    /// User config (`~/.gitconfig`).
    Global,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Local => write!(f, "repo"),
            Scope::Global => write!(f, "global"),
        }
    }
}

/// An identity field that activation writes into git config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    DisplayName,
    Email,
    SigningKey,
}

impl IdentityField {
    /// The git config key backing this field.
    pub fn git_key(self) -> &'static str {
        match self {
            IdentityField::DisplayName => "user.name",
            IdentityField::Email => "user.email",
            IdentityField::SigningKey => "user.signingkey",
        }
    }
}

/// The `user.name` / `user.email` pair currently configured in git.
///
/// Either half is empty when git has no value for it or could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub display_name: String,
    pub email: String,
}

impl Identity {
    /// True when both values are known.
    pub fn is_complete(&self) -> bool {
        !self.display_name.is_empty() && !self.email.is_empty()
    }
}
