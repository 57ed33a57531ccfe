//! Section and message-slot definitions.
//!
//! Pure view-model enums, no DOM access. The UI renders exactly one
//! [`Section`] at a time and four independent [`MessageSlot`]s.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The four mutually exclusive sections of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Section {
    /// Sign-in form (default)
    #[default]
    Login,
    Register,
    /// Current joke and actions, needs a session
    Dashboard,
    /// Saved jokes list, needs a session
    Profile,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Login,
        Section::Register,
        Section::Dashboard,
        Section::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::Profile => "profile",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient status/error text slots, one per section that shows messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageSlot {
    LoginError,
    RegisterError,
    SaveStatus,
    ProfileStatus,
}

impl MessageSlot {
    pub const ALL: [MessageSlot; 4] = [
        MessageSlot::LoginError,
        MessageSlot::RegisterError,
        MessageSlot::SaveStatus,
        MessageSlot::ProfileStatus,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_section_is_login() {
        assert_eq!(Section::default(), Section::Login);
        assert_eq!(Section::Login.to_string(), "login");
    }
}
