use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;
pub mod section;

pub use protocol::JokePayload;
pub use section::{MessageSlot, Section};

// =========================================================
// Constants
// =========================================================

/// Top-level collection holding one document per user.
pub const USERS_COLLECTION: &str = "users";
/// Per-user subcollection of saved jokes.
pub const SAVED_JOKES_COLLECTION: &str = "savedJokes";
/// Field carrying the joke text in a stored record.
pub const FIELD_JOKE: &str = "joke";
/// Field carrying the server-assigned save time.
pub const FIELD_TIMESTAMP: &str = "timestamp";

// =========================================================
// Domain models
// =========================================================

/// Authenticated identity as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

/// The joke currently shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub text: String,
}

impl Joke {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Payload handed to the store when saving; id and timestamp are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSavedJoke {
    pub text: String,
}

impl From<&Joke> for NewSavedJoke {
    fn from(joke: &Joke) -> Self {
        Self {
            text: joke.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedJoke {
    pub id: String,
    pub text: String,
    pub saved_at: DateTime<Utc>,
}

/// Path of a user's saved-jokes subcollection, relative to the document root.
pub fn saved_jokes_path(user_id: &str) -> String {
    format!(
        "{}/{}/{}",
        USERS_COLLECTION, user_id, SAVED_JOKES_COLLECTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_jokes_path_is_scoped_to_user() {
        assert_eq!(saved_jokes_path("u1"), "users/u1/savedJokes");
    }

    #[test]
    fn new_saved_joke_copies_text() {
        let joke = Joke::new("Why did...");
        assert_eq!(NewSavedJoke::from(&joke).text, "Why did...");
    }
}
