use serde::{Deserialize, Serialize};

/// Body returned by the joke endpoint.
///
/// A successful single-joke response carries `joke`; error responses
/// (`"error": true`) carry `message` instead. Every field is optional so that
/// any JSON object deserializes and the caller decides what is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokePayload {
    #[serde(default)]
    pub joke: Option<String>,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl JokePayload {
    /// The joke text, if the payload has a non-empty `joke` field.
    pub fn joke_text(&self) -> Option<&str> {
        self.joke.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_joke_payload_exposes_text() {
        let payload: JokePayload = serde_json::from_str(
            r#"{"error":false,"category":"Programming","type":"single","joke":"Why did...","id":12,"safe":true,"lang":"en"}"#,
        )
        .unwrap();
        assert_eq!(payload.joke_text(), Some("Why did..."));
        assert!(!payload.error);
    }

    #[test]
    fn error_payload_has_no_joke() {
        let payload: JokePayload = serde_json::from_str(
            r#"{"error":true,"internalError":false,"code":106,"message":"No matching joke found"}"#,
        )
        .unwrap();
        assert!(payload.error);
        assert_eq!(payload.joke_text(), None);
        assert_eq!(payload.message.as_deref(), Some("No matching joke found"));
    }

    #[test]
    fn empty_joke_counts_as_missing() {
        let payload = JokePayload {
            joke: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(payload.joke_text(), None);
    }
}
