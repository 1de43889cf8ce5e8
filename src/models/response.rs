use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the extraction service on success. Only `text` is read;
/// any other field is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractResponse {
    #[serde(default)]
    pub text: Value,
}

impl ExtractResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Value::String(text.into()),
        }
    }

    /// The `text` field as display text. The value is not validated: strings
    /// are taken as is, other JSON values are kept in their JSON form, and a
    /// missing or null field yields nothing.
    pub fn into_text(self) -> Option<String> {
        match self.text {
            Value::Null => None,
            Value::String(text) => Some(text),
            other => Some(other.to_string()),
        }
    }
}
