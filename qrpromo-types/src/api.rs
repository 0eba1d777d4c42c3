//! Error bodies returned by the backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `{"detail": ...}` body the backend attaches to non-2xx responses.
///
/// `detail` is usually a message string, but request-validation failures
/// carry a list of `{"loc": [...], "msg": "...", ...}` objects instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Parses an error body, treating anything undecodable as empty.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Returns a human-readable message, if the body carries one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }

    /// Returns true if the detail is exactly `expected`.
    #[must_use]
    pub fn is(&self, expected: &str) -> bool {
        matches!(&self.detail, Some(Value::String(s)) if s == expected)
    }
}
