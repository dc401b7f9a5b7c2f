//! Rich text body stored as `{ "details": "<html>" }`

use serde::{Deserialize, Deserializer, Serialize};

/// HTML body produced by the dashboard editor
///
/// Always serializes as an object with a `details` key, even when empty.
/// Deserialization also accepts a bare string, which is what multipart
/// forms send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub details: String,
}

impl RichText {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }

    /// Wrap an optional plain value; missing input becomes an empty body
    pub fn from_plain(value: Option<&str>) -> Self {
        Self::new(value.unwrap_or_default())
    }

    pub fn is_empty(&self) -> bool {
        self.details.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.details
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "details": self.details })
    }

    /// Read a stored JSON value, tolerating legacy rows that hold a plain string
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::new(s.clone()),
            serde_json::Value::Object(map) => Self::new(
                map.get("details")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or_default(),
            ),
            _ => Self::default(),
        }
    }
}

impl From<String> for RichText {
    fn from(details: String) -> Self {
        Self { details }
    }
}

impl From<&str> for RichText {
    fn from(details: &str) -> Self {
        Self::new(details)
    }
}

impl<'de> Deserialize<'de> for RichText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapped {
            #[serde(default)]
            details: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Plain(String),
            Wrapped(Wrapped),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Plain(s)) => Self::new(s),
            Some(Raw::Wrapped(w)) => Self::new(w.details.unwrap_or_default()),
            None => Self::default(),
        })
    }
}
