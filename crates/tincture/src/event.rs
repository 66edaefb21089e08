//! Inbound and outbound event payloads.
//!
//! The server pushes [`ThemeChange`] whenever the user picks a scheme or a
//! template with its own colors. The controller answers re-renders with
//! [`SyncTheme`] so the server can catch up with colors that only the
//! browser remembers.
//!
//! Payload keys follow the server's snake_case names (`primary_color`,
//! `theme`). Inbound payloads also accept `mode` and camelCase keys.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, ThemeError};

/// An event with a fixed wire name.
pub trait ThemeEvent: Serialize + Clone {
    const NAME: &'static str;
}

/// Treat `""` the same as a missing value.
fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Notification that the scheme or colors changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    #[serde(
        rename = "theme",
        alias = "mode",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub mode: Option<String>,

    #[serde(
        alias = "primaryColor",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_color: Option<String>,

    #[serde(
        alias = "accentColor",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub accent_color: Option<String>,

    #[serde(
        alias = "backgroundColor",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<String>,
}

impl ThemeEvent for ThemeChange {
    const NAME: &'static str = "theme-change";
}

impl ThemeChange {
    /// A change carrying only a scheme.
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: Some(mode.into()).filter(|m| !m.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_primary(mut self, color: impl Into<String>) -> Self {
        self.primary_color = Some(color.into()).filter(|c| !c.is_empty());
        self
    }

    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent_color = Some(color.into()).filter(|c| !c.is_empty());
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into()).filter(|c| !c.is_empty());
        self
    }

    /// Decodes a payload as delivered in the DOM event's `detail`.
    ///
    /// Only JSON objects are accepted. When a payload carries both a key
    /// and its alias (`theme` and `mode`, `primary_color` and
    /// `primaryColor`, ...) the canonical key wins unless it is null or
    /// empty.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(ThemeError::payload(Self::NAME, "expected an object"));
        };

        for (key, alias) in ALIASES {
            let Some(aliased) = map.remove(alias) else {
                continue;
            };
            let canonical_blank = map
                .get(key)
                .map_or(true, |v| v.is_null() || v.as_str() == Some(""));
            if canonical_blank {
                map.insert(key.to_string(), aliased);
            }
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| ThemeError::payload(Self::NAME, e.to_string()))
    }
}

/// Inbound keys and the alias each also accepts.
const ALIASES: [(&str, &str); 4] = [
    ("theme", "mode"),
    ("primary_color", "primaryColor"),
    ("accent_color", "accentColor"),
    ("background_color", "backgroundColor"),
];

/// Request for the server to adopt the locally persisted theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncTheme {
    pub primary_color: String,
    pub accent_color: String,
    /// `null` when no scheme has been stored yet.
    #[serde(rename = "theme")]
    pub mode: Option<String>,
}

impl ThemeEvent for SyncTheme {
    const NAME: &'static str = "sync_theme";
}

impl SyncTheme {
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "primary_color": self.primary_color,
            "accent_color": self.accent_color,
            "theme": self.mode,
        })
    }
}
