//! Controller configuration.
//!
//! Every name the controller reads or writes (storage keys, CSS variables,
//! event names) lives here. [`ThemeConfig::default`] matches what the
//! bundled stylesheets and the server expect, so most pages never touch it.
//! Pages that need different names can load a partial override:
//!
//! ```rust
//! use tincture::ThemeConfig;
//!
//! let config = ThemeConfig::from_yaml(r#"
//! storage:
//!   theme: site_scheme
//! palettes:
//!   primary: brand
//! "#).unwrap();
//!
//! assert_eq!(config.storage.theme, "site_scheme");
//! assert_eq!(config.storage.primary_color, "primary_color");
//! assert_eq!(config.base_variable(&config.palettes.primary), "--color-brand");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::{SyncTheme, ThemeChange, ThemeEvent};

/// Top-level controller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage: StorageKeys,
    pub palettes: PaletteNames,
    pub css: CssNames,
    pub events: EventNames,
    pub modes: ModeNames,
}

/// Keys used in persistent storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub theme: String,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            theme: "theme".into(),
            primary_color: "primary_color".into(),
            accent_color: "accent_color".into(),
            background_color: "background_color".into(),
        }
    }
}

/// Names substituted into CSS variable names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteNames {
    pub primary: String,
    pub accent: String,
    pub background: String,
}

impl Default for PaletteNames {
    fn default() -> Self {
        Self {
            primary: "primary".into(),
            accent: "accent".into(),
            background: "background".into(),
        }
    }
}

/// CSS variable prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssNames {
    /// Prefix of the base color variables (`--color-primary`).
    pub base_prefix: String,
    /// Prefixes each shade is published under, in write order.
    pub shade_prefixes: Vec<String>,
}

impl Default for CssNames {
    fn default() -> Self {
        Self {
            base_prefix: "--color-".into(),
            shade_prefixes: vec!["--theme-".into(), "--color-".into()],
        }
    }
}

/// Inbound and outbound event names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventNames {
    pub theme_change: String,
    pub sync: String,
    /// Prefix the host framework adds to events it dispatches on `window`.
    pub dom_prefix: String,
}

impl Default for EventNames {
    fn default() -> Self {
        Self {
            theme_change: ThemeChange::NAME.into(),
            sync: SyncTheme::NAME.into(),
            dom_prefix: "phx:".into(),
        }
    }
}

impl EventNames {
    /// The DOM event type carrying theme changes (`phx:theme-change`).
    pub fn theme_change_dom_event(&self) -> String {
        format!("{}{}", self.dom_prefix, self.theme_change)
    }
}

/// The scheme names the host page understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeNames {
    pub light: String,
    pub dark: String,
}

impl Default for ModeNames {
    fn default() -> Self {
        Self {
            light: "light".into(),
            dark: "dark".into(),
        }
    }
}

impl ThemeConfig {
    /// Parses a (possibly partial) YAML config. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a (possibly partial) JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The base variable for a palette name (`--color-primary`).
    pub fn base_variable(&self, name: &str) -> String {
        format!("{}{}", self.css.base_prefix, name)
    }

    pub(crate) fn shade_prefixes(&self) -> Vec<&str> {
        self.css.shade_prefixes.iter().map(String::as_str).collect()
    }
}
