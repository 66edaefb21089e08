//! Capability traits for everything the controller touches outside itself.
//!
//! The controller never reaches for the document, local storage, or page
//! globals directly. It is handed four capabilities:
//!
//! - [`StyleSink`]: document-wide CSS custom properties
//! - [`KeyValueStore`]: persistent per-origin storage
//! - [`SchemeHost`]: the page's own light/dark functions
//! - [`SignalSink`]: events pushed back to the server
//!
//! The in-memory implementations below back native embedding and tests.
//! Browser implementations live in [`crate::web`] behind the `web` feature.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::config::ModeNames;
use crate::error::{Result, ThemeError};

/// Abstraction over the document's style property list.
pub trait StyleSink {
    /// Set a custom property, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Abstraction over persistent key-value storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` means the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The host page's scheme functions.
pub trait SchemeHost {
    /// Idempotent setup, called on every attach and refresh.
    fn init_scheme(&mut self);

    /// Switch the page to `mode`.
    fn apply_scheme(&mut self, mode: &str);

    /// Flip between light and dark. Bound to element clicks.
    fn toggle_scheme(&mut self);
}

/// Outbound events to the host framework.
pub trait SignalSink {
    /// Push a named event with a JSON payload.
    fn push_event(&mut self, name: &str, payload: Value) -> Result<()>;
}

// === In-memory implementations ===

/// Style sink that keeps properties in a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyle {
    properties: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStyle {
    /// Create an empty style sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a property.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// All properties, sorted by name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Number of distinct properties set.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Total number of `set_property` calls, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSink for MemoryStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<()> {
        self.properties.insert(name.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Key-value store held in memory.
///
/// [`MemoryStore::unavailable`] simulates storage that is disabled, as in
/// some private browsing modes: every call fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose every operation fails.
    pub fn unavailable() -> Self {
        Self {
            items: HashMap::new(),
            unavailable: true,
        }
    }

    /// Add an item.
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }

    /// Direct read, bypassing the availability flag.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(ThemeError::storage("storage is unavailable"));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(ThemeError::storage("storage is unavailable"));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A call made on a [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Init,
    Apply(String),
    Toggle,
}

/// Scheme host that records calls and tracks the current mode.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    mode: Option<String>,
    modes: ModeNames,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingHost {
    /// Create a host using the default `light`/`dark` names.
    pub fn new() -> Self {
        Self::with_modes(ModeNames::default())
    }

    /// Create a host with custom scheme names.
    pub fn with_modes(modes: ModeNames) -> Self {
        Self {
            calls: Vec::new(),
            mode: None,
            modes,
        }
    }

    /// Every call, in order.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// The mode most recently applied or toggled to.
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Modes passed to `apply_scheme`, in order.
    pub fn applied(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Apply(m) => Some(m.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl SchemeHost for RecordingHost {
    fn init_scheme(&mut self) {
        self.calls.push(HostCall::Init);
    }

    fn apply_scheme(&mut self, mode: &str) {
        self.calls.push(HostCall::Apply(mode.to_string()));
        self.mode = Some(mode.to_string());
    }

    fn toggle_scheme(&mut self) {
        self.calls.push(HostCall::Toggle);
        let next = if self.mode.as_deref() == Some(self.modes.dark.as_str()) {
            self.modes.light.clone()
        } else {
            self.modes.dark.clone()
        };
        self.mode = Some(next);
    }
}

/// Signal sink that keeps every pushed event.
#[derive(Debug, Clone, Default)]
pub struct RecordingSignals {
    events: Vec<(String, Value)>,
}

impl RecordingSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event, in order.
    pub fn events(&self) -> &[(String, Value)] {
        &self.events
    }

    /// The most recent event.
    pub fn last(&self) -> Option<&(String, Value)> {
        self.events.last()
    }
}

impl SignalSink for RecordingSignals {
    fn push_event(&mut self, name: &str, payload: Value) -> Result<()> {
        self.events.push((name.to_string(), payload));
        Ok(())
    }
}
