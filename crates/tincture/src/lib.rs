//! # Tincture - Light/Dark Scheme and Palette Controller
//!
//! `tincture` drives a page's color scheme toggle. It applies the light or
//! dark scheme, publishes a shade palette for the primary and accent colors
//! as CSS custom properties, and remembers all of it in local storage so the
//! next page load starts where the user left off.
//!
//! ## Core Concepts
//!
//! - [`ThemeController`]: attach/refresh/click/theme-change handling
//! - Capabilities ([`StyleSink`], [`KeyValueStore`], [`SchemeHost`], [`SignalSink`]):
//!   everything the controller touches outside itself
//! - [`ThemeChange`] / [`SyncTheme`]: inbound and outbound event payloads
//! - [`PersistedTheme`]: what survives a reload
//! - [`ThemeConfig`]: storage keys, variable prefixes, event names
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture::{MemoryStore, MemoryStyle, RecordingHost, RecordingSignals, ThemeController};
//!
//! let store = MemoryStore::new()
//!     .with_item("theme", "dark")
//!     .with_item("primary_color", "#3b82f6")
//!     .with_item("accent_color", "#FF5500");
//!
//! let mut controller = ThemeController::new(
//!     MemoryStyle::new(),
//!     store,
//!     RecordingHost::new(),
//!     RecordingSignals::new(),
//! );
//!
//! controller.attach();
//! assert_eq!(controller.host().mode(), Some("dark"));
//! assert_eq!(controller.style().get("--color-accent-50"), Some("#ffe6d9"));
//!
//! // A re-render asks the server to adopt the stored colors
//! let sync = controller.refresh().unwrap();
//! assert_eq!(sync.primary_color, "#3b82f6");
//! ```
//!
//! ## Browser Use
//!
//! With the `web` feature, [`web::mount`] wires the controller to the live
//! document, and `web::ThemeHook` exposes it to JavaScript.

mod config;
mod controller;
pub mod env;
mod error;
mod event;
mod storage;

#[cfg(feature = "web")]
pub mod web;

pub use config::{CssNames, EventNames, ModeNames, PaletteNames, StorageKeys, ThemeConfig};
pub use controller::{MemoryController, ThemeController};
pub use env::{
    HostCall, KeyValueStore, MemoryStore, MemoryStyle, RecordingHost, RecordingSignals,
    SchemeHost, SignalSink, StyleSink,
};
pub use error::{Result, ThemeError};
pub use event::{SyncTheme, ThemeChange, ThemeEvent};
pub use storage::PersistedTheme;

// Palette re-exports
pub use tincture_palette::{generate_shades, HexColor, Rgb, ShadeKey, ShadeSet};
