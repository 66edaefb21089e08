//! The theme controller attached to the scheme toggle element.
//!
//! ## Lifecycle
//!
//! | Host callback     | Controller method                                  |
//! |-------------------|----------------------------------------------------|
//! | element mounted   | [`attach`](ThemeController::attach)                |
//! | element updated   | [`refresh`](ThemeController::refresh)             |
//! | element clicked   | [`on_click`](ThemeController::on_click)            |
//! | `theme-change`    | [`handle_theme_change`](ThemeController::handle_theme_change) |
//!
//! Both `attach` and `refresh` re-apply whatever was saved, so a re-render
//! that wiped inline styles is repaired immediately. `refresh` also asks the
//! server to adopt the saved colors via a `sync_theme` signal.
//!
//! ## Failure Handling
//!
//! Nothing here returns an error. A malformed color only skips its shades,
//! and an unavailable store reads as empty. Capability failures are logged
//! at `warn`.
//!
//! ## Example
//!
//! ```rust
//! use tincture::{ThemeChange, ThemeController};
//!
//! let mut controller = ThemeController::in_memory();
//! controller.attach();
//! controller.handle_theme_change(
//!     &ThemeChange::new("dark").with_primary("#FF5500"),
//! );
//!
//! assert_eq!(controller.style().get("--color-primary"), Some("#FF5500"));
//! assert_eq!(controller.style().get("--theme-primary-50"), Some("#ffe6d9"));
//! assert_eq!(controller.host().mode(), Some("dark"));
//! assert_eq!(controller.store().get("theme"), Some("dark"));
//! ```

use serde_json::Value;
use tincture_palette::{HexColor, ShadeSet};

use crate::config::ThemeConfig;
use crate::env::{
    KeyValueStore, MemoryStore, MemoryStyle, RecordingHost, RecordingSignals, SchemeHost,
    SignalSink, StyleSink,
};
use crate::event::{SyncTheme, ThemeChange};
use crate::storage::PersistedTheme;

/// Applies, persists, and restores the page's color scheme and palette.
#[derive(Debug)]
pub struct ThemeController<S, K, H, E> {
    style: S,
    store: K,
    host: H,
    signals: E,
    config: ThemeConfig,
    click_bound: bool,
}

/// A controller running entirely on in-memory capabilities.
pub type MemoryController = ThemeController<MemoryStyle, MemoryStore, RecordingHost, RecordingSignals>;

impl MemoryController {
    /// Controller with empty in-memory style, store, host, and signals.
    pub fn in_memory() -> Self {
        Self::new(
            MemoryStyle::new(),
            MemoryStore::new(),
            RecordingHost::new(),
            RecordingSignals::new(),
        )
    }
}

impl<S, K, H, E> ThemeController<S, K, H, E>
where
    S: StyleSink,
    K: KeyValueStore,
    H: SchemeHost,
    E: SignalSink,
{
    /// Creates a controller with the default configuration.
    pub fn new(style: S, store: K, host: H, signals: E) -> Self {
        Self {
            style,
            store,
            host,
            signals,
            config: ThemeConfig::default(),
            click_bound: false,
        }
    }

    /// Replaces the configuration, returning `self` for chaining.
    pub fn with_config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn signals(&self) -> &E {
        &self.signals
    }

    /// Consumes the controller, returning its capabilities.
    pub fn into_parts(self) -> (S, K, H, E) {
        (self.style, self.store, self.host, self.signals)
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Called when the element enters the page.
    pub fn attach(&mut self) {
        tracing::debug!("attaching theme controller");
        self.init();
        self.load_saved_theme();
    }

    /// Called when the host framework re-renders the element.
    ///
    /// Re-applies saved state, then emits `sync_theme` when both colors are
    /// stored. The emitted request is returned as well.
    pub fn refresh(&mut self) -> Option<SyncTheme> {
        tracing::debug!("refreshing theme controller");
        self.init();
        let saved = self.load_saved_theme();

        let sync = saved.sync_request()?;
        let event = self.config.events.sync.clone();
        match self.signals.push_event(&event, sync.to_value()) {
            Ok(()) => tracing::debug!(event = %event, "pushed theme sync request"),
            Err(err) => tracing::warn!(event = %event, error = %err, "failed to push theme sync"),
        }
        Some(sync)
    }

    /// Whether the click handler has been bound.
    pub fn is_click_bound(&self) -> bool {
        self.click_bound
    }

    /// Called when the element is clicked. Ignored before `attach`.
    pub fn on_click(&mut self) {
        if self.click_bound {
            self.host.toggle_scheme();
        } else {
            tracing::debug!("click before attach ignored");
        }
    }

    fn init(&mut self) {
        self.host.init_scheme();
        if !self.click_bound {
            self.click_bound = true;
            tracing::trace!("click handler bound");
        }
    }

    // ------------------------------------------------------------------
    // Theme changes
    // ------------------------------------------------------------------

    /// Persists and applies a theme change notification.
    pub fn handle_theme_change(&mut self, change: &ThemeChange) {
        tracing::debug!(
            mode = ?change.mode,
            primary = ?change.primary_color,
            accent = ?change.accent_color,
            background = ?change.background_color,
            "theme change"
        );

        PersistedTheme::from(change).save(&mut self.store, &self.config.storage);

        if let Some(mode) = change.mode.as_deref() {
            self.host.apply_scheme(mode);
        }

        self.apply_colors(
            change.primary_color.as_deref(),
            change.accent_color.as_deref(),
            change.background_color.as_deref(),
        );
    }

    /// Decodes and handles a raw notification payload.
    ///
    /// Returns `false` (after logging) if the payload could not be decoded.
    pub fn handle_theme_change_value(&mut self, payload: Value) -> bool {
        match ThemeChange::from_value(payload) {
            Ok(change) => {
                self.handle_theme_change(&change);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed theme change");
                false
            }
        }
    }

    /// Re-applies the persisted scheme and colors, returning what was read.
    pub fn load_saved_theme(&mut self) -> PersistedTheme {
        let saved = self.saved_theme();

        if let Some(mode) = saved.mode.as_deref() {
            self.host.apply_scheme(mode);
        }

        self.apply_colors(
            saved.primary_color.as_deref(),
            saved.accent_color.as_deref(),
            saved.background_color.as_deref(),
        );
        saved
    }

    /// Reads the persisted theme without applying it.
    pub fn saved_theme(&self) -> PersistedTheme {
        PersistedTheme::load(&self.store, &self.config.storage)
    }

    fn apply_colors(
        &mut self,
        primary: Option<&str>,
        accent: Option<&str>,
        background: Option<&str>,
    ) {
        let palettes = self.config.palettes.clone();

        for (name, color) in [(&palettes.primary, primary), (&palettes.accent, accent)] {
            if let Some(color) = color {
                let var = self.config.base_variable(name);
                self.set_property(&var, color);
                self.generate_shades(Some(color), name);
            }
        }

        if let Some(color) = background {
            let var = self.config.base_variable(&palettes.background);
            self.set_property(&var, color);
        }
    }

    // ------------------------------------------------------------------
    // Shades
    // ------------------------------------------------------------------

    /// Publishes the shade variables of `base` under `name`.
    ///
    /// Does nothing if `base` is absent or not `#RRGGBB`.
    pub fn generate_shades(&mut self, base: Option<&str>, name: &str) -> Option<ShadeSet> {
        let base = base?;
        let color = match HexColor::parse(base) {
            Ok(color) => color,
            Err(err) => {
                tracing::debug!(name = %name, error = %err, "ignoring malformed base color");
                return None;
            }
        };

        let shades = ShadeSet::generate(&color);
        let vars = shades.css_variables_with_prefixes(name, &self.config.shade_prefixes());
        for (var, value) in &vars {
            self.set_property(var, value);
        }
        Some(shades)
    }

    fn set_property(&mut self, name: &str, value: &str) {
        match self.style.set_property(name, value) {
            Ok(()) => tracing::trace!(property = %name, value = %value, "style property set"),
            Err(err) => {
                tracing::warn!(property = %name, error = %err, "failed to set style property")
            }
        }
    }
}
