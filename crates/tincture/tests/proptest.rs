//! Property-based tests for the controller.

use proptest::prelude::*;
use tincture::{
    MemoryController, MemoryStore, MemoryStyle, RecordingHost, RecordingSignals, ThemeChange,
    ThemeController,
};

fn hex_strategy() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

fn mode_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("light".to_string()), Just("dark".to_string())]
}

proptest! {
    /// A valid color always publishes 22 shade variables plus its base.
    #[test]
    fn valid_color_publishes_all_variables(color in hex_strategy()) {
        let mut c = MemoryController::in_memory();
        c.handle_theme_change(&ThemeChange::new("dark").with_primary(color.clone()));
        prop_assert_eq!(c.style().len(), 23);
        prop_assert_eq!(c.style().get("--color-primary"), Some(color.as_str()));
        prop_assert_eq!(c.style().get("--color-primary-500"), Some(color.as_str()));
    }

    /// Strings that are not `#RRGGBB` never produce shade variables.
    #[test]
    fn invalid_color_publishes_no_shades(color in "[^#].{0,8}") {
        let mut c = MemoryController::in_memory();
        prop_assert!(c.generate_shades(Some(&color), "primary").is_none());
        prop_assert_eq!(c.style().writes(), 0);
    }

    /// Reloading from the store reproduces the style state exactly.
    #[test]
    fn reload_round_trip(
        mode in mode_strategy(),
        primary in hex_strategy(),
        accent in hex_strategy(),
        background in hex_strategy(),
    ) {
        let mut first = MemoryController::in_memory();
        first.handle_theme_change(
            &ThemeChange::new(mode.clone())
                .with_primary(primary)
                .with_accent(accent)
                .with_background(background),
        );
        let (style, store, _, _) = first.into_parts();

        let mut second = ThemeController::new(
            MemoryStyle::new(),
            store,
            RecordingHost::new(),
            RecordingSignals::new(),
        );
        second.load_saved_theme();
        prop_assert_eq!(second.style().properties(), style.properties());
        prop_assert_eq!(second.host().mode(), Some(mode.as_str()));
    }

    /// Refreshing twice yields the same styles and the same sync payload.
    #[test]
    fn refresh_is_idempotent(primary in hex_strategy(), accent in hex_strategy()) {
        let store = MemoryStore::new()
            .with_item("primary_color", primary)
            .with_item("accent_color", accent);
        let mut c = ThemeController::new(
            MemoryStyle::new(),
            store,
            RecordingHost::new(),
            RecordingSignals::new(),
        );
        let first_sync = c.refresh();
        let first_style = c.style().properties().clone();
        let second_sync = c.refresh();
        prop_assert_eq!(first_sync, second_sync);
        prop_assert_eq!(c.style().properties(), &first_style);
    }
}
