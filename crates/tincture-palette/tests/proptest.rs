//! Property-based tests for shade generation.

use proptest::prelude::*;
use tincture_palette::{generate_shades, HexColor, ShadeKey};

// ============================================================================
// Strategies
// ============================================================================

fn hex_strategy() -> impl Strategy<Value = String> {
    "#[0-9a-fA-F]{6}"
}

fn is_lowercase_hex(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every valid color yields eleven valid `#RRGGBB` shades.
    #[test]
    fn eleven_valid_shades(base in hex_strategy()) {
        let set = generate_shades(&base).unwrap();
        prop_assert_eq!(set.len(), 11);
        for (key, color) in set.iter() {
            prop_assert!(HexColor::is_valid(color.as_str()));
            if key != ShadeKey::S500 {
                prop_assert!(is_lowercase_hex(color.as_str()), "{} is not lowercase", color);
            }
        }
    }

    /// Shade 500 is the input, byte for byte.
    #[test]
    fn shade_500_is_input(base in hex_strategy()) {
        let set = generate_shades(&base).unwrap();
        prop_assert_eq!(set.get(ShadeKey::S500).as_str(), base.as_str());
    }

    /// Shade 50 is never darker than the base and is strictly lighter unless white.
    #[test]
    fn shade_50_is_lighter(base in hex_strategy()) {
        let set = generate_shades(&base).unwrap();
        let b = set.base().rgb();
        let l = set.get(ShadeKey::S50).rgb();
        prop_assert!(l.0 >= b.0 && l.1 >= b.1 && l.2 >= b.2);
        if b.channels() != (255, 255, 255) {
            prop_assert!(l.0 > b.0 || l.1 > b.1 || l.2 > b.2);
        }
    }

    /// Shade 950 is never lighter than the base and is strictly darker unless black.
    #[test]
    fn shade_950_is_darker(base in hex_strategy()) {
        let set = generate_shades(&base).unwrap();
        let b = set.base().rgb();
        let d = set.get(ShadeKey::S950).rgb();
        prop_assert!(d.0 <= b.0 && d.1 <= b.1 && d.2 <= b.2);
        if b.channels() != (0, 0, 0) {
            prop_assert!(d.0 < b.0 || d.1 < b.1 || d.2 < b.2);
        }
    }

    /// Walking from 50 to 950 never gets lighter in any channel.
    #[test]
    fn shades_are_monotonic(base in hex_strategy()) {
        let set = generate_shades(&base).unwrap();
        let rgbs: Vec<_> = set.iter().map(|(_, c)| c.rgb()).collect();
        for pair in rgbs.windows(2) {
            prop_assert!(pair[0].0 >= pair[1].0);
            prop_assert!(pair[0].1 >= pair[1].1);
            prop_assert!(pair[0].2 >= pair[1].2);
        }
    }

    /// Generation is deterministic.
    #[test]
    fn generation_is_idempotent(base in hex_strategy()) {
        prop_assert_eq!(generate_shades(&base), generate_shades(&base));
    }

    /// Anything that is not `#` plus six hex digits is rejected.
    #[test]
    fn short_forms_rejected(digits in "[0-9a-f]{0,5}") {
        let candidate = format!("#{}", digits);
        prop_assert!(generate_shades(&candidate).is_none());
    }

    /// Strings without the leading hash are rejected.
    #[test]
    fn missing_hash_rejected(digits in "[0-9a-f]{6}") {
        prop_assert!(generate_shades(&digits).is_none());
    }
}
