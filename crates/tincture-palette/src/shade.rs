//! Shade keys and shade set generation.
//!
//! A [`ShadeSet`] holds eleven colors keyed by weight, from `50` (lightest)
//! to `950` (darkest). Weight `500` is the base color itself. Lighter weights
//! mix the base toward white, darker weights scale it toward black:
//!
//! | Key | Transform      | Key | Transform     |
//! |-----|----------------|-----|---------------|
//! | 50  | lighten 0.85   | 600 | darken 0.15   |
//! | 100 | lighten 0.75   | 700 | darken 0.35   |
//! | 200 | lighten 0.55   | 800 | darken 0.55   |
//! | 300 | lighten 0.35   | 900 | darken 0.75   |
//! | 400 | lighten 0.15   | 950 | darken 0.85   |
//!
//! The arithmetic is plain sRGB channel mixing. It is not perceptually
//! uniform, and it is not meant to be.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::hex::{HexColor, Rgb};

/// One of the eleven canonical shade weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

/// How a shade is derived from the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Lighten(f64),
    Identity,
    Darken(f64),
}

impl ShadeKey {
    /// All keys, lightest first.
    pub const ALL: [ShadeKey; 11] = [
        ShadeKey::S50,
        ShadeKey::S100,
        ShadeKey::S200,
        ShadeKey::S300,
        ShadeKey::S400,
        ShadeKey::S500,
        ShadeKey::S600,
        ShadeKey::S700,
        ShadeKey::S800,
        ShadeKey::S900,
        ShadeKey::S950,
    ];

    /// The numeric weight used in variable names (`50`, `100`, ... `950`).
    pub const fn weight(self) -> u16 {
        match self {
            ShadeKey::S50 => 50,
            ShadeKey::S100 => 100,
            ShadeKey::S200 => 200,
            ShadeKey::S300 => 300,
            ShadeKey::S400 => 400,
            ShadeKey::S500 => 500,
            ShadeKey::S600 => 600,
            ShadeKey::S700 => 700,
            ShadeKey::S800 => 800,
            ShadeKey::S900 => 900,
            ShadeKey::S950 => 950,
        }
    }

    /// Looks up a key by its numeric weight.
    pub fn from_weight(weight: u16) -> Option<ShadeKey> {
        Self::ALL.into_iter().find(|k| k.weight() == weight)
    }

    pub const fn transform(self) -> Transform {
        match self {
            ShadeKey::S50 => Transform::Lighten(0.85),
            ShadeKey::S100 => Transform::Lighten(0.75),
            ShadeKey::S200 => Transform::Lighten(0.55),
            ShadeKey::S300 => Transform::Lighten(0.35),
            ShadeKey::S400 => Transform::Lighten(0.15),
            ShadeKey::S500 => Transform::Identity,
            ShadeKey::S600 => Transform::Darken(0.15),
            ShadeKey::S700 => Transform::Darken(0.35),
            ShadeKey::S800 => Transform::Darken(0.55),
            ShadeKey::S900 => Transform::Darken(0.75),
            ShadeKey::S950 => Transform::Darken(0.85),
        }
    }

    /// Applies this key's transform to `rgb`.
    pub fn apply(self, rgb: Rgb) -> Rgb {
        match self.transform() {
            Transform::Lighten(amount) => rgb.lighten(amount),
            Transform::Identity => rgb,
            Transform::Darken(amount) => rgb.darken(amount),
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weight())
    }
}

/// The eleven shades derived from one base color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeSet {
    shades: [HexColor; 11],
}

impl ShadeSet {
    /// Derives all shades of `base`. Shade 500 is `base` unchanged.
    pub fn generate(base: &HexColor) -> Self {
        let rgb = base.rgb();
        let shades = ShadeKey::ALL.map(|key| match key {
            ShadeKey::S500 => base.clone(),
            _ => HexColor::from(key.apply(rgb)),
        });
        Self { shades }
    }

    /// The shade for `key`.
    pub fn get(&self, key: ShadeKey) -> &HexColor {
        &self.shades[key as usize]
    }

    /// The base color (shade 500).
    pub fn base(&self) -> &HexColor {
        self.get(ShadeKey::S500)
    }

    /// Iterates shades lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &HexColor)> {
        ShadeKey::ALL.into_iter().zip(self.shades.iter())
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// CSS custom property declarations for this set under `name`.
    ///
    /// Each shade yields `--theme-{name}-{key}` followed by
    /// `--color-{name}-{key}`, both carrying the same value.
    pub fn css_variables(&self, name: &str) -> Vec<(String, String)> {
        self.css_variables_with_prefixes(name, &["--theme-", "--color-"])
    }

    /// Like [`css_variables`](Self::css_variables) with custom prefixes.
    pub fn css_variables_with_prefixes(
        &self,
        name: &str,
        prefixes: &[&str],
    ) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(self.len() * prefixes.len());
        for (key, color) in self.iter() {
            for prefix in prefixes {
                vars.push((format!("{prefix}{name}-{key}"), color.to_string()));
            }
        }
        vars
    }
}

impl Serialize for ShadeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, color) in self.iter() {
            map.serialize_entry(&key.weight().to_string(), color.as_str())?;
        }
        map.end()
    }
}

/// Parses `base` and derives its shades. Returns `None` for anything that
/// is not a `#RRGGBB` color.
pub fn generate_shades(base: &str) -> Option<ShadeSet> {
    HexColor::parse(base).ok().map(|c| ShadeSet::generate(&c))
}
