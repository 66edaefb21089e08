//! # Tincture Palette - Shade Scales from a Base Color
//!
//! `tincture-palette` turns one `#RRGGBB` base color into the eleven-step
//! shade scale (`50` through `950`) that utility-first stylesheets expect,
//! and renders it as CSS custom properties.
//!
//! ## Quick Start
//!
//! ```rust
//! use tincture_palette::{generate_shades, ShadeKey};
//!
//! let shades = generate_shades("#FF5500").unwrap();
//! assert_eq!(shades.get(ShadeKey::S50).as_str(), "#ffe6d9");
//! assert_eq!(shades.get(ShadeKey::S500).as_str(), "#FF5500");
//! assert_eq!(shades.len(), 11);
//!
//! // Malformed colors produce nothing
//! assert!(generate_shades("#ABC").is_none());
//! ```
//!
//! ## CSS Variables
//!
//! Each shade is published under two names, `--theme-{name}-{key}` and
//! `--color-{name}-{key}`:
//!
//! ```rust
//! use tincture_palette::generate_shades;
//!
//! let vars = generate_shades("#000000").unwrap().css_variables("accent");
//! assert_eq!(vars[0], ("--theme-accent-50".to_string(), "#d9d9d9".to_string()));
//! assert_eq!(vars[1].0, "--color-accent-50");
//! ```

mod css;
mod error;
mod hex;
mod shade;

pub use css::render_css;
pub use error::{ColorError, Result};
pub use hex::{HexColor, Rgb};
pub use shade::{generate_shades, ShadeKey, ShadeSet, Transform};
