//! Stylesheet rendering for shade sets.

use std::fmt::Write;

use crate::shade::ShadeSet;

/// Renders a rule block declaring the base color and every shade variable
/// of each named set.
///
/// ```rust
/// use tincture_palette::{generate_shades, render_css};
///
/// let primary = generate_shades("#ff5500").unwrap();
/// let css = render_css(":root", &[("primary", &primary)]);
/// assert!(css.starts_with(":root {\n  --color-primary: #ff5500;\n"));
/// assert!(css.contains("  --theme-primary-50: #ffe6d9;\n"));
/// ```
pub fn render_css(selector: &str, sets: &[(&str, &ShadeSet)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{selector} {{");
    for (name, set) in sets {
        let _ = writeln!(out, "  --color-{name}: {};", set.base());
        for (var, value) in set.css_variables(name) {
            let _ = writeln!(out, "  {var}: {value};");
        }
    }
    out.push_str("}\n");
    out
}
