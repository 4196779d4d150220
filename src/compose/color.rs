//! Color resolution for a single color slot.
//!
//! Priority is fixed: hex + name, then hex alone, then name alone, then the
//! preset label (which may be empty).

use crate::selection::ColorSlot;
use regex::Regex;
use std::sync::LazyLock;

/// Shape of a `#RGB` / `#RRGGBB` code. Only used for diagnostics.
static HEX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Invalid hex color regex")
});

/// Resolve a color description from its three layered sources.
///
/// # Examples
///
/// ```
/// use airbrush::compose::resolve_color;
///
/// assert_eq!(resolve_color("Teal", " sunset orange ", "#FF5733"), "sunset orange (#FF5733)");
/// assert_eq!(resolve_color("Teal", "", "#FF5733"), "#FF5733");
/// assert_eq!(resolve_color("Teal", "sunset orange", ""), "sunset orange (approximate)");
/// assert_eq!(resolve_color("Teal", "", ""), "Teal");
/// ```
pub fn resolve_color(preset: &str, custom_name: &str, hex: &str) -> String {
    let name = custom_name.trim();
    let hex = hex.trim();

    if !hex.is_empty() && !looks_like_hex(hex) {
        // Passed through verbatim; the image tool gets whatever was typed.
        log::debug!("hex color '{}' is not in #RRGGBB form", hex);
    }

    match (name.is_empty(), hex.is_empty()) {
        (false, false) => format!("{} ({})", name, hex),
        (true, false) => hex.to_string(),
        (false, true) => format!("{} (approximate)", name),
        (true, true) => preset.to_string(),
    }
}

/// Resolve a [`ColorSlot`].
pub fn resolve_slot(slot: &ColorSlot) -> String {
    resolve_color(&slot.preset, &slot.custom, &slot.hex)
}

/// Whether `hex` has the shape of a 3- or 6-digit hex color.
pub fn looks_like_hex(hex: &str) -> bool {
    HEX_REGEX.is_match(hex.trim())
}
