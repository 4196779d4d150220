//! Small lookups that turn selections into sentence fragments.

use crate::selection::{Direction, Effect, FillType, LetterStyle};
use std::collections::BTreeSet;

/// Join the two name lines. An empty first line means no name at all.
pub fn join_name(line1: &str, line2: &str) -> String {
    let first = line1.trim();
    let second = line2.trim();
    if first.is_empty() {
        return String::new();
    }
    if second.is_empty() {
        first.to_string()
    } else {
        format!("{} {}", first, second)
    }
}

/// Join the two bottom-text lines. Unlike the name, the first line may be empty.
pub fn join_bottom_text(line1: &str, line2: &str) -> String {
    let first = line1.trim();
    let second = line2.trim();
    if second.is_empty() {
        first.to_string()
    } else {
        format!("{} {}", first, second)
    }
}

pub fn style_description(style: LetterStyle) -> &'static str {
    match style {
        LetterStyle::Bubble => "rounded bubble graffiti-style",
        LetterStyle::Dripping => "dripping graffiti-style",
    }
}

pub fn effects_description(effects: &BTreeSet<Effect>) -> &'static str {
    match (effects.contains(&Effect::Outline), effects.contains(&Effect::Glow)) {
        (true, true) => "outline and glow effects",
        (true, false) => "outline effects",
        (false, true) => "glow effects",
        (false, false) => "clean airbrush shading",
    }
}

/// The `in ...` phrase describing how the lettering is filled.
pub fn fill_phrase(
    fill: FillType,
    name_color: &str,
    grad_a: &str,
    grad_b: &str,
    direction: Direction,
) -> String {
    match fill {
        FillType::Solid => format!("in solid {}", or_default(name_color, "a bold color")),
        FillType::Gradient => format!(
            "in a smooth gradient from {} to {}, oriented {}",
            or_default(grad_a, "Color A"),
            or_default(grad_b, "Color B"),
            direction.phrase()
        ),
    }
}

/// `value` unless it is empty, in which case `default`.
pub fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
