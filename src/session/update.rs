//! Named update commands and their textual form.
//!
//! Every user-facing control maps to one [`Update`]. Updates are written as a
//! key followed by a value, either as separate tokens (`fill gradient`, used by
//! replay scripts) or as an assignment (`fill=gradient`, used by `--set`).

use crate::error::{AirbrushError, Result};
use crate::selection::{ColorSlotId, Direction, Effect, FillType, LetterStyle, TextField};
use std::collections::BTreeSet;

/// A single mutation of the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    LetterStyle(LetterStyle),
    FillType(FillType),
    ToggleEffect(Effect),
    Effects(BTreeSet<Effect>),
    Direction(Direction),
    NextDirection,
    RandomDirection,
    BottomOn(bool),
    Transparent(bool),
    ColorPreset(ColorSlotId, String),
    ColorCustom(ColorSlotId, String),
    ColorHex(ColorSlotId, String),
    Text(TextField, String),
    /// Restore the startup defaults and clear every text field.
    Reset,
}

/// Keys accepted by [`Update::from_tokens`], for help and error messages.
pub const UPDATE_KEYS: &[&str] = &[
    "style",
    "fill",
    "effect",
    "effects",
    "dir",
    "bottom",
    "transparent",
    "name-color[-custom|-hex]",
    "grad-a-color[-custom|-hex]",
    "grad-b-color[-custom|-hex]",
    "bottom-color[-custom|-hex]",
    "name1",
    "name2",
    "elements",
    "element-colors",
    "element-extra",
    "background",
    "bottom1",
    "bottom2",
    "reset",
];

impl Update {
    /// Parse a `key=value` assignment.
    ///
    /// ```
    /// use airbrush::selection::FillType;
    /// use airbrush::session::Update;
    ///
    /// let update = Update::parse_assignment("fill=gradient").unwrap();
    /// assert_eq!(update, Update::FillType(FillType::Gradient));
    /// ```
    pub fn parse_assignment(assignment: &str) -> Result<Self> {
        match assignment.split_once('=') {
            Some((key, value)) => Self::from_key_value(key.trim(), Some(value)),
            None => Self::from_key_value(assignment.trim(), None),
        }
    }

    /// Parse a key followed by its value tokens. Multiple value tokens are
    /// joined with single spaces.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        let Some((key, rest)) = tokens.split_first() else {
            return Err(AirbrushError::UserError("empty update".to_string()));
        };
        let value = if rest.is_empty() {
            None
        } else {
            Some(
                rest.iter()
                    .map(|t| t.as_ref())
                    .collect::<Vec<&str>>()
                    .join(" "),
            )
        };
        Self::from_key_value(key.as_ref(), value.as_deref())
    }

    fn from_key_value(key: &str, value: Option<&str>) -> Result<Self> {
        if key == "reset" {
            return Ok(Update::Reset);
        }

        let value = value.ok_or_else(|| {
            AirbrushError::UserError(format!("missing value for update '{}'", key))
        })?;

        match key {
            "style" => LetterStyle::parse(value)
                .map(Update::LetterStyle)
                .ok_or_else(|| invalid(key, value, "dripping, bubble")),
            "fill" => FillType::parse(value)
                .map(Update::FillType)
                .ok_or_else(|| invalid(key, value, "solid, gradient")),
            "effect" => Effect::parse(value)
                .map(Update::ToggleEffect)
                .ok_or_else(|| invalid(key, value, "outline, glow")),
            "effects" => parse_effect_list(value).map(Update::Effects),
            "dir" => match value.trim() {
                "next" => Ok(Update::NextDirection),
                "random" => Ok(Update::RandomDirection),
                other => Direction::parse(other)
                    .map(Update::Direction)
                    .ok_or_else(|| invalid(key, value, "a direction label, next, random")),
            },
            "bottom" => parse_switch(key, value).map(Update::BottomOn),
            "transparent" => parse_switch(key, value).map(Update::Transparent),
            _ => {
                if let Some(field) = TextField::parse(key) {
                    return Ok(Update::Text(field, value.to_string()));
                }
                parse_color_key(key, value)
            }
        }
    }
}

fn parse_color_key(key: &str, value: &str) -> Result<Update> {
    let unknown = || {
        AirbrushError::UserError(format!(
            "unknown update key '{}'\n\nKnown keys: {}",
            key,
            UPDATE_KEYS.join(", ")
        ))
    };

    if let Some(prefix) = key.strip_suffix("-color-custom") {
        let slot = ColorSlotId::parse(prefix).ok_or_else(unknown)?;
        return Ok(Update::ColorCustom(slot, value.to_string()));
    }
    if let Some(prefix) = key.strip_suffix("-color-hex") {
        let slot = ColorSlotId::parse(prefix).ok_or_else(unknown)?;
        return Ok(Update::ColorHex(slot, value.to_string()));
    }
    if let Some(prefix) = key.strip_suffix("-color") {
        let slot = ColorSlotId::parse(prefix).ok_or_else(unknown)?;
        return Ok(Update::ColorPreset(slot, value.to_string()));
    }
    Err(unknown())
}

fn parse_effect_list(value: &str) -> Result<BTreeSet<Effect>> {
    let value = value.trim();
    if value.is_empty() || value == "none" {
        return Ok(BTreeSet::new());
    }
    value
        .split(',')
        .map(|name| Effect::parse(name).ok_or_else(|| invalid("effects", name, "outline, glow, none")))
        .collect()
}

fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(invalid(key, value, "on, off")),
    }
}

fn invalid(key: &str, value: &str, expected: &str) -> AirbrushError {
    AirbrushError::UserError(format!(
        "invalid value '{}' for '{}' (expected: {})",
        value.trim(),
        key,
        expected
    ))
}
