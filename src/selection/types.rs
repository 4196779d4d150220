//! Selection enums: lettering style, fill type, and effects.
//!
//! Profiles are read leniently: unknown style or fill strings fall back to the
//! default variant and unknown effects are dropped, each with a warning.
//! Update commands use the strict `parse` functions instead.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lettering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LetterStyle {
    #[default]
    Dripping,
    Bubble,
}

impl LetterStyle {
    /// Parse a letter style from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dripping" => Some(Self::Dripping),
            "bubble" => Some(Self::Bubble),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterStyle::Dripping => "dripping",
            LetterStyle::Bubble => "bubble",
        }
    }
}

impl fmt::Display for LetterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LetterStyle {
    fn from(s: String) -> Self {
        LetterStyle::parse(&s).unwrap_or_else(|| {
            log::warn!("unrecognized letter style '{}', using dripping", s);
            LetterStyle::Dripping
        })
    }
}

impl From<LetterStyle> for String {
    fn from(style: LetterStyle) -> Self {
        style.as_str().to_string()
    }
}

/// Whether lettering is a solid color or a two-color gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FillType {
    #[default]
    Solid,
    Gradient,
}

impl FillType {
    /// Parse a fill type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" => Some(Self::Solid),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FillType::Solid => "solid",
            FillType::Gradient => "gradient",
        }
    }
}

impl fmt::Display for FillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FillType {
    fn from(s: String) -> Self {
        FillType::parse(&s).unwrap_or_else(|| {
            log::warn!("unrecognized fill type '{}', using solid", s);
            FillType::Solid
        })
    }
}

impl From<FillType> for String {
    fn from(fill: FillType) -> Self {
        fill.as_str().to_string()
    }
}

/// Lettering effect. Any combination of the two may be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    Outline,
    Glow,
}

impl Effect {
    /// Parse an effect from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "outline" => Some(Self::Outline),
            "glow" => Some(Self::Glow),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Outline => "outline",
            Effect::Glow => "glow",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize an effect list, dropping names that are not effects.
pub(crate) fn deserialize_effects<'de, D>(deserializer: D) -> Result<BTreeSet<Effect>, D::Error>
where
    D: Deserializer<'de>,
{
    let names: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(names
        .iter()
        .filter_map(|name| {
            let effect = Effect::parse(name);
            if effect.is_none() {
                log::warn!("ignoring unrecognized effect '{}'", name);
            }
            effect
        })
        .collect())
}
