//! The selection record and free-text inputs read by the composer.

use super::direction::Direction;
use super::types::{Effect, FillType, LetterStyle, deserialize_effects};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The three layered sources for one color: preset label, custom name, hex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSlot {
    /// Preset label picked from the palette (may be empty).
    pub preset: String,
    /// Free-text color name.
    pub custom: String,
    /// Hex code; highest priority when present. Never validated.
    pub hex: String,
}

impl ColorSlot {
    /// A slot holding only a preset label.
    pub fn preset(label: impl Into<String>) -> Self {
        Self {
            preset: label.into(),
            ..Self::default()
        }
    }
}

/// Identifies one of the four color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlotId {
    Name,
    GradientA,
    GradientB,
    Bottom,
}

impl ColorSlotId {
    /// Parse the slot prefix used by update keys (`name`, `grad-a`, `grad-b`, `bottom`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "grad-a" => Some(Self::GradientA),
            "grad-b" => Some(Self::GradientB),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSlotId::Name => "name",
            ColorSlotId::GradientA => "grad-a",
            ColorSlotId::GradientB => "grad-b",
            ColorSlotId::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ColorSlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every button-driven choice the user has made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionState {
    pub letter_style: LetterStyle,
    pub fill_type: FillType,
    #[serde(deserialize_with = "deserialize_effects")]
    pub effects: BTreeSet<Effect>,
    pub grad_dir: Direction,
    pub bottom_on: bool,
    pub transparent: bool,
    pub name_color: ColorSlot,
    pub grad_a_color: ColorSlot,
    pub grad_b_color: ColorSlot,
    pub bottom_color: ColorSlot,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            letter_style: LetterStyle::Dripping,
            fill_type: FillType::Solid,
            effects: BTreeSet::new(),
            grad_dir: Direction::LeftToRight,
            bottom_on: true,
            transparent: false,
            name_color: ColorSlot::preset("Purple"),
            grad_a_color: ColorSlot::preset("Purple"),
            grad_b_color: ColorSlot::preset("Teal"),
            bottom_color: ColorSlot::default(),
        }
    }
}

impl SelectionState {
    pub fn color(&self, slot: ColorSlotId) -> &ColorSlot {
        match slot {
            ColorSlotId::Name => &self.name_color,
            ColorSlotId::GradientA => &self.grad_a_color,
            ColorSlotId::GradientB => &self.grad_b_color,
            ColorSlotId::Bottom => &self.bottom_color,
        }
    }

    pub fn color_mut(&mut self, slot: ColorSlotId) -> &mut ColorSlot {
        match slot {
            ColorSlotId::Name => &mut self.name_color,
            ColorSlotId::GradientA => &mut self.grad_a_color,
            ColorSlotId::GradientB => &mut self.grad_b_color,
            ColorSlotId::Bottom => &mut self.bottom_color,
        }
    }

    /// Flip an effect on or off.
    pub fn toggle_effect(&mut self, effect: Effect) {
        if !self.effects.remove(&effect) {
            self.effects.insert(effect);
        }
    }
}

/// Identifies one free-text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    NameLine1,
    NameLine2,
    ElementsList,
    ElementColorNotes,
    ElementExtraDetails,
    BackgroundDesc,
    BottomLine1,
    BottomLine2,
}

impl TextField {
    /// Parse the update key for a text field.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name1" => Some(Self::NameLine1),
            "name2" => Some(Self::NameLine2),
            "elements" => Some(Self::ElementsList),
            "element-colors" => Some(Self::ElementColorNotes),
            "element-extra" => Some(Self::ElementExtraDetails),
            "background" => Some(Self::BackgroundDesc),
            "bottom1" => Some(Self::BottomLine1),
            "bottom2" => Some(Self::BottomLine2),
            _ => None,
        }
    }
}

/// Free-text fields. Values are stored as typed and trimmed when composed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeTextInputs {
    pub name_line1: String,
    pub name_line2: String,
    pub elements_list: String,
    pub element_color_notes: String,
    pub element_extra_details: String,
    pub background_desc: String,
    pub bottom_line1: String,
    pub bottom_line2: String,
}

impl FreeTextInputs {
    pub fn field_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::NameLine1 => &mut self.name_line1,
            TextField::NameLine2 => &mut self.name_line2,
            TextField::ElementsList => &mut self.elements_list,
            TextField::ElementColorNotes => &mut self.element_color_notes,
            TextField::ElementExtraDetails => &mut self.element_extra_details,
            TextField::BackgroundDesc => &mut self.background_desc,
            TextField::BottomLine1 => &mut self.bottom_line1,
            TextField::BottomLine2 => &mut self.bottom_line2,
        }
    }
}
