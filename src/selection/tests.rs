//! Tests for the selection model.

use crate::selection::{
    ColorSlot, ColorSlotId, Direction, Effect, FillType, FreeTextInputs, LetterStyle,
    SelectionState, TextField,
};

#[test]
fn test_default_selection() {
    let state = SelectionState::default();

    assert_eq!(state.letter_style, LetterStyle::Dripping);
    assert_eq!(state.fill_type, FillType::Solid);
    assert!(state.effects.is_empty());
    assert_eq!(state.grad_dir, Direction::LeftToRight);
    assert!(state.bottom_on);
    assert!(!state.transparent);
    assert_eq!(state.name_color, ColorSlot::preset("Purple"));
    assert_eq!(state.grad_a_color, ColorSlot::preset("Purple"));
    assert_eq!(state.grad_b_color, ColorSlot::preset("Teal"));
    assert_eq!(state.bottom_color, ColorSlot::default());
}

#[test]
fn test_toggle_effect() {
    let mut state = SelectionState::default();

    state.toggle_effect(Effect::Glow);
    assert!(state.effects.contains(&Effect::Glow));

    state.toggle_effect(Effect::Outline);
    assert_eq!(state.effects.len(), 2);

    state.toggle_effect(Effect::Glow);
    assert_eq!(state.effects.len(), 1);
    assert!(state.effects.contains(&Effect::Outline));
}

#[test]
fn test_color_mut_targets_slot() {
    let mut state = SelectionState::default();
    state.color_mut(ColorSlotId::Bottom).hex = "#112233".to_string();

    assert_eq!(state.bottom_color.hex, "#112233");
    assert_eq!(state.color(ColorSlotId::Bottom).hex, "#112233");
    assert!(state.name_color.hex.is_empty());
}

#[test]
fn test_parse_partial_yaml_uses_defaults() {
    let yaml = r##"
fill_type: gradient
grad_dir: "T→B"
effects: [glow]
grad_a_color:
  custom: sunset orange
  hex: "#FF5733"
"##;
    let state: SelectionState = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(state.fill_type, FillType::Gradient);
    assert_eq!(state.grad_dir, Direction::TopToBottom);
    assert_eq!(state.effects.len(), 1);
    assert_eq!(state.grad_a_color.custom, "sunset orange");
    assert_eq!(state.grad_a_color.preset, "");
    // Unspecified fields keep their defaults
    assert!(state.bottom_on);
    assert_eq!(state.grad_b_color.preset, "Teal");
}

#[test]
fn test_unrecognized_values_fall_back() {
    let yaml = r#"
letter_style: blocky
fill_type: plaid
grad_dir: sideways
effects: [glow, sparkle]
"#;
    let state: SelectionState = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(state.letter_style, LetterStyle::Dripping);
    assert_eq!(state.fill_type, FillType::Solid);
    assert_eq!(state.grad_dir, Direction::LeftToRight);
    assert_eq!(state.effects.iter().copied().collect::<Vec<_>>(), vec![Effect::Glow]);
}

#[test]
fn test_selection_serializes_readable_values() {
    let mut state = SelectionState::default();
    state.letter_style = LetterStyle::Bubble;
    state.grad_dir = Direction::BottomLeftToTopRight;
    state.effects.insert(Effect::Outline);

    let yaml = serde_yaml::to_string(&state).unwrap();
    assert!(yaml.contains("letter_style: bubble"));
    assert!(yaml.contains("BL→TR"));
    assert!(yaml.contains("- outline"));
}

#[test]
fn test_text_field_keys() {
    let mut text = FreeTextInputs::default();
    for (key, value) in [("name1", "Mia"), ("bottom2", "2024"), ("background", "beach")] {
        let field = TextField::parse(key).unwrap();
        *text.field_mut(field) = value.to_string();
    }

    assert_eq!(text.name_line1, "Mia");
    assert_eq!(text.bottom_line2, "2024");
    assert_eq!(text.background_desc, "beach");
    assert!(TextField::parse("name3").is_none());
}

#[test]
fn test_strict_parsers_reject_unknown() {
    assert_eq!(LetterStyle::parse("Bubble"), Some(LetterStyle::Bubble));
    assert_eq!(LetterStyle::parse("blocky"), None);
    assert_eq!(FillType::parse(" gradient "), Some(FillType::Gradient));
    assert_eq!(FillType::parse("plaid"), None);
    assert_eq!(Effect::parse("GLOW"), Some(Effect::Glow));
    assert_eq!(Effect::parse("sparkle"), None);
    assert_eq!(ColorSlotId::parse("grad-b"), Some(ColorSlotId::GradientB));
    assert_eq!(ColorSlotId::parse("grad-c"), None);
}
