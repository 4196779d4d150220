//! Prompt composition.
//!
//! `compose` is a pure function from the selection record and the free-text
//! inputs to the final prompt sentence. It never fails: when the name is
//! missing it returns [`GUIDANCE_MESSAGE`] instead of a prompt, and every
//! other empty input is replaced by a descriptive default.
//!
//! # Template
//!
//! ```text
//! An airbrushed design featuring the name "{name}" arranged across up to two
//! lines {colorPhrase} with {styleDesc} lettering and {effectsDesc}. Include the
//! following elements: {elementsDesc}. {elemColorSentence} {elemExtraSentence}
//! Background setting: {bgDesc}.{bottomSentence}{transparencySentence} Overall
//! style should be bold, high-contrast, print-ready, with crisp readable
//! text.{watermarkSentence}
//! ```
//!
//! Optional sentences that are empty leave their surrounding spaces in place.

mod color;
mod phrases;


pub use color::{looks_like_hex, resolve_color, resolve_slot};
pub use phrases::{effects_description, join_bottom_text, join_name, style_description};

use crate::selection::{FillType, FreeTextInputs, SelectionState};
use phrases::{fill_phrase, or_default};

/// Returned instead of a prompt when name line 1 is empty.
pub const GUIDANCE_MESSAGE: &str = "Enter Name Line 1 to generate your prompt.";

const DEFAULT_ELEMENTS: &str = "complementary themed elements";
const DEFAULT_BACKGROUND: &str = "clean solid white background";

const TRANSPARENT_SENTENCE: &str = " Use a fully transparent background if supported (PNG-style).";
const SOLID_BACKGROUND_SENTENCE: &str =
    " Use a solid background (defaults to white unless you describe otherwise).";

const WATERMARK_SENTENCE: &str = " Include a small, low-opacity watermark reading \"Generated with DeLoach Studios Airbrush Prompt Generator\" placed subtly near the bottom edge.";

/// Build the prompt for the given selection and text.
///
/// # Examples
///
/// ```
/// use airbrush::compose::{compose, GUIDANCE_MESSAGE};
/// use airbrush::selection::{FreeTextInputs, SelectionState};
///
/// let selection = SelectionState::default();
/// let mut text = FreeTextInputs::default();
/// assert_eq!(compose(&selection, &text), GUIDANCE_MESSAGE);
///
/// text.name_line1 = "Mia".to_string();
/// assert!(compose(&selection, &text).starts_with("An airbrushed design featuring the name \"Mia\""));
/// ```
pub fn compose(selection: &SelectionState, text: &FreeTextInputs) -> String {
    let name = join_name(&text.name_line1, &text.name_line2);
    if name.is_empty() {
        return GUIDANCE_MESSAGE.to_string();
    }

    let color_phrase = fill_phrase(
        selection.fill_type,
        &resolve_slot(&selection.name_color),
        &resolve_slot(&selection.grad_a_color),
        &resolve_slot(&selection.grad_b_color),
        selection.grad_dir,
    );
    let style = style_description(selection.letter_style);
    let effects = effects_description(&selection.effects);

    let elements = or_default(text.elements_list.trim(), DEFAULT_ELEMENTS);
    let elem_colors = sentence_if_present("Element color notes: ", &text.element_color_notes);
    let elem_extra = sentence_if_present("", &text.element_extra_details);
    let background = or_default(text.background_desc.trim(), DEFAULT_BACKGROUND);

    let bottom = bottom_sentence(selection, text);
    let transparency = if selection.transparent {
        TRANSPARENT_SENTENCE
    } else {
        SOLID_BACKGROUND_SENTENCE
    };

    format!(
        "An airbrushed design featuring the name \"{name}\" arranged across up to two lines \
         {color_phrase} with {style} lettering and {effects}. \
         Include the following elements: {elements}. {elem_colors} {elem_extra} \
         Background setting: {background}.{bottom}{transparency} \
         Overall style should be bold, high-contrast, print-ready, with crisp readable text.\
         {WATERMARK_SENTENCE}"
    )
}

/// `"{prefix}{value}."` for non-empty trimmed values, otherwise empty.
fn sentence_if_present(prefix: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}.", prefix, value)
    }
}

fn bottom_sentence(selection: &SelectionState, text: &FreeTextInputs) -> String {
    if !selection.bottom_on {
        return String::new();
    }
    let bottom_text = join_bottom_text(&text.bottom_line1, &text.bottom_line2);
    if bottom_text.is_empty() {
        return String::new();
    }

    let color = resolve_slot(&selection.bottom_color);
    let color_phrase = if !color.is_empty() {
        format!(" in {}", color)
    } else {
        match selection.fill_type {
            FillType::Gradient => " using the design's gradient palette".to_string(),
            FillType::Solid => " using the name color".to_string(),
        }
    };

    format!(
        " Add bottom text reading \"{}\" below the name in a matching style{}.",
        bottom_text, color_phrase
    )
}
