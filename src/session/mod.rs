//! Session controller.
//!
//! A [`Session`] owns the selection record and the free-text inputs. The only
//! way to change them is [`Session::apply`], which performs one named
//! [`Update`] and immediately recomposes the prompt, recording when it did so.
//!
//! Replay scripts drive a session line by line:
//!
//! ```text
//! # comments and blank lines are skipped
//! name1 Mia
//! fill gradient
//! grad-a-color-hex "#FF5733"
//! dir next
//! ```

mod update;


pub use update::{UPDATE_KEYS, Update};

use crate::compose::{GUIDANCE_MESSAGE, compose};
use crate::error::{AirbrushError, Result};
use crate::selection::{FreeTextInputs, SelectionState, random_direction};
use chrono::{DateTime, Local};

/// Format a timestamp as a local `HH:MM` clock reading.
pub fn format_clock(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M").to_string()
}

/// Owns the current state and the prompt composed from it.
#[derive(Debug, Clone)]
pub struct Session {
    selection: SelectionState,
    text: FreeTextInputs,
    prompt: String,
    generated_at: DateTime<Local>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SelectionState::default(), FreeTextInputs::default())
    }
}

impl Session {
    /// Start a session from an initial state and compose once.
    pub fn new(selection: SelectionState, text: FreeTextInputs) -> Self {
        let prompt = compose(&selection, &text);
        Self {
            selection,
            text,
            prompt,
            generated_at: Local::now(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn text(&self) -> &FreeTextInputs {
        &self.text
    }

    /// The most recently composed prompt (or the guidance message).
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn generated_at(&self) -> DateTime<Local> {
        self.generated_at
    }

    /// `Generated: HH:MM` for the last recomposition.
    pub fn generated_label(&self) -> String {
        format!("Generated: {}", format_clock(&self.generated_at))
    }

    /// Whether the prompt is a real prompt rather than the guidance message.
    pub fn is_complete(&self) -> bool {
        self.prompt != GUIDANCE_MESSAGE
    }

    /// Apply one update and recompose.
    pub fn apply(&mut self, update: Update) -> &str {
        log::debug!("applying update {:?}", update);
        let state = &mut self.selection;
        match update {
            Update::LetterStyle(style) => state.letter_style = style,
            Update::FillType(fill) => state.fill_type = fill,
            Update::ToggleEffect(effect) => state.toggle_effect(effect),
            Update::Effects(effects) => state.effects = effects,
            Update::Direction(dir) => state.grad_dir = dir,
            Update::NextDirection => state.grad_dir = state.grad_dir.next(),
            Update::RandomDirection => state.grad_dir = random_direction(),
            Update::BottomOn(on) => state.bottom_on = on,
            Update::Transparent(on) => state.transparent = on,
            Update::ColorPreset(slot, label) => state.color_mut(slot).preset = label,
            Update::ColorCustom(slot, name) => state.color_mut(slot).custom = name,
            Update::ColorHex(slot, hex) => state.color_mut(slot).hex = hex,
            Update::Text(field, value) => *self.text.field_mut(field) = value,
            Update::Reset => {
                *state = SelectionState::default();
                self.text = FreeTextInputs::default();
            }
        }

        self.recompose()
    }

    fn recompose(&mut self) -> &str {
        self.prompt = compose(&self.selection, &self.text);
        self.generated_at = Local::now();
        &self.prompt
    }

    /// Apply every line of a replay script, calling `on_update` with the line
    /// number and the session after each applied update.
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors carry the
    /// 1-based line number of the offending line.
    pub fn replay<F>(&mut self, script: &str, mut on_update: F) -> Result<usize>
    where
        F: FnMut(usize, &Session),
    {
        let mut applied = 0;
        for (index, raw) in script.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens = shell_words::split(line).map_err(|e| AirbrushError::ScriptError {
                line: line_no,
                message: format!("failed to parse '{}': {}", line, e),
            })?;
            let update = Update::from_tokens(&tokens).map_err(|e| AirbrushError::ScriptError {
                line: line_no,
                message: e.to_string(),
            })?;

            self.apply(update);
            applied += 1;
            on_update(line_no, self);
        }
        Ok(applied)
    }
}
