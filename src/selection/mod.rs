//! Selection model for the prompt generator.
//!
//! This module defines the in-memory record that the composer reads:
//!
//! - **Types**: lettering style, fill type, effects
//! - **Direction**: the eight gradient orientations and their cycling helpers
//! - **State**: `SelectionState` (button choices and color slots) and
//!   `FreeTextInputs` (typed text)

mod direction;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use direction::{DIRECTIONS, Direction, next_direction, random_direction};
pub use state::{ColorSlot, ColorSlotId, FreeTextInputs, SelectionState, TextField};
pub use types::{Effect, FillType, LetterStyle};
