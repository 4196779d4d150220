//! Airbrush: assemble prompts for airbrushed name designs.
//!
//! The heart of the crate is [`compose::compose`], a pure function from a
//! [`selection::SelectionState`] and [`selection::FreeTextInputs`] to a prompt
//! string. [`session::Session`] wraps it with named updates, and the `airbrush`
//! binary drives sessions from profiles, `--set` flags, and replay scripts.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod compose;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod profile;
pub mod selection;
pub mod session;

#[cfg(test)]
mod test_support;
