//! Command implementations for airbrush.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the setup shared by commands that build a session.

mod compose;
mod dir;
mod history;
mod init;
mod replay;


use crate::cli::{Command, ProfileArgs};
use crate::clipboard::{
    ClipboardWriter, CopyReport, DEFAULT_FALLBACK_FILE, FileClipboard, SystemClipboard,
    copy_with_fallback,
};
use crate::error::Result;
use crate::events::{Event, append_event};
use crate::profile::{Profile, resolve_profile_path};
use crate::session::Session;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Compose(args) => compose::cmd_compose(args),
        Command::Replay(args) => replay::cmd_replay(args),
        Command::Dir(dir_cmd) => dir::cmd_dir(dir_cmd),
        Command::Init(args) => init::cmd_init(args),
        Command::History(args) => history::cmd_history(args),
    }
}

/// Load the profile named by the flag or environment, or the defaults.
fn load_profile(args: &ProfileArgs) -> Result<Profile> {
    match resolve_profile_path(args.profile.as_deref()) {
        Some(path) => Profile::load(&path),
        None => {
            log::debug!("no profile given, using built-in defaults");
            Ok(Profile::default())
        }
    }
}

/// Start a session from a profile's selection and text.
fn open_session(profile: &Profile) -> Session {
    Session::new(profile.selection.clone(), profile.text.clone())
}

/// Record a history event if a history file is configured.
///
/// History is best-effort: a failed write is logged, not returned.
fn record(profile: &Profile, event: Event) {
    if let Some(path) = profile.history_path()
        && let Err(e) = append_event(&path, &event)
    {
        log::warn!("could not record {} event: {}", event.action, e);
    }
}

/// Copy text to the system clipboard, falling back to a file.
fn copy_prompt(text: &str, fallback_path: Option<&Path>) -> Result<CopyReport> {
    let mut system = match SystemClipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            log::info!("system clipboard unavailable: {}", e);
            None
        }
    };
    let mut fallback =
        FileClipboard::new(fallback_path.unwrap_or_else(|| Path::new(DEFAULT_FALLBACK_FILE)));

    copy_with_fallback(
        system.as_mut().map(|c| c as &mut dyn ClipboardWriter),
        &mut fallback,
        text,
    )
}
