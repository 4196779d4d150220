//! Prompt history log.
//!
//! When a history file is configured, each compose, replay, and copy appends
//! one event to it in NDJSON format (one JSON object per line).
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `compose`, `replay`, or `copy`
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `details`: freeform object (the prompt, where it was copied, ...)
//!
//! ```no_run
//! use airbrush::events::{Event, EventAction, append_event};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Compose).with_details(json!({"complete": true}));
//! append_event("history.ndjson", &event)?;
//! # Ok::<(), airbrush::error::AirbrushError>(())
//! ```

use crate::error::{AirbrushError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A prompt was composed from a profile and `--set` updates.
    Compose,
    /// A replay script was applied.
    Replay,
    /// The prompt was copied (clipboard or fallback file).
    Copy,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Compose => write!(f, "compose"),
            EventAction::Replay => write!(f, "replay"),
            EventAction::Copy => write!(f, "copy"),
        }
    }
}

/// A single history record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// Who ran the command (`USER@HOSTNAME`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create an event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AirbrushError::IoError(format!("failed to serialize event: {}", e)))
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the history file, creating it (and its directory) if needed.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let path = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            AirbrushError::IoError(format!(
                "failed to create history directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            AirbrushError::IoError(format!(
                "failed to open history file '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        AirbrushError::IoError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    log::debug!("recorded {} event in '{}'", event.action, path.display());
    Ok(())
}

/// Read every event from a history file. Blank lines are skipped.
pub fn read_events<P: AsRef<Path>>(path: P) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        AirbrushError::IoError(format!(
            "failed to read history file '{}': {}",
            path.display(),
            e
        ))
    })?;

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|e| {
                AirbrushError::IoError(format!(
                    "malformed history line {} in '{}': {}",
                    index + 1,
                    path.display(),
                    e
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Compose);

        assert_eq!(event.action, EventAction::Compose);
        assert!(!event.actor.is_empty());
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_serialization_is_single_line() {
        let event = Event::new(EventAction::Copy)
            .with_details(json!({"target": "clipboard", "prompt": "line one\nline two"}));

        let json_line = event.to_ndjson_line().unwrap();
        assert!(!json_line.contains('\n'));
        assert!(json_line.contains("\"copy\""));

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.details["target"], "clipboard");
    }

    #[test]
    fn test_append_event_creates_file_and_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("history.ndjson");

        append_event(&path, &Event::new(EventAction::Compose)).unwrap();

        assert!(path.exists());
        let events = read_events(&path).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, EventAction::Compose);
    }

    #[test]
    fn test_append_event_multiple_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.ndjson");

        append_event(&path, &Event::new(EventAction::Replay)).unwrap();
        append_event(
            &path,
            &Event::new(EventAction::Copy).with_details(json!({"target": "clipboard"})),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);

        let events = read_events(&path).unwrap();
        assert_eq!(events[0].action, EventAction::Replay);
        assert_eq!(events[1].action, EventAction::Copy);
    }

    #[test]
    fn test_read_events_reports_bad_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("history.ndjson");
        fs::write(&path, "not json\n").unwrap();

        let err = read_events(&path).unwrap_err();
        assert!(err.to_string().contains("malformed history line 1"));
    }
}
