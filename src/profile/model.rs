//! Profile struct definition.

use crate::selection::{FreeTextInputs, SelectionState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the default profile.
pub const PROFILE_ENV: &str = "AIRBRUSH_PROFILE";

/// Environment variable overriding the history file.
pub const HISTORY_ENV: &str = "AIRBRUSH_HISTORY";

/// File written by `airbrush init` when no path is given.
pub const DEFAULT_PROFILE_FILE: &str = "airbrush.yaml";

/// A saved selection plus tool settings.
///
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Button-driven choices and color slots.
    pub selection: SelectionState,

    /// Typed text fields.
    pub text: FreeTextInputs,

    /// Append compose/copy events to this NDJSON file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,

    /// Where `--copy` writes the prompt when the system clipboard is unavailable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_file: Option<PathBuf>,
}

/// On-disk encoding of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Yaml,
    Json,
}

impl ProfileFormat {
    /// Pick the format from the file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProfileFormat::Json,
            _ => ProfileFormat::Yaml,
        }
    }
}
