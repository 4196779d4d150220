//! Copy-to-clipboard with a fallback.
//!
//! The system clipboard is tried first. When it is unavailable (no display
//! server, headless CI, ...) the text is written to a fallback file instead so
//! the user still ends up with something to paste from.
//!
//! On Linux the X11/Wayland clipboard is owned by the process that set it, so
//! its contents vanish when `airbrush` exits. There the text is mirrored to the
//! fallback file as well.

use crate::error::{AirbrushError, Result};
use crate::fs::atomic_write;
use crate::session::format_clock;
use arboard::Clipboard;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Status text shown after a successful copy.
pub const COPIED_STATUS: &str = "COPIED ✅";

/// Default fallback file name, relative to the working directory.
pub const DEFAULT_FALLBACK_FILE: &str = "airbrush-prompt.txt";

/// Port for anything that can receive copied text.
pub trait ClipboardWriter {
    /// Write text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Human-readable name of the destination.
    fn describe(&self) -> String;

    /// Whether written text survives the end of this process.
    fn outlives_process(&self) -> bool {
        true
    }
}

/// Arboard-based system clipboard.
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    pub fn new() -> Result<Self> {
        let clipboard =
            Clipboard::new().map_err(|e| AirbrushError::ClipboardError(format!("{}", e)))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| AirbrushError::ClipboardError(format!("{}", e)))
    }

    fn describe(&self) -> String {
        "system clipboard".to_string()
    }

    fn outlives_process(&self) -> bool {
        !cfg!(target_os = "linux")
    }
}

/// Writes the copied text to a file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ClipboardWriter for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut content = text.to_string();
        content.push('\n');
        atomic_write(&self.path, content.as_bytes())
            .map_err(|e| AirbrushError::ClipboardError(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }
}

/// Where the text ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyTarget {
    Clipboard,
    Fallback(String),
}

/// Outcome of a successful copy.
#[derive(Debug, Clone)]
pub struct CopyReport {
    pub target: CopyTarget,
    /// Fallback that also received the text because the clipboard won't keep it.
    pub mirrored_to: Option<String>,
    pub copied_at: DateTime<Local>,
}

impl CopyReport {
    /// `Copied: HH:MM`.
    pub fn label(&self) -> String {
        format!("Copied: {}", format_clock(&self.copied_at))
    }

    pub fn status(&self) -> String {
        match &self.target {
            CopyTarget::Clipboard => match &self.mirrored_to {
                Some(dest) => format!("{} (also saved to {})", COPIED_STATUS, dest),
                None => COPIED_STATUS.to_string(),
            },
            CopyTarget::Fallback(dest) => format!("{} (saved to {})", COPIED_STATUS, dest),
        }
    }
}

/// Copy `text` to `primary`, falling back to `fallback` on failure.
///
/// `primary` is optional because connecting to the system clipboard can
/// itself fail; callers pass `None` in that case.
pub fn copy_with_fallback(
    primary: Option<&mut dyn ClipboardWriter>,
    fallback: &mut dyn ClipboardWriter,
    text: &str,
) -> Result<CopyReport> {
    if let Some(primary) = primary {
        match primary.write_text(text) {
            Ok(()) => {
                log::debug!("copied {} bytes to {}", text.len(), primary.describe());
                let mirrored_to = if primary.outlives_process() {
                    None
                } else {
                    mirror(fallback, text)
                };
                return Ok(CopyReport {
                    target: CopyTarget::Clipboard,
                    mirrored_to,
                    copied_at: Local::now(),
                });
            }
            Err(e) => {
                log::info!("{} unavailable ({}), using fallback", primary.describe(), e);
            }
        }
    }

    fallback.write_text(text).map_err(|e| {
        AirbrushError::ClipboardError(format!(
            "clipboard unavailable and fallback to {} failed: {}",
            fallback.describe(),
            e
        ))
    })?;

    Ok(CopyReport {
        target: CopyTarget::Fallback(fallback.describe()),
        mirrored_to: None,
        copied_at: Local::now(),
    })
}

/// Best-effort copy to the fallback; the clipboard write already succeeded.
fn mirror(fallback: &mut dyn ClipboardWriter, text: &str) -> Option<String> {
    match fallback.write_text(text) {
        Ok(()) => Some(fallback.describe()),
        Err(e) => {
            log::warn!("could not also save to {}: {}", fallback.describe(), e);
            None
        }
    }
}
