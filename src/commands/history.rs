//! Implementation of the `airbrush history` command.

use super::load_profile;
use crate::cli::HistoryArgs;
use crate::error::{AirbrushError, Result};
use crate::events::read_events;

/// Longest prompt excerpt shown per entry.
const PREVIEW_CHARS: usize = 72;

/// Execute the `airbrush history` command.
pub fn cmd_history(args: HistoryArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;
    let path = profile.history_path().ok_or_else(|| {
        AirbrushError::UserError(
            "no history file configured.\n\n\
             Set `history_file` in the profile or the AIRBRUSH_HISTORY environment variable."
                .to_string(),
        )
    })?;

    if !path.exists() {
        println!("No history yet ({}).", path.display());
        return Ok(());
    }

    let events = read_events(&path)?;
    let skip = events.len().saturating_sub(args.limit);
    for event in events.iter().skip(skip) {
        let summary = event
            .details
            .get("prompt")
            .and_then(|p| p.as_str())
            .map(preview)
            .or_else(|| {
                event
                    .details
                    .get("target")
                    .and_then(|t| t.as_str())
                    .map(|t| format!("-> {}", t))
            })
            .unwrap_or_default();
        println!(
            "{}  {:<8} {}",
            event.ts.format("%Y-%m-%d %H:%M:%S UTC"),
            event.action.to_string(),
            summary
        );
    }
    Ok(())
}

fn preview(prompt: &str) -> String {
    if prompt.chars().count() <= PREVIEW_CHARS {
        return prompt.to_string();
    }
    let cut: String = prompt.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_prompts() {
        let long = "a".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.len(), PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));

        assert_eq!(preview("short"), "short");
    }
}
