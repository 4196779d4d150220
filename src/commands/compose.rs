//! Implementation of the `airbrush compose` command.

use super::{copy_prompt, load_profile, open_session, record};
use crate::cli::ComposeArgs;
use crate::clipboard::CopyTarget;
use crate::error::{AirbrushError, Result};
use crate::events::{Event, EventAction};
use crate::fs::atomic_write_file;
use crate::profile::Profile;
use crate::session::{Session, Update, format_clock};
use serde_json::json;

/// Execute the `airbrush compose` command.
///
/// Applies every `--set` update in order (each one recomposes, as a click
/// would), then prints the final prompt.
pub fn cmd_compose(args: ComposeArgs) -> Result<()> {
    let mut profile = load_profile(&args.profile)?;
    let mut session = open_session(&profile);

    for assignment in &args.set {
        let update = Update::parse_assignment(assignment)?;
        session.apply(update);
    }

    if let Some(path) = &args.save {
        profile = Profile {
            selection: session.selection().clone(),
            text: session.text().clone(),
            ..profile
        };
        profile.save(path)?;
        eprintln!("Saved profile to {}", path.display());
    }

    if let Some(path) = &args.out {
        atomic_write_file(path, &format!("{}\n", session.prompt()))?;
    }

    if args.json {
        println!("{}", render_json(&session)?);
    } else {
        println!("{}", session.prompt());
        eprintln!("{}", session.generated_label());
    }

    record(
        &profile,
        Event::new(EventAction::Compose).with_details(json!({
            "prompt": session.prompt(),
            "complete": session.is_complete(),
            "updates": args.set,
        })),
    );

    if args.copy {
        if !session.is_complete() {
            log::warn!("copying the guidance message; set name1 to get a prompt");
        }
        let fallback = args
            .copy_fallback
            .as_deref()
            .or(profile.fallback_file.as_deref());
        let report = copy_prompt(session.prompt(), fallback)?;
        eprintln!("{}  {}", report.status(), report.label());

        let target = match &report.target {
            CopyTarget::Clipboard => "clipboard".to_string(),
            CopyTarget::Fallback(dest) => dest.clone(),
        };
        record(
            &profile,
            Event::new(EventAction::Copy).with_details(json!({
                "target": target,
                "copied_at": format_clock(&report.copied_at),
            })),
        );
    }

    Ok(())
}

/// `--json` output: the prompt, whether it is complete, and when it was built.
pub(super) fn render_json(session: &Session) -> Result<String> {
    let output = json!({
        "prompt": session.prompt(),
        "complete": session.is_complete(),
        "generated_at": session.generated_at().to_rfc3339(),
    });
    serde_json::to_string_pretty(&output)
        .map_err(|e| AirbrushError::IoError(format!("failed to render JSON: {}", e)))
}
