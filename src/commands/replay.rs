//! Implementation of the `airbrush replay` command.

use super::{load_profile, open_session, record};
use crate::cli::ReplayArgs;
use crate::error::{AirbrushError, Result};
use crate::events::{Event, EventAction};
use serde_json::json;

/// Execute the `airbrush replay` command.
///
/// Each script line is one update. After every applied line the prompt is
/// printed with a `[line N]` header, mirroring the live recomposition of the
/// form; `--final-only` prints just the last result.
pub fn cmd_replay(args: ReplayArgs) -> Result<()> {
    let profile = load_profile(&args.profile)?;
    let mut session = open_session(&profile);

    let script = std::fs::read_to_string(&args.script).map_err(|e| {
        AirbrushError::UserError(format!(
            "failed to read script '{}': {}",
            args.script.display(),
            e
        ))
    })?;

    let final_only = args.final_only;
    let applied = session.replay(&script, |line, s| {
        if !final_only {
            println!("[line {}] {}", line, s.generated_label());
            println!("{}", s.prompt());
            println!();
        }
    })?;

    if final_only {
        println!("{}", session.prompt());
    }
    eprintln!("Applied {} update(s). {}", applied, session.generated_label());

    record(
        &profile,
        Event::new(EventAction::Replay).with_details(json!({
            "script": args.script.display().to_string(),
            "applied": applied,
            "prompt": session.prompt(),
            "complete": session.is_complete(),
        })),
    );

    Ok(())
}
