//! Implementation of the `airbrush init` command.

use crate::cli::InitArgs;
use crate::error::{AirbrushError, Result};
use crate::profile::{DEFAULT_PROFILE_FILE, Profile};
use std::path::PathBuf;

/// Execute the `airbrush init` command.
///
/// Writes the startup defaults as a profile. Refuses to overwrite an existing
/// file unless `--force` is given.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let path = args
        .path
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_FILE));

    if path.exists() && !args.force {
        return Err(AirbrushError::UserError(format!(
            "'{}' already exists.\n\nUse --force to overwrite it.",
            path.display()
        )));
    }

    Profile::default().save(&path)?;
    println!("Wrote default profile to {}", path.display());
    Ok(())
}
