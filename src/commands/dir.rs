//! Implementation of the `airbrush dir` subcommands.

use crate::cli::{DirAction, DirCommand};
use crate::error::{AirbrushError, Result};
use crate::selection::{DIRECTIONS, Direction, next_direction, random_direction};

/// Execute an `airbrush dir` subcommand.
pub fn cmd_dir(dir_cmd: DirCommand) -> Result<()> {
    match dir_cmd.action {
        DirAction::List => {
            for dir in DIRECTIONS {
                println!("{:<6} {}", dir.label(), dir.phrase());
            }
            Ok(())
        }
        DirAction::Next { current } => {
            let current = Direction::parse(&current).ok_or_else(|| {
                AirbrushError::UserError(format!(
                    "unknown direction '{}'\n\nUse `airbrush dir list` to see all directions.",
                    current
                ))
            })?;
            println!("{}", next_direction(current));
            Ok(())
        }
        DirAction::Random => {
            println!("{}", random_direction());
            Ok(())
        }
    }
}
