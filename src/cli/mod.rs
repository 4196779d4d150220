//! CLI argument parsing for airbrush.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Airbrush: build image-generation prompts for airbrushed name designs.
///
/// Selections (letter style, fill, colors, gradient direction, effects,
/// bottom text, transparency) come from a profile file plus `--set` updates.
#[derive(Parser, Debug)]
#[command(name = "airbrush")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for airbrush.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a prompt.
    ///
    /// Loads the profile (if any), applies `--set` updates in order, and
    /// prints the prompt to stdout. The generation time goes to stderr.
    Compose(ComposeArgs),

    /// Apply a script of updates, printing the prompt after each one.
    ///
    /// One update per line (`key value`), shell-style quoting,
    /// `#` comments.
    Replay(ReplayArgs),

    /// Gradient direction helpers.
    Dir(DirCommand),

    /// Write a profile holding the default selections.
    Init(InitArgs),

    /// Show recent entries from the history log.
    History(HistoryArgs),
}

/// Profile selection shared by commands that build a session.
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Profile to load (YAML, or JSON with a .json extension).
    /// Defaults to $AIRBRUSH_PROFILE.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,
}

/// Arguments for the `compose` command.
#[derive(Parser, Debug)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Update to apply before composing, as KEY=VALUE (repeatable).
    ///
    /// Examples: name1=Mia, fill=gradient, dir=next, grad-a-color-hex=#FF5733
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Copy the prompt to the system clipboard.
    ///
    /// On Linux the clipboard is cleared when airbrush exits, so the prompt is
    /// also saved to the fallback file there.
    #[arg(short, long)]
    pub copy: bool,

    /// File to write when the system clipboard is unavailable.
    #[arg(long, value_name = "PATH")]
    pub copy_fallback: Option<PathBuf>,

    /// Also write the prompt to this file.
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Print a JSON object instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Save the resulting selections back to this profile path.
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,
}

/// Arguments for the `replay` command.
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Script file with one update per line.
    pub script: PathBuf,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Only print the prompt once, after the last line.
    #[arg(long)]
    pub final_only: bool,
}

/// Direction subcommands.
#[derive(Parser, Debug)]
pub struct DirCommand {
    #[command(subcommand)]
    pub action: DirAction,
}

/// Available direction actions.
#[derive(Subcommand, Debug)]
pub enum DirAction {
    /// List all eight directions in cycling order.
    List,

    /// Print the direction after the given one.
    Next {
        /// Current direction (e.g. "L→R", "TL->BR", "top-to-bottom").
        current: String,
    },

    /// Print a random direction.
    Random,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the profile (default: airbrush.yaml).
    pub path: Option<PathBuf>,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `history` command.
#[derive(Parser, Debug)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Number of most recent entries to show.
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Unlike `Cli::parse`, this leaves exiting to the caller so argument
    /// errors can use [`usage_exit_code`] rather than clap's own code.
    pub fn parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Exit code for a clap parse failure.
///
/// `--help` and `--version` are successful exits; every other parse failure is
/// a user error.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::USER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_with_updates() {
        let cli = Cli::try_parse_from([
            "airbrush",
            "compose",
            "--set",
            "name1=Mia",
            "-s",
            "fill=gradient",
            "--copy",
        ])
        .unwrap();

        match cli.command {
            Command::Compose(args) => {
                assert_eq!(args.set, vec!["name1=Mia", "fill=gradient"]);
                assert!(args.copy);
                assert!(!args.json);
                assert!(args.profile.profile.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from([
            "airbrush",
            "replay",
            "design.txt",
            "--profile",
            "mia.yaml",
            "--final-only",
        ])
        .unwrap();

        match cli.command {
            Command::Replay(args) => {
                assert_eq!(args.script, PathBuf::from("design.txt"));
                assert_eq!(args.profile.profile, Some(PathBuf::from("mia.yaml")));
                assert!(args.final_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_dir_next() {
        let cli = Cli::try_parse_from(["airbrush", "dir", "next", "T→B"]).unwrap();
        match cli.command {
            Command::Dir(DirCommand {
                action: DirAction::Next { current },
            }) => assert_eq!(current, "T→B"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_history_default_limit() {
        let cli = Cli::try_parse_from(["airbrush", "history"]).unwrap();
        match cli.command {
            Command::History(args) => assert_eq!(args.limit, 10),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_command_fails() {
        assert!(Cli::try_parse_from(["airbrush", "paint"]).is_err());
    }

    #[test]
    fn test_bad_arguments_exit_with_user_error() {
        let err = Cli::try_parse_from(["airbrush", "compose", "--bogus"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::USER_ERROR);

        let err = Cli::try_parse_from(["airbrush", "dir", "next"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::USER_ERROR);

        let err = Cli::try_parse_from(["airbrush"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::USER_ERROR);
    }

    #[test]
    fn test_help_and_version_exit_successfully() {
        let err = Cli::try_parse_from(["airbrush", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::SUCCESS);

        let err = Cli::try_parse_from(["airbrush", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), exit_codes::SUCCESS);
    }
}
