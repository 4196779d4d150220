//! Error types for the airbrush CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The prompt composer itself never fails; these errors come from the layers
//! around it (argument parsing, profiles, clipboard, history).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for airbrush operations.
#[derive(Error, Debug)]
pub enum AirbrushError {
    /// User provided invalid arguments or an unknown update.
    #[error("{0}")]
    UserError(String),

    /// A profile could not be read, parsed, validated, or written.
    #[error("Profile error: {0}")]
    ProfileError(String),

    /// A filesystem operation failed.
    #[error("I/O failed: {0}")]
    IoError(String),

    /// Neither the system clipboard nor the fallback accepted the text.
    #[error("Copy failed: {0}")]
    ClipboardError(String),

    /// A replay script line could not be applied.
    #[error("script line {line}: {message}")]
    ScriptError { line: usize, message: String },
}

impl AirbrushError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AirbrushError::UserError(_) => exit_codes::USER_ERROR,
            AirbrushError::ScriptError { .. } => exit_codes::USER_ERROR,
            AirbrushError::ProfileError(_) => exit_codes::IO_FAILURE,
            AirbrushError::IoError(_) => exit_codes::IO_FAILURE,
            AirbrushError::ClipboardError(_) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for airbrush operations.
pub type Result<T> = std::result::Result<T, AirbrushError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = AirbrushError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn script_error_is_a_user_error() {
        let err = AirbrushError::ScriptError {
            line: 3,
            message: "unknown key 'colour'".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn profile_and_io_errors_share_exit_code() {
        let err = AirbrushError::ProfileError("missing".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);

        let err = AirbrushError::IoError("denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn clipboard_error_has_correct_exit_code() {
        let err = AirbrushError::ClipboardError("no display".to_string());
        assert_eq!(err.exit_code(), exit_codes::CLIPBOARD_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = AirbrushError::ScriptError {
            line: 7,
            message: "unknown key 'colour'".to_string(),
        };
        assert_eq!(err.to_string(), "script line 7: unknown key 'colour'");

        let err = AirbrushError::ClipboardError("no display".to_string());
        assert_eq!(err.to_string(), "Copy failed: no display");
    }
}
