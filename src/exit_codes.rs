//! Exit code constants for the airbrush CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad update, replay script error)
//! - 2: Profile or filesystem failure
//! - 3: Clipboard failure (system clipboard and fallback both failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unknown update key or value, script error.
pub const USER_ERROR: i32 = 1;

/// Profile could not be read, parsed, or written; other filesystem errors.
pub const IO_FAILURE: i32 = 2;

/// The prompt could not be copied anywhere.
pub const CLIPBOARD_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, IO_FAILURE, CLIPBOARD_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
    }
}
