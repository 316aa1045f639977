//! String conventions at the boundary to the orchestration layer.
//!
//! Callers detect failure by prefix-matching on [`ERROR_PREFIX`]. Inside the
//! workspace everything is a typed `Result`; it is only flattened into these
//! strings when handed back to a caller.

use std::fmt::Display;

/// Leads every user-visible failure message.
pub const ERROR_PREFIX: &str = "Error! ";

/// Status message for a successful side effect (file stored, tool finished).
pub const SUCCESS: &str = "Success.";

/// Render an error into the prefixed boundary form.
#[must_use]
pub fn error_message(error: impl Display) -> String {
    format!("{ERROR_PREFIX}{error}")
}

/// Whether a boundary message signals failure.
#[must_use]
pub fn is_error(message: &str) -> bool {
    message.starts_with(ERROR_PREFIX)
}

/// Flatten a typed result into a boundary message.
pub trait BoundaryMessage {
    fn into_message(self) -> String;
}

impl<E: Display> BoundaryMessage for Result<String, E> {
    fn into_message(self) -> String {
        self.unwrap_or_else(error_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_prefixed() {
        let result: Result<String, &str> = Err("Failed to write the file.");
        let message = result.into_message();
        assert_eq!(message, "Error! Failed to write the file.");
        assert!(is_error(&message));
    }

    #[test]
    fn success_passes_through() {
        let result: Result<String, &str> = Ok(SUCCESS.to_string());
        let message = result.into_message();
        assert_eq!(message, "Success.");
        assert!(!is_error(&message));
    }
}
