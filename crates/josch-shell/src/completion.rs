//! What a completion detector concluded about a run.

use josch_core::{SUCCESS, error_message};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The tool printed the success token.
    Success,
    /// The tool printed a closing line other than the success token
    /// (e.g. a package manager's `Done in 1.2s.`).
    Finished(String),
    /// The process could not be run or its output could not be read,
    /// or the tool reported failure on its verdict line.
    Failed(String),
    /// Output ended before any completion line appeared.
    Unterminated,
}

impl Completion {
    /// Whether the tool ran to its end, successfully or not.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Success | Self::Finished(_))
    }

    /// Boundary status string.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Success => SUCCESS.to_string(),
            Self::Finished(line) => line.clone(),
            Self::Failed(reason) => error_message(reason),
            Self::Unterminated => error_message("tool output ended before completion"),
        }
    }
}
