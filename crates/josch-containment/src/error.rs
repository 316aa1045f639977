use std::path::PathBuf;

use josch_core::ContainmentToolKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainmentError {
    #[error("Failed to write the file {}: {source}", .path.display())]
    Store {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The tool reported failure or could not be run.
    #[error("{tool}: {message}")]
    ToolFailed {
        tool: ContainmentToolKind,
        message: String,
    },

    /// The tool's output ended without a completion line.
    #[error("An error occurred in the tool {tool} while comparing these schemas.")]
    ToolIncomplete { tool: ContainmentToolKind },

    /// Another process kept the workspace past the lock timeout.
    #[error("The containment workspace is in use; lock file {}", .path.display())]
    WorkspaceLocked { path: PathBuf, holder: Option<i32> },

    #[error("Failed to read the result {}: {reason}", .path.display())]
    ReadResult { path: PathBuf, reason: String },
}
