use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to start '{program}' in {}: {source}", .working_dir.display())]
    Spawn {
        program: String,
        working_dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read tool output: {0}")]
    Read(#[from] std::io::Error),

    #[error("process has no output stream")]
    NoStdout,
}
