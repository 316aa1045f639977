//! Cross-cutting error types for josch.
//!
//! Domain-specific errors (`StoreError`, `SchemaError`, `ContainmentError`)
//! live in their respective crates. The CLI converges them on `anyhow`.

use thiserror::Error;

/// Errors that can be raised while resolving shared domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A containment tool name that is not registered.
    #[error("Containment tool does not exist: {0}")]
    UnknownTool(String),
}
