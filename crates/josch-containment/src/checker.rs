//! The containment exchange with an external tool.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use josch_config::ContainmentConfig;
use josch_core::{BoundaryMessage, ContainmentRelation, SchemaDifference};
use josch_schema::SchemaError;
use josch_shell::{Completion, ShellRunner};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ContainmentError;
use crate::tool::ToolCommand;
use crate::workspace_lock;

/// Guards the well-known schema and result files within this process. The
/// workspace lock file does the same across processes.
static SLOT: Mutex<()> = Mutex::new(());

#[derive(Deserialize)]
struct ResultFile {
    result: String,
}

pub struct ContainmentChecker {
    config: ContainmentConfig,
    runner: ShellRunner,
}

impl ContainmentChecker {
    #[must_use]
    pub const fn new(config: ContainmentConfig) -> Self {
        Self {
            config,
            runner: ShellRunner::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ContainmentConfig {
        &self.config
    }

    /// Relation between the document sets accepted by `current` and `legacy`,
    /// as reported by the configured tool.
    ///
    /// Blocks for the whole exchange and serializes with every other
    /// exchange using the same workspace, in this process or another.
    ///
    /// # Errors
    ///
    /// Returns `ContainmentError` if the workspace stays locked past the
    /// configured timeout, a schema file cannot be written, the tool fails or
    /// never completes, or the result file cannot be read.
    pub fn contains(
        &self,
        current: &str,
        legacy: &str,
    ) -> Result<ContainmentRelation, ContainmentError> {
        let _slot = SLOT.lock().unwrap_or_else(PoisonError::into_inner);
        let _workspace = workspace_lock::acquire(
            &self.config.lock_path(),
            Duration::from_secs(self.config.lock_timeout_secs),
        )?;
        let tool = ToolCommand::resolve(&self.config);

        store_file(&self.config.current_schema_path(), current)?;
        store_file(&self.config.legacy_schema_path(), legacy)?;
        clear_result(&self.config.result_path())?;
        debug!(tool = %tool.kind, "schemas stored");

        if let Some(install) = &tool.install {
            match self.runner.run_to_exit(install) {
                Ok(true) => debug!(tool = %tool.kind, "tool dependencies installed"),
                Ok(false) => {
                    warn!(tool = %tool.kind, "tool dependency install exited unsuccessfully");
                }
                Err(error) => warn!(tool = %tool.kind, %error, "tool dependency install failed"),
            }
        }

        match self.runner.run(&tool.run, tool.detector) {
            Completion::Success | Completion::Finished(_) => {}
            Completion::Failed(message) => {
                return Err(ContainmentError::ToolFailed {
                    tool: tool.kind,
                    message,
                });
            }
            Completion::Unterminated => {
                return Err(ContainmentError::ToolIncomplete { tool: tool.kind });
            }
        }

        let value = read_result(&self.config.result_path())?;
        let (relation, fell_back) = ContainmentRelation::parse_or_not_equal(&value);
        if fell_back {
            warn!(tool = %tool.kind, %value, "unknown containment result, treating as not equal");
        }
        Ok(relation)
    }

    /// [`Self::contains`] rendered for the orchestration layer: the relation
    /// name, or an error-prefixed message.
    #[must_use]
    pub fn contains_message(&self, current: &str, legacy: &str) -> String {
        self.contains(current, legacy)
            .map(|relation| relation.to_string())
            .into_message()
    }

    /// Syntactic comparison. Does not involve the external tool.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MalformedInput` if either schema is not a JSON object.
    pub fn equals(&self, schema: &str, other: &str) -> Result<SchemaDifference, SchemaError> {
        josch_schema::diff(schema, other)
    }
}

fn store_file(path: &Path, content: &str) -> Result<(), ContainmentError> {
    let write = || -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)
    };
    write().map_err(|source| ContainmentError::Store {
        path: path.to_path_buf(),
        source,
    })
}

/// A result left over from an earlier exchange must not be mistaken for this one's.
fn clear_result(path: &Path) -> Result<(), ContainmentError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ContainmentError::Store {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn read_result(path: &Path) -> Result<String, ContainmentError> {
    let read_error = |reason: String| ContainmentError::ReadResult {
        path: path.to_path_buf(),
        reason,
    };
    let text = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;
    let file: ResultFile = serde_json::from_str(&text).map_err(|e| read_error(e.to_string()))?;
    Ok(file.result)
}
