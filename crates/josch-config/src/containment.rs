//! Containment tool configuration.

use std::path::{Path, PathBuf};

use josch_core::ContainmentToolKind;
use serde::{Deserialize, Serialize};

/// File names inside the containment workspace. Fixed by the tool protocol.
pub const CURRENT_SCHEMA_FILE: &str = "s1.json";
pub const LEGACY_SCHEMA_FILE: &str = "s2.json";
pub const RESULT_FILE: &str = "result.json";
/// Held by whichever process is using the files above.
pub const LOCK_FILE: &str = "containment.lock";

fn josch_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("josch")
}

fn default_workspace_dir() -> PathBuf {
    josch_home().join("containment")
}

fn default_jss_path() -> PathBuf {
    josch_home().join("tools").join("JsonSubSchema")
}

fn default_ijs_path() -> PathBuf {
    josch_home().join("tools").join("IsJsonSchemaSubset")
}

const fn default_install_before_run() -> bool {
    true
}

const fn default_lock_timeout_secs() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContainmentConfig {
    /// Which external tool answers containment questions.
    #[serde(default)]
    pub tool: ContainmentToolKind,

    /// Directory holding the well-known `s1.json`, `s2.json` and `result.json`.
    #[serde(default = "default_workspace_dir")]
    pub workspace_dir: PathBuf,

    /// Installation directory of JsonSubSchema (contains `i_jss.py`).
    #[serde(default = "default_jss_path")]
    pub jss_path: PathBuf,

    /// Installation directory of is-json-schema-subset (contains `package.json`).
    #[serde(default = "default_ijs_path")]
    pub ijs_path: PathBuf,

    /// Run the tool's dependency install command before each check.
    #[serde(default = "default_install_before_run")]
    pub install_before_run: bool,

    /// Replaces the tool entrypoint. The three protocol paths are still appended,
    /// and the dependency install is skipped.
    #[serde(default)]
    pub command: Option<Vec<String>>,

    /// How long to wait for another process to release the workspace.
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
}

impl ContainmentConfig {
    #[must_use]
    pub fn current_schema_path(&self) -> PathBuf {
        self.workspace_dir.join(CURRENT_SCHEMA_FILE)
    }

    #[must_use]
    pub fn legacy_schema_path(&self) -> PathBuf {
        self.workspace_dir.join(LEGACY_SCHEMA_FILE)
    }

    #[must_use]
    pub fn result_path(&self) -> PathBuf {
        self.workspace_dir.join(RESULT_FILE)
    }

    #[must_use]
    pub fn lock_path(&self) -> PathBuf {
        self.workspace_dir.join(LOCK_FILE)
    }

    /// Installation directory of the selected tool.
    #[must_use]
    pub fn tool_dir(&self) -> &Path {
        match self.tool {
            ContainmentToolKind::JsonSubSchema => &self.jss_path,
            ContainmentToolKind::IsJsonSchemaSubset => &self.ijs_path,
        }
    }
}

impl Default for ContainmentConfig {
    fn default() -> Self {
        Self {
            tool: ContainmentToolKind::default(),
            workspace_dir: default_workspace_dir(),
            jss_path: default_jss_path(),
            ijs_path: default_ijs_path(),
            install_before_run: default_install_before_run(),
            command: None,
            lock_timeout_secs: default_lock_timeout_secs(),
        }
    }
}
