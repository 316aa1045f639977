//! # josch-containment
//!
//! Answers "which documents does schema A accept compared to schema B?"
//!
//! The semantic answer comes from an external tool speaking a file protocol:
//! the two schemas are written to `s1.json` (current) and `s2.json` (legacy),
//! the tool is run with those two paths plus `result.json`, and it leaves
//! `{"result": "<relation>"}` behind. The three files are one global slot, so
//! [`ContainmentChecker::contains`] holds a process-wide lock plus a lock
//! file in the workspace (shared with other processes) for the whole
//! exchange.
//!
//! [`ContainmentChecker::equals`] is the syntactic answer and never leaves
//! the process.

pub mod checker;
pub mod error;
pub mod tool;
pub mod workspace_lock;

pub use checker::ContainmentChecker;
pub use error::ContainmentError;
pub use tool::ToolCommand;
