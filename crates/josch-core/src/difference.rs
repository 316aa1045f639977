//! Syntactic differences between two schemas.

use serde::{Deserialize, Serialize};

/// Structural discrepancies between two schemas, one list per side.
///
/// Entries are dotted-path fragments such as `.properties.year.type: number`.
/// A path whose value differs on both sides is listed on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaDifference {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl SchemaDifference {
    /// `true` when the schemas are syntactically equal.
    #[must_use]
    pub fn has_none(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    #[must_use]
    pub fn has_left_differences(&self) -> bool {
        !self.left.is_empty()
    }

    #[must_use]
    pub fn has_right_differences(&self) -> bool {
        !self.right.is_empty()
    }

    pub fn add_left(&mut self, difference: String) {
        self.left.push(difference);
    }

    pub fn add_right(&mut self, difference: String) {
        self.right.push(difference);
    }
}
