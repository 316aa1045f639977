//! Containment relations between the document sets two schemas accept.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation reported by an external containment tool.
///
/// The string forms must match what the tools write into their result file
/// byte for byte (note the space in `not equal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainmentRelation {
    #[serde(rename = "equivalent")]
    Equivalent,
    #[serde(rename = "incomparable")]
    Incomparable,
    #[serde(rename = "equal")]
    Equal,
    #[serde(rename = "not equal")]
    NotEqual,
    #[serde(rename = "subset")]
    Subset,
    #[serde(rename = "superset")]
    Superset,
}

impl ContainmentRelation {
    pub const ALL: [Self; 6] = [
        Self::Equivalent,
        Self::Incomparable,
        Self::Equal,
        Self::NotEqual,
        Self::Subset,
        Self::Superset,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equivalent => "equivalent",
            Self::Incomparable => "incomparable",
            Self::Equal => "equal",
            Self::NotEqual => "not equal",
            Self::Subset => "subset",
            Self::Superset => "superset",
        }
    }

    /// Exact lookup by the tool's string form.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|relation| relation.as_str() == value)
    }

    /// Lookup that never fails: unrecognised values map to [`Self::NotEqual`].
    ///
    /// Returns the relation and whether the fallback was taken so the caller
    /// can log it.
    #[must_use]
    pub fn parse_or_not_equal(value: &str) -> (Self, bool) {
        Self::parse(value).map_or((Self::NotEqual, true), |relation| (relation, false))
    }
}

impl fmt::Display for ContainmentRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
