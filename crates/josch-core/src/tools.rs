//! Registry of the external containment tools.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// External containment tools josch knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContainmentToolKind {
    /// JsonSubSchema, a Python tool run through pipenv.
    #[default]
    #[serde(rename = "jsonsubschema")]
    JsonSubSchema,
    /// is-json-schema-subset, a Node tool run through yarn.
    #[serde(rename = "is-json-schema-subset")]
    IsJsonSchemaSubset,
}

impl ContainmentToolKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonSubSchema => "jsonsubschema",
            Self::IsJsonSchemaSubset => "is-json-schema-subset",
        }
    }
}

impl fmt::Display for ContainmentToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainmentToolKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonsubschema" => Ok(Self::JsonSubSchema),
            "is-json-schema-subset" => Ok(Self::IsJsonSchemaSubset),
            other => Err(CoreError::UnknownTool(other.to_string())),
        }
    }
}
