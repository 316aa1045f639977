//! Dialect detection by the shape of the schema text.
//!
//! Detection is textual, not structural: a native validator is anything that
//! mentions the wrapper key, a portable schema is anything that mentions
//! `$schema` together with one of the three supported draft URIs.

use jsonschema::Draft;

use crate::translator::NATIVE_WRAPPER_KEY;

const DRAFT_04: &str = "json-schema.org/draft-04/schema";
const DRAFT_06: &str = "json-schema.org/draft-06/schema";
const DRAFT_07: &str = "json-schema.org/draft-07/schema";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaDialect {
    /// `{"$jsonSchema": {...}}`, validated by the store.
    Native,
    Draft04,
    Draft06,
    Draft07,
    Unsupported,
}

impl SchemaDialect {
    #[must_use]
    pub fn detect(schema: &str) -> Self {
        if schema.contains(NATIVE_WRAPPER_KEY) {
            return Self::Native;
        }
        if !schema.contains("$schema") {
            return Self::Unsupported;
        }
        if schema.contains(DRAFT_04) {
            Self::Draft04
        } else if schema.contains(DRAFT_06) {
            Self::Draft06
        } else if schema.contains(DRAFT_07) {
            Self::Draft07
        } else {
            Self::Unsupported
        }
    }

    /// The jsonschema draft for locally validated dialects.
    #[must_use]
    pub const fn draft(self) -> Option<Draft> {
        match self {
            Self::Draft04 => Some(Draft::Draft4),
            Self::Draft06 => Some(Draft::Draft6),
            Self::Draft07 => Some(Draft::Draft7),
            Self::Native | Self::Unsupported => None,
        }
    }

    #[must_use]
    pub const fn is_portable(self) -> bool {
        self.draft().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"$jsonSchema": {"type": "object"}}"#, SchemaDialect::Native)]
    #[case(r#"{"$schema": "http://json-schema.org/draft-04/schema#"}"#, SchemaDialect::Draft04)]
    #[case(r#"{"$schema": "http://json-schema.org/draft-06/schema#"}"#, SchemaDialect::Draft06)]
    #[case(r#"{"$schema": "http://json-schema.org/draft-07/schema#"}"#, SchemaDialect::Draft07)]
    #[case(
        r#"{"$schema": "https://json-schema.org/draft/2020-12/schema"}"#,
        SchemaDialect::Unsupported
    )]
    #[case(r#"{"properties": {"year": {"type": "number"}}}"#, SchemaDialect::Unsupported)]
    fn detects_by_text(#[case] schema: &str, #[case] expected: SchemaDialect) {
        assert_eq!(SchemaDialect::detect(schema), expected);
    }

    #[test]
    fn draft_uri_without_schema_keyword_is_unsupported() {
        let schema = r#"{"description": "see json-schema.org/draft-07/schema"}"#;
        assert_eq!(SchemaDialect::detect(schema), SchemaDialect::Unsupported);
    }
}
