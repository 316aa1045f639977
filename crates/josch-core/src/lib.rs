//! # josch-core
//!
//! Core types and error conventions shared by every josch crate.
//!
//! This crate provides:
//! - `ContainmentRelation` and `ContainmentToolKind` for semantic schema comparison
//! - `SchemaDifference` for the syntactic (structural) comparison
//! - `ValidationOutcome` for collection-wide validation runs
//! - The boundary message convention (`ERROR_PREFIX`, `SUCCESS`, `BoundaryMessage`)
//!   used by callers that detect failure by prefix-matching strings

pub mod boundary;
pub mod difference;
pub mod errors;
pub mod outcome;
pub mod relation;
pub mod tools;

pub use boundary::{BoundaryMessage, ERROR_PREFIX, SUCCESS, error_message, is_error};
pub use difference::SchemaDifference;
pub use errors::CoreError;
pub use outcome::ValidationOutcome;
pub use relation::ContainmentRelation;
pub use tools::ContainmentToolKind;

/// Top-level key wrapping a store-native validator document.
pub const NATIVE_WRAPPER_KEY: &str = "$jsonSchema";
