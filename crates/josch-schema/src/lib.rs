//! # josch-schema
//!
//! Everything josch does to a schema without touching a store or a subprocess.
//!
//! - [`translator`]: portable JSON Schema -> native `$jsonSchema` validator
//! - [`dialect`]: which validation path a schema text belongs to
//! - [`local`]: draft-04/06/07 validation in process (jsonschema)
//! - [`diff`]: syntactic comparison of two schemas as flattened key/value sets

pub mod dialect;
pub mod diff;
pub mod error;
pub mod local;
pub mod translator;

pub use dialect::SchemaDialect;
pub use diff::{diff, flatten};
pub use error::SchemaError;
pub use local::LocalSchema;
pub use translator::{
    FORBIDDEN_KEYWORDS, NATIVE_WRAPPER_KEY, to_validator, translate, unsupported_keyword,
};
