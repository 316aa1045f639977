//! # josch-validation
//!
//! Validates documents against schemas, one at a time or a whole collection.
//!
//! The path is chosen by the shape of the schema text:
//! - native `$jsonSchema` validators are enforced by the store, through a
//!   disposable scratch collection ([`ScratchCollection`]);
//! - draft-04/06/07 schemas are validated in process;
//! - anything else is refused with a fixed "not supported" message.
//!
//! Collection runs keep a bounded list of invalid documents. The bound is a
//! byte quota ([`MemoryQuota`]) rather than heap introspection; once it is
//! exhausted samples stop being kept but are still counted.

pub mod error;
pub mod quota;
pub mod report;
pub mod scratch;
pub mod validator;

pub use error::ValidationError;
pub use quota::{CaptureGuard, MemoryQuota};
pub use report::{ALL_VALID, DOCUMENT_VALID, percentage, summary};
pub use scratch::ScratchCollection;
pub use validator::{Validator, Verdict};
