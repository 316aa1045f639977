//! # josch-shell
//!
//! Runs an external command in a working directory and decides, from its
//! standard output, whether it completed.
//!
//! External tools announce completion differently, so reading the output is
//! delegated to a [`CompletionDetector`] chosen per tool:
//! - [`UntilDone`] reads lines until one contains `Done` or equals `Success.`
//! - [`SingleLine`] reads exactly one line and takes it as the verdict
//!
//! The runner never retries and never propagates I/O errors; everything is
//! folded into a [`Completion`].

pub mod completion;
pub mod detector;
pub mod error;
pub mod runner;

pub use completion::Completion;
pub use detector::{CompletionDetector, SingleLine, UntilDone};
pub use error::ShellError;
pub use runner::{ShellInvocation, ShellRunner};
