use clap::{Args, Subcommand};

/// Top-level command tree.
///
/// Schema and document arguments are file paths; `-` reads standard input.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Draw documents from the collection in random order.
    Sample(SampleArgs),
    /// Translate a JSON Schema into a native `$jsonSchema` validator.
    Translate(TranslateArgs),
    /// Validate one document against a schema or validator.
    Validate(ValidateArgs),
    /// Validate every document of the collection.
    ValidateAll(ValidateAllArgs),
    /// Ask the configured containment tool how two schemas relate.
    Contains(CompareArgs),
    /// Structural (syntactic) difference between two schemas.
    Diff(CompareArgs),
    /// Number of documents in the collection.
    Count,
}

#[derive(Clone, Debug, Args)]
pub struct SampleArgs {
    /// Number of documents to print
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,

    /// Keep insertion order instead of shuffling
    #[arg(long)]
    pub ordered: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TranslateArgs {
    /// JSON Schema file
    pub schema: String,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Document file
    pub document: String,
    /// Schema or validator file
    pub schema: String,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateAllArgs {
    /// Schema or validator file
    pub schema: String,
}

#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    /// Current schema file (left side)
    pub current: String,
    /// Legacy schema file (right side)
    pub legacy: String,
}
