use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `josch` binary.
#[derive(Debug, Parser)]
#[command(name = "josch", version, about = "josch - schema sampling, validation and containment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Collection to work on (defaults to `store.collection` from config)
    #[arg(short, long, global = true)]
    pub collection: Option<String>,

    /// Directory of `<collection>.jsonl` files (defaults to `store.data_dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            collection: self.collection.clone(),
            data_dir: self.data_dir.clone(),
        }
    }
}
