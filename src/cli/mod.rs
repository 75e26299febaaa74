mod builtins;
mod source;
pub use source::TableSource;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::cli::builtins::impl_builtin_table;

/// Identify files by their leading bytes.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Build a small sample trie, then print its keys and depth.
    Demo,
    /// Identify the type of each input from its leading bytes.
    Identify(OptsIdentify),
    /// List every signature in the table.
    Keys(OptsKeys),
}

#[derive(Debug, Args)]
pub struct OptsSignatures {
    /// Signature table: the name of a builtin table or a path to a TSV file.
    ///
    /// Each row of the file holds the signature in hex, the name, the mime type and the extension.
    #[arg(short, long, default_value = "common")]
    pub signatures: TableSource<BuiltinsSignatures>,
}

#[derive(Debug, Args)]
pub struct OptsIdentify {
    #[command(flatten)]
    pub table: OptsSignatures,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
    /// Files to identify. Use `-` to read from stdin.
    #[arg(value_parser, required = true)]
    pub files: Vec<clio::Input>,
}

#[derive(Debug, Args)]
pub struct OptsKeys {
    #[command(flatten)]
    pub table: OptsSignatures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per input.
    Human,
    /// One JSON object per line.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum BuiltinsSignatures {
    /// Common image, archive, executable and audio formats.
    Common,
}

impl_builtin_table!(
    BuiltinsSignatures,
    Common => "data/signatures.tsv"
);
