use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "utilkit",
    about = "Deep merging, validation and formatting helpers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deep-merge JSON files left to right
    Merge(MergeArgs),
    /// Keep only the listed keys of a JSON object
    Pick(KeysArgs),
    /// Drop the listed keys of a JSON object
    Omit(KeysArgs),
    /// Check a value with one of the validators
    Validate(ValidateArgs),
    /// Format a number for display
    Format(FormatArgs),
    /// Screen files against an upload size limit
    Sizes(SizesArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Replace arrays instead of concatenating them
    #[arg(long)]
    pub no_merge_arrays: bool,
    /// Keep duplicate items when concatenating arrays
    #[arg(long)]
    pub allow_duplicates: bool,
    /// Never let an undefined value override an existing one
    #[arg(long)]
    pub keep_on_undefined: bool,
}

#[derive(Args)]
pub struct KeysArgs {
    pub file: PathBuf,
    #[arg(required = true)]
    pub keys: Vec<String>,
    /// Include requested keys missing from the object (pick only)
    #[arg(long)]
    pub inclusive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ValidateKind {
    Email,
    Url,
    Username,
    Date,
    Hex,
    Phone,
    Password,
}

#[derive(Args)]
pub struct ValidateArgs {
    pub kind: ValidateKind,
    pub value: String,
    /// Phone locale, e.g. en-GB
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatKind {
    /// Bytes as bytes/KB/MB
    Size,
    /// Seconds as [hh:]mm:ss
    Duration,
    /// Large numbers with a K/M/G suffix
    Short,
}

#[derive(Args)]
pub struct FormatArgs {
    pub kind: FormatKind,
    pub value: String,
}

#[derive(Args)]
pub struct SizesArgs {
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
    /// Limit in megabytes; defaults to the configured upload limit
    #[arg(long)]
    pub max_mb: Option<f64>,
}
