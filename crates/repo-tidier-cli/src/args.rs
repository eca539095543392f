//! Command-line arguments.
use clap::{Args, Parser, Subcommand, ValueEnum};
use repo_tidier_core::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "repo-tidier",
    version,
    about = "Repo tidier - organize and clean up repositories",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a summary of the repository
    Summary(SummaryArgs),
    /// Show unique file extensions and their counts
    Types(TypesArgs),
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Path to the directory to scan
    pub path: PathBuf,

    /// Additional names to exclude (e.g. dist, build)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show only files, exclude directories
    #[arg(long)]
    pub files_only: bool,

    /// Filter by file extension (e.g. .py); repeat for several
    #[arg(long = "extensions", alias = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Sort by size or name
    #[arg(long, value_enum, default_value_t = SortArg::Size)]
    pub sort_by: SortArg,

    /// Sort in reverse order, largest first for size (default)
    #[arg(long, overrides_with = "no_reverse")]
    reverse: bool,

    /// Sort smallest first, or A to Z for names
    #[arg(long, overrides_with = "reverse")]
    no_reverse: bool,

    /// Limit number of results shown
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

impl SummaryArgs {
    /// Descending order unless `--no-reverse` was the last of the pair given.
    pub fn reverse(&self) -> bool {
        !self.no_reverse
    }
}

#[derive(Args, Debug)]
pub struct TypesArgs {
    /// Path to the directory to scan
    pub path: PathBuf,

    /// Additional names to exclude (e.g. dist, build)
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Show only the top N file types
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Show only the count of unique file types
    #[arg(long = "summary")]
    pub summary_only: bool,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Size,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Size => SortKey::Size,
            SortArg::Name => SortKey::Name,
        }
    }
}
