use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sqlpretty")]
#[command(about = "sqlpretty is a multi-dialect SQL pretty-printer", long_about = None, version = env!("CARGO_PKG_VERSION"))]
pub(crate) struct Cli {
    /// Files to format. Use `-` or no files to read from stdin.
    pub(crate) paths: Vec<PathBuf>,
    /// Path to a JSON configuration file.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    /// Override the dialect (e.g. postgresql, mysql, tsql).
    #[arg(long)]
    pub(crate) dialect: Option<String>,
    /// Rewrite the files in place instead of printing to stdout.
    #[arg(short, long)]
    pub(crate) write: bool,
    /// Exit non-zero if any input is not already formatted.
    #[arg(long, conflicts_with = "write")]
    pub(crate) check: bool,
}
