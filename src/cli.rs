//! Command-line interface for pakr

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pakr")]
#[command(about = "Pack a directory tree into a legacy pak archive", long_about = None)]
pub struct Cli {
    /// Input directory to pack
    pub input: PathBuf,

    /// Output archive path (defaults to pack.pak next to the input)
    pub output: Option<PathBuf>,

    /// Suppress the per-entry progress bar
    #[arg(short, long)]
    pub quiet: bool,
}
