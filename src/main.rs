//! pakr - pack a directory tree into a legacy pak archive

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use pakr::pack::{pack_dir, ProgressFn};
use std::sync::Arc;

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = cli.output.unwrap_or_else(|| {
        cli.input
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("pack.pak")
    });

    println!("pakr - packing {} into {}", cli.input.display(), output.display());

    let mut progress: Option<ProgressFn> = None;
    let mut pb: Option<ProgressBar> = None;

    if !cli.quiet {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );

        let bar_clone = bar.clone();
        progress = Some(Arc::new(move |current: usize, total: usize, msg: &str| {
            bar_clone.set_length(total as u64);
            bar_clone.set_position(current as u64);
            bar_clone.set_message(msg.to_string());
        }));
        pb = Some(bar);
    }

    let report = pack_dir(&cli.input, &output, progress)?;

    if let Some(bar) = pb {
        bar.finish_with_message("Complete");
    }

    println!();
    println!("Archive complete!");
    println!("  Entries: {}", report.entry_count);
    println!("  Payload: {} bytes", report.payload_bytes);
    println!("  Size: {} bytes", report.archive_size);
    println!("  CRC-32: {:08x}", report.checksum);
    println!();
    println!("{}", report.fileinfo_line());

    Ok(())
}
