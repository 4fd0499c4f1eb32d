//! High-level packing operation: walk a directory tree and build the
//! archive, reporting progress and a final summary.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::{debug, warn};
use walkdir::WalkDir;

use crate::formats::pak::PakBuilder;

/// Progress callback: (entries done, entries total, current path).
pub type ProgressFn = Arc<dyn Fn(usize, usize, &str) + Send + Sync>;

/// Summary of a finished archive, for the legacy fileinfo report.
#[derive(Debug, Clone)]
pub struct PackReport {
    pub archive: PathBuf,
    pub archive_size: u64,
    pub checksum: u32,
    pub modified: DateTime<Local>,
    pub entry_count: u32,
    pub payload_bytes: u32,
}

impl PackReport {
    /// Legacy manifest line the original packer printed on success.
    /// The companion-package fields (`pname`, `psize`) are
    /// placeholders; size and CRC wrap to signed 32-bit as the old
    /// consumers expect.
    pub fn fileinfo_line(&self) -> String {
        format!(
            r#"<fileinfo fname="{}" fdir="" fsize="{}" fcrc="{}" fdate="{}" ftime="{}" pname="void.zip" psize="0" />"#,
            self.archive.display(),
            self.archive_size as i32,
            self.checksum as i32,
            self.modified.format("%Y-%m-%-d"),
            self.modified.format("%H-%M-%S"),
        )
    }
}

/// Pack the contents of `root` into a pak archive at `output`.
///
/// Enumeration is a sorted lexical walk; the root itself is never
/// recorded. All paths are stored relative to `root` with forward
/// slashes. Any I/O, transcoding or size failure aborts the run and
/// may leave a truncated archive behind.
pub fn pack_dir(root: &Path, output: &Path, progress: Option<ProgressFn>) -> Result<PackReport> {
    let entries = enumerate(root)?;
    let total = entries.len();

    let file = File::create(output)
        .with_context(|| format!("Failed to create archive {}", output.display()))?;
    let mut builder = PakBuilder::new(BufWriter::new(file));

    for (done, (rel_path, is_dir)) in entries.iter().enumerate() {
        if let Some(cb) = &progress {
            cb(done, total, rel_path);
        }

        let source = root.join(rel_path);
        if *is_dir {
            debug!("packing directory '{rel_path}'");
            builder.add_directory(rel_path)?;
        } else {
            let reader = File::open(&source)
                .with_context(|| format!("Failed to open {}", source.display()))?;
            let copied = builder.add_file(rel_path, reader)?;
            debug!("packing file '{rel_path}' ({copied} bytes)");
        }
    }

    let (writer, stats) = builder
        .finish()
        .with_context(|| format!("Failed to finalize {}", output.display()))?;
    let file = writer
        .into_inner()
        .with_context(|| format!("Failed to flush {}", output.display()))?;
    drop(file);

    if let Some(cb) = &progress {
        cb(total, total, "done");
    }

    let meta = std::fs::metadata(output)
        .with_context(|| format!("Failed to stat {}", output.display()))?;
    let modified = meta.modified().unwrap_or_else(|e| {
        warn!("no modification time for {}: {e}", output.display());
        SystemTime::now()
    });

    Ok(PackReport {
        archive: output.to_path_buf(),
        archive_size: meta.len(),
        checksum: stats.checksum,
        modified: modified.into(),
        entry_count: stats.entry_count,
        payload_bytes: stats.table_offset,
    })
}

/// Sorted lexical walk of `root`, yielding slash-normalized relative
/// paths tagged file-or-directory. The root itself is skipped.
fn enumerate(root: &Path) -> Result<Vec<(String, bool)>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        if entry.path() == root {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .with_context(|| format!("Path escapes {}: {}", root.display(), entry.path().display()))?;
        let rel_path = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        if rel_path.is_empty() {
            continue;
        }
        entries.push((rel_path, entry.file_type().is_dir()));
    }
    Ok(entries)
}
