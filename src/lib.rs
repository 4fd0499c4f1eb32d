//! pakr - packer for the legacy NDOORS-style pak archive format
//!
//! A pak archive is a flat container: every file's raw bytes are
//! concatenated up front, followed by an entry table describing each
//! packed file or directory, followed by a fixed 9-byte trailer that
//! points back at the table. A running CRC-32 over the whole output
//! is reported alongside the finished archive.

pub mod core;
pub mod formats;
pub mod pack;

// Re-exports
pub use crate::core::error::{PakError, PakResult};
pub use crate::formats::pak::{CompressionMethod, PakBuilder, PakEntry, PakStats, PakWriter};
pub use crate::pack::{pack_dir, PackReport, ProgressFn};
