//! Legacy pak archive format
//!
//! On-disk layout (all integers little-endian):
//! - payload bytes of every file, back to back
//! - entry table, one record per packed object:
//!   - [u8 path_len] (transcoded byte length, terminator excluded)
//!   - [u8 method ^ 0x80]
//!   - [u32 payload_offset]
//!   - [u32 stored_size]
//!   - [u32 raw_size]
//!   - [path bytes, EUC-KR][0x00]
//! - trailer:
//!   - [u32 table_offset] (= total payload bytes)
//!   - [u32 entry_count]
//!   - [u8 version = 0x12]

mod constants;
mod entry;
mod text;
mod trailer;
mod writer;

pub use constants::{ENTRY_FIXED_SIZE, FORMAT_VERSION, MAX_PATH_BYTES, TRAILER_SIZE};
pub use entry::{CompressionMethod, PakEntry};
pub use text::{decode_path, encode_path};
pub use trailer::PakTrailer;
pub use writer::{PakBuilder, PakStats, PakWriter};
