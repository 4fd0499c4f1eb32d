/// Format version byte stored in the trailer.
pub const FORMAT_VERSION: u8 = 0x12;

/// Mask XORed onto the compression method byte in the entry table.
/// A format quirk, not a cipher: readers XOR again to undo it.
pub const METHOD_XOR_MASK: u8 = 0x80;

/// Fixed part of an entry record, before the path bytes.
pub const ENTRY_FIXED_SIZE: usize = 14;

/// Trailer size: table_offset (4) + entry_count (4) + version (1).
pub const TRAILER_SIZE: usize = 9;

/// The path length is stored in a single byte.
pub const MAX_PATH_BYTES: usize = 255;
