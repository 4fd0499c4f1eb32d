use crate::core::error::{PakError, PakResult};
use crate::formats::pak::constants::{ENTRY_FIXED_SIZE, MAX_PATH_BYTES, METHOD_XOR_MASK};
use crate::formats::pak::text::encode_path;

/// Compression method codes the format defines.
///
/// `Reserved` (1) is part of the format but never emitted by this
/// encoder: no compression scheme is implemented, files are always
/// stored raw and directories use the sentinel.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    None = 0,
    Reserved = 1,
    Directory = 2,
}

impl CompressionMethod {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<CompressionMethod> {
        match value {
            0 => Some(CompressionMethod::None),
            1 => Some(CompressionMethod::Reserved),
            2 => Some(CompressionMethod::Directory),
            _ => None,
        }
    }
}

/// Flip the obfuscation mask on a method byte. Applied once when
/// writing, applied again by readers to recover the logical value.
pub(crate) fn obfuscate_method(method: u8) -> u8 {
    method ^ METHOD_XOR_MASK
}

/// One packed filesystem object and its layout metadata.
#[derive(Debug, Clone)]
pub struct PakEntry {
    /// Relative, slash-separated path within the archive
    pub path: String,
    pub method: CompressionMethod,
    /// Byte offset of the payload within the payload region (0 for directories)
    pub payload_offset: u32,
    /// Bytes occupied in the payload region
    pub stored_size: u32,
    /// Uncompressed size; equal to `stored_size` since nothing is compressed
    pub raw_size: u32,
}

impl PakEntry {
    pub fn directory(path: impl Into<String>, payload_offset: u32) -> PakEntry {
        PakEntry {
            path: path.into(),
            method: CompressionMethod::Directory,
            payload_offset,
            stored_size: 0,
            raw_size: 0,
        }
    }

    pub fn file(path: impl Into<String>, payload_offset: u32, size: u32) -> PakEntry {
        PakEntry {
            path: path.into(),
            method: CompressionMethod::None,
            payload_offset,
            stored_size: size,
            raw_size: size,
        }
    }

    /// Serialize the entry-table record: fixed 11-byte header, the
    /// transcoded path, and a NUL terminator that is not counted in
    /// the stored path length.
    pub fn encode(&self) -> PakResult<Vec<u8>> {
        let path_bytes = encode_path(&self.path)?;
        if path_bytes.len() > MAX_PATH_BYTES {
            return Err(PakError::PathTooLong {
                path: self.path.clone(),
                len: path_bytes.len(),
            });
        }

        let mut buf = Vec::with_capacity(ENTRY_FIXED_SIZE + path_bytes.len() + 1);
        buf.push(path_bytes.len() as u8);
        buf.push(obfuscate_method(self.method.as_u8()));
        buf.extend_from_slice(&self.payload_offset.to_le_bytes());
        buf.extend_from_slice(&self.stored_size.to_le_bytes());
        buf.extend_from_slice(&self.raw_size.to_le_bytes());
        buf.extend_from_slice(&path_bytes);
        buf.push(0x00);
        Ok(buf)
    }
}
