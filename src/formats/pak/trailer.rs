use crate::formats::pak::constants::{FORMAT_VERSION, TRAILER_SIZE};

/// Fixed-size footer, written once after the entry table. Write-only
/// from the encoder's perspective; nothing here reads it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PakTrailer {
    /// Where the entry table begins = total payload bytes written
    pub table_offset: u32,
    pub entry_count: u32,
}

impl PakTrailer {
    pub fn encode(&self) -> [u8; TRAILER_SIZE] {
        let mut buf = [0u8; TRAILER_SIZE];
        buf[0..4].copy_from_slice(&self.table_offset.to_le_bytes());
        buf[4..8].copy_from_slice(&self.entry_count.to_le_bytes());
        buf[8] = FORMAT_VERSION;
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_layout() {
        let trailer = PakTrailer {
            table_offset: 0x0102_0304,
            entry_count: 5,
        };
        let bytes = trailer.encode();
        assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01, 5, 0, 0, 0, 0x12]);
    }
}
