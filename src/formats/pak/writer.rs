use std::io::{self, Read, Write};
use std::path::PathBuf;

use crc32fast::Hasher;

use crate::core::error::{PakError, PakResult};
use crate::formats::pak::entry::PakEntry;
use crate::formats::pak::trailer::PakTrailer;

/// Sequential byte sink that keeps a running CRC-32 over everything
/// it has emitted: payloads, entry table and trailer alike.
pub struct PakWriter<W: Write> {
    writer: W,
    crc: Hasher,
}

impl<W: Write> PakWriter<W> {
    pub fn new(writer: W) -> PakWriter<W> {
        PakWriter {
            writer,
            crc: Hasher::new(),
        }
    }

    /// CRC-32 (IEEE, reflected) over all bytes written so far.
    pub fn checksum(&self) -> u32 {
        self.crc.clone().finalize()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for PakWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Digest only what the inner writer accepted, so a short
        // write cannot desync the checksum from the bytes on disk.
        let written = self.writer.write(buf)?;
        self.crc.update(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Final layout facts returned by [`PakBuilder::finish`].
#[derive(Debug, Clone, Copy)]
pub struct PakStats {
    pub table_offset: u32,
    pub entry_count: u32,
    pub checksum: u32,
}

/// Packing driver: streams payloads in the order they are added,
/// records their layout metadata, and on `finish` appends the entry
/// table and trailer.
pub struct PakBuilder<W: Write> {
    writer: PakWriter<W>,
    entries: Vec<PakEntry>,
    /// Running payload byte total = next entry's payload offset
    offset: u64,
}

impl<W: Write> PakBuilder<W> {
    pub fn new(writer: W) -> PakBuilder<W> {
        PakBuilder {
            writer: PakWriter::new(writer),
            entries: Vec::new(),
            offset: 0,
        }
    }

    /// Record a directory entry. Directories carry no payload and do
    /// not advance the offset counter.
    pub fn add_directory(&mut self, path: &str) -> PakResult<()> {
        let payload_offset = self.payload_offset(path)?;
        self.entries.push(PakEntry::directory(path, payload_offset));
        Ok(())
    }

    /// Stream a file's bytes into the payload region and record its
    /// entry. Returns the number of bytes copied.
    pub fn add_file<R: Read>(&mut self, path: &str, mut source: R) -> PakResult<u64> {
        let payload_offset = self.payload_offset(path)?;
        let copied = io::copy(&mut source, &mut self.writer)?;
        let size = u32::try_from(copied).map_err(|_| PakError::SizeOverflow {
            what: "file size",
            path: PathBuf::from(path),
            size: copied,
        })?;

        self.entries.push(PakEntry::file(path, payload_offset, size));
        self.offset += copied;
        Ok(copied)
    }

    /// Write the entry table in insertion order, then the trailer,
    /// and release the sink.
    pub fn finish(mut self) -> PakResult<(W, PakStats)> {
        let table_offset = self.payload_offset("entry table")?;

        for entry in &self.entries {
            let record = entry.encode()?;
            self.writer.write_all(&record)?;
        }

        let trailer = PakTrailer {
            table_offset,
            entry_count: self.entries.len() as u32,
        };
        self.writer.write_all(&trailer.encode())?;

        let stats = PakStats {
            table_offset,
            entry_count: trailer.entry_count,
            checksum: self.writer.checksum(),
        };
        Ok((self.writer.into_inner(), stats))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn payload_offset(&self, path: &str) -> PakResult<u32> {
        u32::try_from(self.offset).map_err(|_| PakError::SizeOverflow {
            what: "payload region",
            path: PathBuf::from(path),
            size: self.offset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pak::constants::{FORMAT_VERSION, TRAILER_SIZE};
    use crate::formats::pak::entry::CompressionMethod;

    #[test]
    fn test_checksum_tracks_every_write() {
        let mut writer = PakWriter::new(Vec::new());
        assert_eq!(writer.checksum(), 0);

        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world").unwrap();

        assert_eq!(writer.checksum(), crc32fast::hash(b"hello world"));
        assert_eq!(writer.into_inner(), b"hello world");
    }

    #[test]
    fn test_empty_archive_is_trailer_only() {
        let (bytes, stats) = PakBuilder::new(Vec::new()).finish().unwrap();

        assert_eq!(bytes.len(), TRAILER_SIZE);
        assert_eq!(bytes, [0, 0, 0, 0, 0, 0, 0, 0, FORMAT_VERSION]);
        assert_eq!(stats.table_offset, 0);
        assert_eq!(stats.entry_count, 0);
        assert_eq!(stats.checksum, crc32fast::hash(&bytes));
    }

    #[test]
    fn test_layout_scenario() {
        let mut builder = PakBuilder::new(Vec::new());
        builder.add_file("a.txt", &b"xyz"[..]).unwrap();
        builder.add_directory("subdir").unwrap();
        builder.add_file("subdir/b.txt", &b""[..]).unwrap();
        assert_eq!(builder.entry_count(), 3);

        let (bytes, stats) = builder.finish().unwrap();

        assert_eq!(stats.table_offset, 3);
        assert_eq!(stats.entry_count, 3);
        assert_eq!(&bytes[..3], b"xyz");

        // Walk the entry table and check layout metadata
        let mut pos = stats.table_offset as usize;
        let mut seen = Vec::new();
        for _ in 0..stats.entry_count {
            let path_len = bytes[pos] as usize;
            let method = CompressionMethod::from_u8(bytes[pos + 1] ^ 0x80).unwrap();
            let offset = u32::from_le_bytes(bytes[pos + 2..pos + 6].try_into().unwrap());
            let stored = u32::from_le_bytes(bytes[pos + 6..pos + 10].try_into().unwrap());
            let raw = u32::from_le_bytes(bytes[pos + 10..pos + 14].try_into().unwrap());
            let path = std::str::from_utf8(&bytes[pos + 14..pos + 14 + path_len]).unwrap();
            assert_eq!(bytes[pos + 14 + path_len], 0x00, "missing NUL after {path}");
            seen.push((path.to_string(), method, offset, stored, raw));
            pos += 14 + path_len + 1;
        }

        assert_eq!(
            seen,
            vec![
                ("a.txt".into(), CompressionMethod::None, 0, 3, 3),
                ("subdir".into(), CompressionMethod::Directory, 3, 0, 0),
                ("subdir/b.txt".into(), CompressionMethod::None, 3, 0, 0),
            ]
        );

        // Trailer follows the table, checksum covers the whole file
        let trailer = &bytes[pos..];
        assert_eq!(trailer.len(), TRAILER_SIZE);
        assert_eq!(&trailer[0..4], &3u32.to_le_bytes());
        assert_eq!(&trailer[4..8], &3u32.to_le_bytes());
        assert_eq!(trailer[8], FORMAT_VERSION);
        assert_eq!(stats.checksum, crc32fast::hash(&bytes));
    }

    #[test]
    fn test_offsets_skip_directories() {
        let mut builder = PakBuilder::new(Vec::new());
        builder.add_file("one", &[1u8, 2, 3, 4][..]).unwrap();
        builder.add_directory("dir").unwrap();
        builder.add_file("two", &[5u8, 6][..]).unwrap();
        builder.add_file("three", &b""[..]).unwrap();
        builder.add_file("four", &[7u8][..]).unwrap();

        let offsets: Vec<u32> = builder.entries.iter().map(|e| e.payload_offset).collect();
        assert_eq!(offsets, vec![0, 4, 4, 6, 6]);

        let (_, stats) = builder.finish().unwrap();
        assert_eq!(stats.table_offset, 7);
    }

    #[test]
    fn test_oversized_file_fails_instead_of_wrapping() {
        let mut builder = PakBuilder::new(io::sink());
        let huge = io::repeat(0).take(u64::from(u32::MAX) + 1);
        let err = builder.add_file("huge.bin", huge).unwrap_err();
        assert!(matches!(
            err,
            PakError::SizeOverflow {
                what: "file size",
                ..
            }
        ));
    }
}
