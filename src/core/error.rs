use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building a pak archive
#[derive(Debug, Error)]
pub enum PakError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("path not representable in EUC-KR: {path:?}")]
    Encoding { path: String },

    #[error("transcoded path is {len} bytes, limit is 255: {path:?}")]
    PathTooLong { path: String, len: usize },

    #[error("{what} for {path:?} is {size} bytes, which does not fit the 32-bit size field")]
    SizeOverflow {
        what: &'static str,
        path: PathBuf,
        size: u64,
    },
}

pub type PakResult<T> = Result<T, PakError>;
