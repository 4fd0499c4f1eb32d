//! EUC-KR path transcoding
//!
//! Entry paths are stored in the legacy double-byte Korean encoding
//! the original consumers of this format expect. Kept isolated so a
//! format variant can swap the codec without touching the encoder.

use encoding_rs::EUC_KR;

use crate::core::error::{PakError, PakResult};

/// Transcode a relative path to its on-disk EUC-KR bytes.
///
/// Characters with no EUC-KR mapping are fatal; the format has no
/// substitution convention a reader could undo.
pub fn encode_path(path: &str) -> PakResult<Vec<u8>> {
    let (bytes, _, had_errors) = EUC_KR.encode(path);
    if had_errors {
        return Err(PakError::Encoding {
            path: path.to_string(),
        });
    }
    Ok(bytes.into_owned())
}

/// Inverse of [`encode_path`], for readers of the format.
pub fn decode_path(bytes: &[u8]) -> PakResult<String> {
    let (text, _, had_errors) = EUC_KR.decode(bytes);
    if had_errors {
        return Err(PakError::Encoding {
            path: text.into_owned(),
        });
    }
    Ok(text.into_owned())
}
