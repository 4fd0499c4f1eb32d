//! Core functionality for pakr

pub mod error;

// Re-exports
pub use error::{PakError, PakResult};
