//! Error taxonomy surfaced by the codec.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading or writing a bitmap file.
///
/// Pixel accessors and in-place transforms never produce one of these:
/// out-of-range reads fall back to the black sentinel and out-of-range
/// writes are rejected without error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source could not be opened for reading, or the destination could
    /// not be created for writing.
    #[error("cannot open {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a bitmap, or uses a variant this crate does not
    /// handle (anything other than 24-bit uncompressed).
    #[error("invalid bitmap: {reason}")]
    InvalidFormat { reason: String },

    /// The file ended before the named region was fully read.
    #[error("truncated file while reading {context}")]
    TruncatedFile { context: &'static str },

    /// The pixel buffer reservation failed. Decode surfaces this instead
    /// of aborting, since the dimensions come from the file header.
    #[error("cannot allocate pixel buffer")]
    OutOfMemory,

    /// Any other I/O failure mid-stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}
