use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors surfaced by a backward scan and its adapters.
///
/// Reaching the start of the file before `n` lines were found is not an
/// error; it shows up as [`Offset::Exhausted`](crate::Offset::Exhausted).
#[derive(Debug, Error)]
pub enum TailError {
    #[error("line count must be greater than zero, got {0}")]
    InvalidLineCount(usize),

    #[error("offset must be end-relative (<= 0), got {0}")]
    InvalidOffset(i64),

    #[error("failed to determine file size: {0}")]
    SizeQuery(#[source] io::Error),

    #[error("failed to seek to byte {position}: {source}")]
    Seek {
        position: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {len} bytes at byte {position}: {source}")]
    Read {
        position: u64,
        len: usize,
        #[source]
        source: io::Error,
    },

    #[error("tail is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, TailError>;
