//! Error types for huffpress

use thiserror::Error;

/// Fatal codec errors. Any of these aborts the operation immediately;
/// output written before the failure is not guaranteed valid.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("bad magic number {found:#010x}")]
    BadMagic { found: u32 },

    #[error("input exhausted before the tree header was complete")]
    TruncatedHeader,

    #[error("input exhausted before the end-of-stream code")]
    TruncatedPayload,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
