use std::io;
use thiserror::Error;

/// Everything that can go wrong while producing or serving a stream.
#[derive(Debug, Error)]
pub enum Error {
    /// A [`FixedSizeStream`] must produce at least one byte.
    ///
    /// [`FixedSizeStream`]: crate::FixedSizeStream
    #[error("invalid stream size: {0} (must be at least 1 byte)")]
    InvalidLength(u64),
    /// A [`StreamResponder`] read more bytes than its [`BodyLimit`] allows.
    ///
    /// [`StreamResponder`]: crate::StreamResponder
    /// [`BodyLimit`]: crate::BodyLimit
    #[error("stream body exceeds the limit of {limit} bytes")]
    BodyTooLarge { limit: usize },
    /// The underlying stream failed while being read.
    #[error("failed to read stream: {0}")]
    Io(#[from] io::Error),
}
