//! Hand out byte streams on demand, without the consumer knowing where they come from.
//!
//! A [`StreamSource`] is asked for a stream every time a consumer needs one - for example,
//! every time a [`StreamResponder`] has to build a response body.
//! There are two ways to build one:
//!
//! - [`for_stream`] wraps a stream you already built. Every call to
//!   [`get_stream`] returns that **same** stream: once it has been read to the end, later
//!   consumers will find it exhausted;
//! - [`for_fixed_size`] remembers a fill byte and a size. Every call to [`get_stream`]
//!   builds a **fresh** [`FixedSizeStream`].
//!
//! [`StreamResponder`]: crate::StreamResponder
//! [`get_stream`]: StreamSource::get_stream
use crate::{Error, FixedSizeStream};
use log::debug;
use std::fmt;
use std::io::{self, Read};
use std::sync::{Arc, Mutex};

/// Anything that can provide a readable stream when asked.
///
/// `StreamSource` is `Send + Sync` so that it can be embedded in a [`wiremock::Respond`]
/// implementation and shared across the mock server's worker tasks.
pub trait StreamSource: Send + Sync {
    /// The stream handed to consumers.
    type Stream: Read + Send;

    /// Provide a stream to read from.
    fn get_stream(&self) -> Result<Self::Stream, Error>;
}

/// A cloneable handle to a single stream.
///
/// All clones read from the same underlying stream and advance the same cursor.
/// Use [`SharedStream::ptr_eq`] to check if two handles point to the same stream.
pub struct SharedStream<R>(Arc<Mutex<R>>);

impl<R> SharedStream<R> {
    pub fn new(stream: R) -> Self {
        Self(Arc::new(Mutex::new(stream)))
    }

    /// `true` if both handles refer to the same underlying stream.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<R> Clone for SharedStream<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R> fmt::Debug for SharedStream<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedStream")
            .field(&Arc::as_ptr(&self.0))
            .finish()
    }
}

impl<R: Read> Read for SharedStream<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let mut stream = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "shared stream lock poisoned"))?;
        stream.read(buf)
    }
}

/// A [`StreamSource`] returning the same, pre-existing stream on every call.
///
/// Build it with [`for_stream`].
///
/// ### Example:
/// ```rust
/// use std::io::Read;
/// use wiremock_streams::{stream_source, FixedSizeStream, StreamSource};
///
/// let source = stream_source::for_stream(FixedSizeStream::new(b'x', 3).unwrap());
///
/// let mut body = Vec::new();
/// source.get_stream().unwrap().read_to_end(&mut body).unwrap();
/// assert_eq!(body, b"xxx");
///
/// // The stream has already been consumed.
/// body.clear();
/// source.get_stream().unwrap().read_to_end(&mut body).unwrap();
/// assert!(body.is_empty());
/// ```
#[derive(Debug)]
pub struct ExistingStream<R> {
    stream: SharedStream<R>,
}

impl<R> ExistingStream<R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream: SharedStream::new(stream),
        }
    }
}

impl<R: Read + Send> StreamSource for ExistingStream<R> {
    type Stream = SharedStream<R>;

    fn get_stream(&self) -> Result<Self::Stream, Error> {
        Ok(self.stream.clone())
    }
}

/// A [`StreamSource`] building a new [`FixedSizeStream`] on every call.
///
/// The size is only validated when [`get_stream`] is invoked: building a `FixedSizeSource`
/// never fails.
///
/// Build it with [`for_fixed_size`].
///
/// [`get_stream`]: StreamSource::get_stream
#[derive(Debug, Clone, Copy)]
pub struct FixedSizeSource {
    fill: u8,
    size: u64,
}

impl FixedSizeSource {
    pub fn new(fill: u8, size: u64) -> Self {
        Self { fill, size }
    }
}

impl StreamSource for FixedSizeSource {
    type Stream = FixedSizeStream;

    fn get_stream(&self) -> Result<Self::Stream, Error> {
        debug!(
            "Building a fixed-size stream of {} bytes (fill: {:#04x}).",
            self.size, self.fill
        );
        FixedSizeStream::new(self.fill, self.size)
    }
}

/// Expose an already-built stream as a [`StreamSource`].
///
/// Every [`get_stream`] call hands out the same stream instance.
///
/// [`get_stream`]: StreamSource::get_stream
pub fn for_stream<R>(stream: R) -> ExistingStream<R>
where
    R: Read + Send,
{
    ExistingStream::new(stream)
}

/// A [`StreamSource`] producing a fresh stream of `size` copies of `fill` on every
/// [`get_stream`] call.
///
/// ### Example:
/// ```rust
/// use std::io::Read;
/// use wiremock_streams::{stream_source, StreamSource};
///
/// let source = stream_source::for_fixed_size(b'x', 10);
///
/// for _ in 0..2 {
///     let mut body = String::new();
///     source.get_stream().unwrap().read_to_string(&mut body).unwrap();
///     assert_eq!(body, "xxxxxxxxxx");
/// }
/// ```
///
/// [`get_stream`]: StreamSource::get_stream
pub fn for_fixed_size(fill: u8, size: u64) -> FixedSizeSource {
    FixedSizeSource::new(fill, size)
}
