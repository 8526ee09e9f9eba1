use crate::Error;
use futures::io::AsyncRead;
use std::convert::TryFrom;
use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A stream that yields the same byte `size` times and then reaches end-of-stream.
///
/// Nothing is buffered: the whole content is described by the fill byte and the number of
/// bytes left to produce, so multi-gigabyte bodies cost as much memory as tiny ones.
///
/// The stream is forward-only and single-pass - there is no way to rewind it.
/// Reading past the end is always allowed and always yields end-of-stream.
///
/// ### Example:
/// ```rust
/// use std::io::Read;
/// use wiremock_streams::FixedSizeStream;
///
/// let mut stream = FixedSizeStream::new(b'a', 5).unwrap();
/// let mut content = String::new();
/// stream.read_to_string(&mut content).unwrap();
///
/// assert_eq!(content, "aaaaa");
/// assert_eq!(stream.read_byte(), None);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSizeStream {
    fill: u8,
    size: u64,
    position: u64,
}

impl FixedSizeStream {
    /// Build a stream producing `size` copies of `fill`.
    ///
    /// It fails with [`Error::InvalidLength`] if `size` is zero.
    pub fn new(fill: u8, size: u64) -> Result<Self, Error> {
        if size < 1 {
            return Err(Error::InvalidLength(size));
        }
        Ok(Self {
            fill,
            size,
            position: 0,
        })
    }

    /// The byte this stream repeats.
    pub fn fill(&self) -> u8 {
        self.fill
    }

    /// The total number of bytes this stream produces.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// How many bytes have been read so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn remaining(&self) -> u64 {
        self.size - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.size
    }

    /// Read a single byte, advancing the cursor.
    ///
    /// Returns `None` once all `size` bytes have been produced, no matter how many times
    /// it is called afterwards.
    pub fn read_byte(&mut self) -> Option<u8> {
        if self.is_exhausted() {
            return None;
        }
        self.position += 1;
        Some(self.fill)
    }
}

impl Read for FixedSizeStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // `remaining` can exceed `usize::MAX` on 32-bit targets.
        let n = usize::try_from(self.remaining())
            .map(|remaining| remaining.min(buf.len()))
            .unwrap_or(buf.len());
        buf[..n].fill(self.fill);
        self.position += n as u64;
        Ok(n)
    }
}

impl AsyncRead for FixedSizeStream {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        Poll::Ready(self.get_mut().read(buf))
    }
}
