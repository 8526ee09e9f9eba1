//! `wiremock_streams` builds synthetic response bodies of arbitrary size for
//! [`wiremock`]'s `MockServer`, without holding them in memory until they are served.
//!
//! # Table of Contents
//! 1. [Fixed-size streams](#fixed-size-streams)
//! 2. [Stream sources](#stream-sources)
//! 3. [Serving streams](#serving-streams)
//! 4. [Configuration](#configuration)
//!
//! ## Fixed-size streams
//!
//! A [`FixedSizeStream`] repeats one byte a fixed number of times, then reaches end-of-stream.
//! It implements [`std::io::Read`] and [`futures::io::AsyncRead`].
//!
//! ```rust
//! use std::io::Read;
//! use wiremock_streams::FixedSizeStream;
//!
//! let mut content = String::new();
//! FixedSizeStream::new(b'a', 54321)
//!     .unwrap()
//!     .read_to_string(&mut content)
//!     .unwrap();
//! assert_eq!(content, "a".repeat(54321));
//!
//! // A stream must produce at least one byte.
//! assert!(FixedSizeStream::new(b'a', 0).is_err());
//! ```
//!
//! ## Stream sources
//!
//! A [`StreamSource`] hands out a stream whenever a consumer asks for one.
//! Check the [`stream_source`] module for the two flavours: sharing one existing stream or
//! building a fresh [`FixedSizeStream`] on every call.
//!
//! ## Serving streams
//!
//! [`StreamResponder`] plugs a [`StreamSource`] into a `wiremock` [`Mock`]: every matched
//! request gets a body read from the source.
//!
//! ```rust
//! use wiremock::{MockServer, Mock, ResponseTemplate};
//! use wiremock::matchers::method;
//! use wiremock_streams::{stream_source, StreamResponder};
//!
//! #[async_std::main]
//! async fn main() {
//!     // Start a background HTTP server on a random local port
//!     let mock_server = MockServer::start().await;
//!
//!     // Every GET gets ten `x` bytes, streamed from a fresh source.
//!     let responder = StreamResponder::new(stream_source::for_fixed_size(b'x', 10))
//!         .template(ResponseTemplate::new(200).insert_header("X-Source", "fixed-size"));
//!     Mock::given(method("GET"))
//!         .respond_with(responder)
//!         .mount(&mock_server)
//!         .await;
//!
//!     let response = reqwest::get(&mock_server.uri()).await.unwrap();
//!     assert_eq!(response.status(), 200);
//!     assert_eq!(
//!         response.headers().get("X-Source").unwrap().to_str().unwrap(),
//!         "fixed-size"
//!     );
//!     assert_eq!(response.text().await.unwrap(), "xxxxxxxxxx");
//! }
//! ```
//!
//! ## Configuration
//!
//! Response bodies are buffered before being sent, hence [`StreamResponder`] stops reading
//! after [`BodyLimit`] bytes (64 MiB by default).
//! The default can be changed for the whole process with the `WIREMOCK_STREAMS_BODY_LIMIT`
//! environment variable, or per responder with [`StreamResponder::body_limit`].
//!
//! [`Mock`]: wiremock::Mock
mod config;
mod error;
mod fixed_size;
mod responder;
pub mod stream_source;

pub use config::{BodyLimit, BODY_LIMIT, BODY_LIMIT_ENV_VAR};
pub use error::Error;
pub use fixed_size::FixedSizeStream;
pub use responder::StreamResponder;
pub use stream_source::{ExistingStream, FixedSizeSource, SharedStream, StreamSource};
