use crate::{BodyLimit, Error, StreamSource};
use log::{debug, warn};
use std::io::Read;
use wiremock::{Request, Respond, ResponseTemplate};

/// A [`Respond`] implementation serving its response body from a [`StreamSource`].
///
/// For every request matched by the [`Mock`] it is attached to, `StreamResponder` asks its
/// source for a stream (exactly once) and reads it until end-of-stream. The bytes become the
/// body of the response built from the configured [`ResponseTemplate`].
///
/// Whether each request gets the full body depends on the source: a
/// [`for_fixed_size`] source builds a new stream per request, while a [`for_stream`] source
/// hands out the same stream, which is empty after the first request drained it.
///
/// If the source fails or the stream is larger than the [`BodyLimit`], the mock server replies
/// with a `500` and the error message as body.
///
/// ### Example:
/// ```rust
/// use wiremock::{MockServer, Mock};
/// use wiremock::matchers::{method, path};
/// use wiremock_streams::{stream_source, StreamResponder};
///
/// #[async_std::main]
/// async fn main() {
///     // Arrange
///     let mock_server = MockServer::start().await;
///     Mock::given(method("GET"))
///         .and(path("/large"))
///         .respond_with(StreamResponder::new(stream_source::for_fixed_size(b'a', 54321)))
///         .mount(&mock_server)
///         .await;
///
///     // Act
///     let body = reqwest::get(format!("{}/large", &mock_server.uri()))
///         .await
///         .unwrap()
///         .text()
///         .await
///         .unwrap();
///
///     // Assert
///     assert_eq!(body, "a".repeat(54321));
/// }
/// ```
///
/// [`Mock`]: wiremock::Mock
/// [`for_fixed_size`]: crate::stream_source::for_fixed_size
/// [`for_stream`]: crate::stream_source::for_stream
pub struct StreamResponder<S> {
    source: S,
    template: ResponseTemplate,
    mime: String,
    body_limit: BodyLimit,
}

impl<S: StreamSource> StreamResponder<S> {
    /// Serve bodies read from `source` with a `200` status code and
    /// "Content-Type" set to "application/octet-stream".
    pub fn new(source: S) -> Self {
        Self {
            source,
            template: ResponseTemplate::new(200),
            mime: "application/octet-stream".to_string(),
            body_limit: BodyLimit::default(),
        }
    }

    /// Use `template` for everything but the body - status code, headers, delay.
    ///
    /// Any body set on `template` is replaced by the stream content.
    ///
    /// ### Example:
    /// ```rust
    /// use wiremock::ResponseTemplate;
    /// use wiremock_streams::{stream_source, StreamResponder};
    ///
    /// let responder = StreamResponder::new(stream_source::for_fixed_size(b'x', 10))
    ///     .template(ResponseTemplate::new(202).insert_header("X-Request-Id", "12345"));
    /// ```
    pub fn template(mut self, template: ResponseTemplate) -> Self {
        self.template = template;
        self
    }

    /// Set the "Content-Type" of the served body.
    pub fn mime(mut self, mime: &str) -> Self {
        self.mime = mime.to_string();
        self
    }

    /// Cap the number of bytes read from the stream.
    ///
    /// It defaults to [`BodyLimit::default`], which can be tuned through the
    /// `WIREMOCK_STREAMS_BODY_LIMIT` environment variable.
    pub fn body_limit(mut self, limit: BodyLimit) -> Self {
        self.body_limit = limit;
        self
    }

    /// Get a stream from the source and read it until end-of-stream.
    pub fn read_body(&self) -> Result<Vec<u8>, Error> {
        let stream = self.source.get_stream()?;
        let mut body = Vec::new();
        match self.body_limit {
            BodyLimit::Unlimited => {
                let mut stream = stream;
                stream.read_to_end(&mut body)?;
            }
            BodyLimit::Limited(limit) => {
                // One byte past the limit tells "exactly at the limit" apart from "too large".
                let probe = (limit as u64).saturating_add(1);
                stream.take(probe).read_to_end(&mut body)?;
                if body.len() > limit {
                    return Err(Error::BodyTooLarge { limit });
                }
            }
        }
        Ok(body)
    }
}

impl<S: StreamSource> Respond for StreamResponder<S> {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        match self.read_body() {
            Ok(body) => {
                debug!(
                    "Serving {} bytes streamed for {} {}.",
                    body.len(),
                    request.method,
                    request.url
                );
                self.template.clone().set_body_raw(body, &self.mime)
            }
            Err(err) => {
                warn!(
                    "Failed to stream the body for {} {}: {}",
                    request.method, request.url, err
                );
                ResponseTemplate::new(500).set_body_string(err.to_string())
            }
        }
    }
}
