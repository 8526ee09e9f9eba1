use once_cell::sync::Lazy;
use std::env;

/// Default cap on the number of bytes a [`StreamResponder`] will read from a stream: 64 MiB.
///
/// [`StreamResponder`]: crate::StreamResponder
pub const BODY_LIMIT: usize = 64 * 1024 * 1024;

/// Environment variable overriding [`BODY_LIMIT`] for every [`StreamResponder`] that does
/// not set its own limit.
///
/// [`StreamResponder`]: crate::StreamResponder
pub const BODY_LIMIT_ENV_VAR: &str = "WIREMOCK_STREAMS_BODY_LIMIT";

/// Specifies how many bytes can be read from a stream to build a response body.
///
/// Streams are not bounded in general (think of [`std::io::repeat`]), while a response body
/// has to be fully buffered before the mock server can send it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyLimit {
    /// Maximum length of a body in bytes.
    Limited(usize),
    /// Read until end-of-stream, however long it takes.
    Unlimited,
}

impl Default for BodyLimit {
    /// [`BODY_LIMIT`], unless overridden via [`BODY_LIMIT_ENV_VAR`].
    ///
    /// The environment is only inspected once per process.
    fn default() -> Self {
        *DEFAULT_BODY_LIMIT
    }
}

static DEFAULT_BODY_LIMIT: Lazy<BodyLimit> =
    Lazy::new(|| parse_body_limit(env::var(BODY_LIMIT_ENV_VAR).ok().as_deref()));

fn parse_body_limit(raw: Option<&str>) -> BodyLimit {
    match raw.and_then(|x| x.trim().parse::<usize>().ok()) {
        Some(limit) => BodyLimit::Limited(limit),
        None => BodyLimit::Limited(BODY_LIMIT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_valid_value_overrides_the_default_limit() {
        assert_eq!(parse_body_limit(Some("1024")), BodyLimit::Limited(1024));
        assert_eq!(parse_body_limit(Some(" 7 ")), BodyLimit::Limited(7));
    }

    #[test]
    fn missing_or_garbage_values_fall_back_to_the_default_limit() {
        assert_eq!(parse_body_limit(None), BodyLimit::Limited(BODY_LIMIT));
        assert_eq!(parse_body_limit(Some("")), BodyLimit::Limited(BODY_LIMIT));
        assert_eq!(parse_body_limit(Some("-1")), BodyLimit::Limited(BODY_LIMIT));
        assert_eq!(parse_body_limit(Some("lots")), BodyLimit::Limited(BODY_LIMIT));
    }
}
