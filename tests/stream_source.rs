use std::io::{self, Read};
use wiremock_streams::{stream_source, Error, FixedSizeStream, StreamSource};

fn read_all<R: Read>(mut stream: R) -> Vec<u8> {
    let mut content = Vec::new();
    stream.read_to_end(&mut content).unwrap();
    content
}

#[test]
fn an_existing_stream_is_served_as_is() {
    // Arrange
    let source = stream_source::for_stream(FixedSizeStream::new(b'a', 54321).unwrap());

    // Act
    let content = String::from_utf8(read_all(source.get_stream().unwrap())).unwrap();

    // Assert
    assert_eq!(content, "a".repeat(54321));
}

#[test]
fn an_existing_stream_source_returns_the_same_stream_every_time() {
    // Arrange
    let source = stream_source::for_stream(FixedSizeStream::new(b'a', 10).unwrap());

    // Act
    let first = source.get_stream().unwrap();
    let second = source.get_stream().unwrap();

    // Assert
    assert!(first.ptr_eq(&second));
}

#[test]
fn an_existing_stream_stays_exhausted_once_consumed() {
    // Arrange
    let source = stream_source::for_stream(FixedSizeStream::new(b'a', 10).unwrap());
    assert_eq!(read_all(source.get_stream().unwrap()), b"aaaaaaaaaa");

    // Act
    let mut stream = source.get_stream().unwrap();

    // Assert
    let mut buf = [0u8; 4];
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
    assert!(read_all(stream).is_empty());
}

#[test]
fn handles_to_an_existing_stream_share_the_cursor() {
    // Arrange
    let source = stream_source::for_stream(FixedSizeStream::new(b'm', 6).unwrap());
    let mut first = source.get_stream().unwrap();
    let mut second = source.get_stream().unwrap();

    // Act
    let mut buf = [0u8; 4];
    let n_first = first.read(&mut buf).unwrap();
    let n_second = second.read(&mut buf).unwrap();

    // Assert
    assert_eq!(n_first, 4);
    assert_eq!(n_second, 2);
}

#[test]
fn any_reader_can_be_wrapped() {
    let source = stream_source::for_stream(io::Cursor::new(b"Hello world.".to_vec()));

    assert_eq!(read_all(source.get_stream().unwrap()), b"Hello world.");
    assert!(read_all(source.get_stream().unwrap()).is_empty());
}

#[test]
fn a_fixed_size_source_builds_a_fresh_stream_every_time() {
    // Arrange
    let source = stream_source::for_fixed_size(b'x', 10);

    // Act
    let first = source.get_stream().unwrap();
    let second = source.get_stream().unwrap();

    // Assert
    assert_eq!(first.position(), 0);
    assert_eq!(second.position(), 0);
    assert_eq!(read_all(first), b"xxxxxxxxxx");
    assert_eq!(read_all(second), b"xxxxxxxxxx");
}

#[test]
fn draining_one_fixed_size_stream_does_not_affect_the_next_one() {
    // Arrange
    let source = stream_source::for_fixed_size(b'x', 10);
    let mut drained = source.get_stream().unwrap();
    read_all(&mut drained);

    // Act
    let fresh = source.get_stream().unwrap();

    // Assert
    assert!(drained.is_exhausted());
    assert!(!fresh.is_exhausted());
    assert_eq!(fresh.remaining(), 10);
}

#[test]
fn a_fixed_size_source_reports_an_invalid_size_lazily() {
    // Arrange - building the source does not fail
    let source = stream_source::for_fixed_size(b'x', 0);

    // Act
    let outcome = source.get_stream();

    // Assert
    assert!(matches!(outcome, Err(Error::InvalidLength(0))));
    // Every call reports it again
    assert!(matches!(source.get_stream(), Err(Error::InvalidLength(0))));
}

#[test]
fn an_existing_stream_source_reports_an_invalid_size_eagerly() {
    fn build() -> Result<impl StreamSource, Error> {
        Ok(stream_source::for_stream(FixedSizeStream::new(b'x', 0)?))
    }

    assert!(matches!(build(), Err(Error::InvalidLength(0))));
}

#[test]
fn sources_can_be_used_as_trait_objects() {
    let sources: Vec<Box<dyn StreamSource<Stream = FixedSizeStream>>> = vec![
        Box::new(stream_source::for_fixed_size(b'1', 1)),
        Box::new(stream_source::for_fixed_size(b'2', 2)),
    ];

    let content: Vec<Vec<u8>> = sources
        .iter()
        .map(|source| read_all(source.get_stream().unwrap()))
        .collect();

    assert_eq!(content, vec![b"1".to_vec(), b"22".to_vec()]);
}
