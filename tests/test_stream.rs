//! Tests for the ByteStream read primitives over in-memory duplex pipes.

use framewire::http::stream::ByteStream;
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_read_line_includes_terminator() {
    let (mut client, server) = tokio::io::duplex(4096);
    client.write_all(b"GET / HTTP/1.1\r\nrest").await.unwrap();
    drop(client);

    let mut stream = ByteStream::new(server);
    let line = stream.read_line().await.unwrap();

    assert_eq!(line, b"GET / HTTP/1.1\r\n");
}

#[tokio::test]
async fn test_read_line_without_newline_at_eof() {
    let (mut client, server) = tokio::io::duplex(4096);
    client.write_all(b"partial").await.unwrap();
    drop(client);

    let mut stream = ByteStream::new(server);
    let line = stream.read_line().await.unwrap();

    assert_eq!(line, b"partial");
}

#[tokio::test]
async fn test_read_line_empty_at_eof() {
    let (client, server) = tokio::io::duplex(4096);
    drop(client);

    let mut stream = ByteStream::new(server);
    let line = stream.read_line().await.unwrap();

    assert!(line.is_empty());
}

#[tokio::test]
async fn test_read_exact_n() {
    let (mut client, server) = tokio::io::duplex(4096);
    client.write_all(b"hello world").await.unwrap();
    drop(client);

    let mut stream = ByteStream::new(server);
    let chunk = stream.read_exact_n(5).await.unwrap();

    assert_eq!(&chunk[..], b"hello");
}

#[tokio::test]
async fn test_read_exact_n_premature_end() {
    let (mut client, server) = tokio::io::duplex(4096);
    client.write_all(b"hi").await.unwrap();
    drop(client);

    let mut stream = ByteStream::new(server);
    let err = stream.read_exact_n(10).await.unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}

#[tokio::test]
async fn test_read_exact_zero_bytes() {
    let (client, server) = tokio::io::duplex(4096);
    drop(client);

    let mut stream = ByteStream::new(server);
    let chunk = stream.read_exact_n(0).await.unwrap();

    assert!(chunk.is_empty());
}

#[tokio::test]
async fn test_at_eof_transitions() {
    let (mut client, server) = tokio::io::duplex(4096);
    client.write_all(b"x\r\n").await.unwrap();
    drop(client);

    let mut stream = ByteStream::new(server);
    assert!(!stream.at_eof().await.unwrap());

    stream.read_line().await.unwrap();
    assert!(stream.at_eof().await.unwrap());
}

#[tokio::test]
async fn test_read_line_waits_for_arrival() {
    // A line split across two writes is still delivered whole.
    let (mut client, server) = tokio::io::duplex(4096);

    let writer = tokio::spawn(async move {
        client.write_all(b"GET / ").await.unwrap();
        client.flush().await.unwrap();
        client.write_all(b"HTTP/1.1\r\n").await.unwrap();
        drop(client);
    });

    let mut stream = ByteStream::new(server);
    let line = stream.read_line().await.unwrap();

    assert_eq!(line, b"GET / HTTP/1.1\r\n");
    writer.await.unwrap();
}
