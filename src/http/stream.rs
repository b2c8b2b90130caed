use bytes::Bytes;
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

/// Buffered line/exact-length reads over one connection's transport.
///
/// Exclusively owned by one framing loop for the connection's lifetime.
/// The three read operations are the loop's only suspension points; `close`
/// shuts the transport down, and dropping the stream releases it regardless
/// of exit path.
pub struct ByteStream<S> {
    inner: BufReader<S>,
}

impl<S: AsyncRead + AsyncWrite + Unpin> ByteStream<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: BufReader::new(stream),
        }
    }

    /// True once the peer has closed and all buffered bytes are consumed.
    ///
    /// Suspends until at least one byte is buffered or end-of-stream is
    /// observed; does not consume anything.
    pub async fn at_eof(&mut self) -> std::io::Result<bool> {
        Ok(self.inner.fill_buf().await?.is_empty())
    }

    /// Reads bytes up to and including the next `\n`.
    ///
    /// Returns an empty buffer at end-of-stream; a non-empty buffer without
    /// a trailing `\n` means the stream ended mid-line. Whether the line
    /// satisfies the CRLF contract is the caller's check.
    pub async fn read_line(&mut self) -> std::io::Result<Vec<u8>> {
        let mut line = Vec::new();
        self.inner.read_until(b'\n', &mut line).await?;
        Ok(line)
    }

    /// Reads exactly `n` bytes, suspending until they have arrived.
    ///
    /// Fails with `ErrorKind::UnexpectedEof` if the stream ends first.
    pub async fn read_exact_n(&mut self, n: usize) -> std::io::Result<Bytes> {
        let mut buf = vec![0u8; n];
        self.inner.read_exact(&mut buf).await?;
        Ok(Bytes::from(buf))
    }

    /// Shuts down the underlying transport.
    pub async fn close(&mut self) -> std::io::Result<()> {
        self.inner.get_mut().shutdown().await
    }
}
