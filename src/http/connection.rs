use std::io::ErrorKind;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::http::handler::Handler;
use crate::http::parser::{self, FrameError, HeaderField};
use crate::http::request::{HeaderMap, Request, RequestLine};
use crate::http::stream::ByteStream;

/// How a connection's framing loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The peer closed the stream between request cycles.
    Clean,
    /// A framing violation closed the connection.
    Aborted(FrameError),
}

/// One connection's framing loop.
///
/// Owns the [`ByteStream`] for the connection's lifetime and drives it
/// through repeated request cycles, pushing each completed [`Request`] to
/// the handler. Cycles are strictly sequential; cycle N+1 does not start
/// until cycle N's body (if any) has been fully consumed.
pub struct Connection<S, H> {
    stream: ByteStream<S>,
    handler: H,
    state: ConnectionState,
}

enum ConnectionState {
    Idle,
    ReadingRequestLine,
    ReadingHeaders(RequestLine),
    ReadingBody(RequestLine, HeaderMap, usize),
    Dispatch(Request),
    Closed(Outcome),
}

impl<S, H> Connection<S, H>
where
    S: AsyncRead + AsyncWrite + Unpin,
    H: Handler,
{
    pub fn new(stream: ByteStream<S>, handler: H) -> Self {
        Self {
            stream,
            handler,
            state: ConnectionState::Idle,
        }
    }

    /// Runs request cycles until end-of-stream or a framing violation.
    ///
    /// Both exits close the stream; the peer never sees a response, so the
    /// two are distinguishable to callers only through the returned
    /// [`Outcome`]. `Err` is reserved for transport failures outside the
    /// framing contract (the stream is still released, on drop).
    pub async fn run(&mut self) -> anyhow::Result<Outcome> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Idle) {
                ConnectionState::Idle => {
                    self.state = if self.stream.at_eof().await? {
                        ConnectionState::Closed(Outcome::Clean)
                    } else {
                        ConnectionState::ReadingRequestLine
                    };
                }

                ConnectionState::ReadingRequestLine => {
                    let raw = self.stream.read_line().await?;
                    self.state = match parser::parse_request_line(&raw) {
                        Ok(line) => {
                            tracing::info!(
                                method = %line.method,
                                path = %line.path,
                                version = %line.version,
                                "Parsed request line"
                            );
                            ConnectionState::ReadingHeaders(line)
                        }
                        Err(e) => ConnectionState::Closed(Outcome::Aborted(e)),
                    };
                }

                ConnectionState::ReadingHeaders(line) => {
                    self.state = match self.read_headers().await? {
                        Err(e) => ConnectionState::Closed(Outcome::Aborted(e)),
                        Ok(headers) => match parser::parse_content_length(&headers) {
                            Err(e) => ConnectionState::Closed(Outcome::Aborted(e)),
                            Ok(None) => ConnectionState::Dispatch(Request {
                                line,
                                headers,
                                body: None,
                            }),
                            Ok(Some(n)) => ConnectionState::ReadingBody(line, headers, n),
                        },
                    };
                }

                ConnectionState::ReadingBody(line, headers, n) => {
                    self.state = match self.stream.read_exact_n(n).await {
                        Ok(body) => ConnectionState::Dispatch(Request {
                            line,
                            headers,
                            body: Some(body),
                        }),
                        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                            ConnectionState::Closed(Outcome::Aborted(
                                FrameError::PrematureStreamEnd,
                            ))
                        }
                        Err(e) => return Err(e.into()),
                    };
                }

                ConnectionState::Dispatch(request) => {
                    self.handler.handle(request);
                    self.state = ConnectionState::Idle;
                }

                ConnectionState::Closed(outcome) => {
                    if let Outcome::Aborted(kind) = outcome {
                        tracing::warn!(error = %kind, "Aborting connection");
                    }
                    self.stream.close().await?;
                    return Ok(outcome);
                }
            }
        }
    }

    /// Reads header lines until the bare-CRLF terminator.
    ///
    /// End-of-stream before the terminator ends the header block without an
    /// error; whatever was collected stands (the next pre-check then ends
    /// the loop).
    async fn read_headers(&mut self) -> anyhow::Result<Result<HeaderMap, FrameError>> {
        let mut headers = HeaderMap::new();

        loop {
            if self.stream.at_eof().await? {
                break;
            }

            let raw = self.stream.read_line().await?;
            match parser::parse_header_line(&raw) {
                Ok(HeaderField::End) => break,
                Ok(HeaderField::Pair { name, value }) => {
                    headers.insert(name, value);
                }
                Err(e) => return Ok(Err(e)),
            }
        }

        Ok(Ok(headers))
    }
}
