use std::collections::HashMap;

use bytes::Bytes;

/// Header names mapped to trimmed values. Keys are case-sensitive as sent;
/// a repeated name overwrites the earlier value.
pub type HeaderMap = HashMap<String, String>;

/// The three tokens of a request's first line.
///
/// All tokens are captured as raw strings; the framing layer attaches no
/// meaning to them beyond "at least three space-separated fields".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token (e.g., "GET")
    pub method: String,
    /// The request path token (e.g., "/index.html")
    pub path: String,
    /// The protocol version token (e.g., "HTTP/1.1")
    pub version: String,
}

/// One fully framed request, as handed to the downstream consumer.
///
/// Built fresh per request cycle and discarded after dispatch; `body` is
/// `None` when the request declared no `Content-Length`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The parsed request line
    pub line: RequestLine,
    /// Request headers as trimmed key-value pairs
    pub headers: HeaderMap,
    /// Request body, present iff a `Content-Length` header was sent
    pub body: Option<Bytes>,
}

impl Request {
    /// Retrieves a header value by its exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Length of the body in bytes, 0 if absent.
    pub fn body_len(&self) -> usize {
        self.body.as_ref().map_or(0, |b| b.len())
    }
}
