use crate::http::request::{HeaderMap, RequestLine};

/// Line terminator; every line of a request must end with it.
pub const CRLF: &[u8] = b"\r\n";
/// Request-line field separator.
pub const FIELD_SEP: char = ' ';
/// Header name/value separator.
pub const HEADER_SEP: char = ':';
/// Header key that declares a body and its length.
pub const CONTENT_LENGTH: &str = "Content-Length";

/// Framing violations. Each one aborts the whole connection; none are
/// retried and no partial request is forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Request line missing its CRLF terminator or holding fewer than
    /// three space-separated fields.
    MalformedRequestLine,
    /// Header line missing its CRLF terminator or its colon separator.
    MalformedHeaderLine,
    /// `Content-Length` present but not a string of ASCII digits.
    InvalidContentLength,
    /// Stream closed in the middle of an exact-length body read.
    PrematureStreamEnd,
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FrameError::MalformedRequestLine => "malformed request line",
            FrameError::MalformedHeaderLine => "malformed header line",
            FrameError::InvalidContentLength => "invalid Content-Length value",
            FrameError::PrematureStreamEnd => "stream ended mid-body",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FrameError {}

/// One parsed header line: either a name/value pair or the bare-CRLF
/// end-of-headers terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    Pair { name: String, value: String },
    End,
}

fn strip_crlf(raw: &[u8]) -> Option<&[u8]> {
    raw.strip_suffix(CRLF)
}

/// Parses a raw request line (CRLF included) into its three tokens.
///
/// The line must end with CRLF and split into at least three fields on
/// single spaces; fields beyond the third are ignored.
pub fn parse_request_line(raw: &[u8]) -> Result<RequestLine, FrameError> {
    let line = strip_crlf(raw).ok_or(FrameError::MalformedRequestLine)?;
    let line = std::str::from_utf8(line).map_err(|_| FrameError::MalformedRequestLine)?;

    let mut fields = line.split(FIELD_SEP);
    let method = fields.next().ok_or(FrameError::MalformedRequestLine)?;
    let path = fields.next().ok_or(FrameError::MalformedRequestLine)?;
    let version = fields.next().ok_or(FrameError::MalformedRequestLine)?;

    Ok(RequestLine {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}

/// Parses a raw header line (CRLF included).
///
/// A line that is exactly CRLF is the end-of-headers terminator. Anything
/// else must end with CRLF and contain a colon; the name is everything
/// before the first colon and the value everything after it (so values may
/// themselves contain colons), both trimmed.
pub fn parse_header_line(raw: &[u8]) -> Result<HeaderField, FrameError> {
    if raw == CRLF {
        return Ok(HeaderField::End);
    }

    let line = strip_crlf(raw).ok_or(FrameError::MalformedHeaderLine)?;
    let line = std::str::from_utf8(line).map_err(|_| FrameError::MalformedHeaderLine)?;

    let (name, value) = line
        .split_once(HEADER_SEP)
        .ok_or(FrameError::MalformedHeaderLine)?;

    Ok(HeaderField::Pair {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
    })
}

/// Extracts the declared body length from a completed header map.
///
/// Returns `None` when no `Content-Length` header is present (no body is
/// read for that cycle). A present value must be a non-empty string of
/// ASCII digits.
pub fn parse_content_length(headers: &HeaderMap) -> Result<Option<usize>, FrameError> {
    let Some(value) = headers.get(CONTENT_LENGTH) else {
        return Ok(None);
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FrameError::InvalidContentLength);
    }

    let n = value
        .parse::<usize>()
        .map_err(|_| FrameError::InvalidContentLength)?;

    Ok(Some(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_request_line() {
        let line = parse_request_line(b"GET /index.html HTTP/1.1\r\n").unwrap();

        assert_eq!(line.method, "GET");
        assert_eq!(line.path, "/index.html");
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn header_value_keeps_inner_colons() {
        let field = parse_header_line(b"X-Time:10:30:00\r\n").unwrap();

        assert_eq!(
            field,
            HeaderField::Pair {
                name: "X-Time".to_string(),
                value: "10:30:00".to_string(),
            }
        );
    }
}
