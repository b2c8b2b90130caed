use crate::http::request::Request;

/// Downstream consumer of completed requests.
///
/// Push-style: the framing loop hands over each record and immediately
/// moves on to the next cycle; nothing is ever written back to the peer.
pub trait Handler {
    fn handle(&mut self, request: Request);
}

/// Reference consumer: logs each request and drops it.
pub struct LogHandler;

impl Handler for LogHandler {
    fn handle(&mut self, request: Request) {
        tracing::info!(
            method = %request.line.method,
            path = %request.line.path,
            version = %request.line.version,
            headers = request.headers.len(),
            body_bytes = request.body_len(),
            "Request received"
        );
        tracing::debug!(headers = ?request.headers, body = ?request.body, "Request detail");
    }
}
