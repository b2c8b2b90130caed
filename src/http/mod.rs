//! HTTP/1.1 request framing.
//!
//! This module turns the byte stream of one accepted connection into a
//! sequence of parsed request records. It never writes a response; completed
//! records are pushed to a [`handler::Handler`] and the loop continues until
//! the peer closes the stream or the input violates the framing contract.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection framing loop implementing the
//!   request-cycle state machine
//! - **`stream`**: `ByteStream`, the line/exact-length read abstraction over
//!   the transport
//! - **`parser`**: Per-line parsers for request lines and header lines, plus
//!   the framing error taxonomy
//! - **`request`**: Parsed request-line and request-record types
//! - **`handler`**: The downstream consumer seam (push-style, no reply)
//!
//! # Connection state machine
//!
//! Each connection cycles through the states below, one request per cycle:
//!
//! ```text
//!        ┌──────────────────────┐
//!        │        Idle          │ ← At-EOF pre-check
//!        └──────┬───────────────┘
//!               │ bytes available            │ stream exhausted
//!               ▼                            ▼ Closed (clean)
//!        ┌──────────────────────┐
//!        │  ReadingRequestLine  │
//!        └──────┬───────────────┘
//!               ▼
//!        ┌──────────────────────┐
//!        │    ReadingHeaders    │ ← until bare-CRLF line (or stream close)
//!        └──────┬───────────────┘
//!               ▼
//!        ┌──────────────────────┐
//!        │  ReadingBody (opt.)  │ ← exactly Content-Length bytes
//!        └──────┬───────────────┘
//!               ▼
//!        ┌──────────────────────┐
//!        │       Dispatch       │ → Idle (next cycle)
//!        └──────────────────────┘
//!
//! Any framing violation → Closed (aborted); the stream is closed exactly
//! once on every exit path and no partial record is ever dispatched.
//! ```

pub mod connection;
pub mod handler;
pub mod parser;
pub mod request;
pub mod stream;
