//! Framewire - HTTP/1.1 request framing server
//!
//! Core library for the per-connection framing loop and its collaborators.

pub mod config;
pub mod http;
pub mod server;
