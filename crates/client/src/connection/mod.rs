//! Byte-stream transport for one request/response exchange.
//!
//! The transport owns no HTTP knowledge. A [`Connect`] implementation opens a
//! blocking stream to `(host, port)`; an [`Exchange`] wraps that stream for
//! exactly one request and is closed afterwards, explicitly or on drop.
//!
//! Reads have no timeout: a peer that never closes the connection blocks the
//! caller forever.

mod exchange;

pub use exchange::DEFAULT_READ_CHUNK_SIZE;
pub use exchange::Exchange;

use std::io;
use std::io::{Read, Write};
use std::net::TcpStream;

use tracing::trace;

/// Opens streams for the client.
///
/// The seam exists so the client can be driven over anything that reads and
/// writes bytes; [`TcpConnector`] is the only production implementation.
pub trait Connect {
    type Stream: Read + Write;

    /// Makes a single connection attempt.
    ///
    /// # Errors
    ///
    /// Returns the I/O error of the failed attempt.
    fn connect(&self, host: &str, port: u16) -> io::Result<Self::Stream>;
}

/// Connects with a plain [`TcpStream`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

impl Connect for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, host: &str, port: u16) -> io::Result<TcpStream> {
        // IPv6 literals arrive bracketed, as written in the URL
        let host = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(host);
        let stream = TcpStream::connect((host, port))?;
        trace!(host, port, "connected");
        Ok(stream)
    }
}
