use std::io::{ErrorKind, Read, Write};

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::connection::Connect;
use crate::protocol::ClientError;

/// Size of each read while draining the response.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

/// A stream scoped to one request/response exchange.
///
/// The stream is released when the exchange is closed or dropped, so it does
/// not outlive the call that opened it whichever way that call ends.
#[derive(Debug)]
pub struct Exchange<S> {
    stream: S,
    read_chunk_size: usize,
}

impl<S> Exchange<S>
where
    S: Read + Write,
{
    /// Connects through `connector` and wraps the new stream.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Connect`] if the connection attempt fails.
    pub fn open<C>(connector: &C, host: &str, port: u16, read_chunk_size: usize) -> Result<Self, ClientError>
    where
        C: Connect<Stream = S>,
    {
        let stream = connector.connect(host, port).map_err(|e| ClientError::connect(host, port, e))?;
        Ok(Self::new(stream, read_chunk_size))
    }

    pub fn new(stream: S, read_chunk_size: usize) -> Self {
        Self { stream, read_chunk_size: read_chunk_size.max(1) }
    }

    /// Writes all of `bytes` and flushes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Send`] on any write error.
    pub fn send_all(&mut self, bytes: &[u8]) -> Result<(), ClientError> {
        self.stream.write_all(bytes).map_err(ClientError::send)?;
        self.stream.flush().map_err(ClientError::send)?;
        trace!(size = bytes.len(), "sent request");
        Ok(())
    }

    /// Reads until the peer closes its side, then decodes the bytes as UTF-8.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Receive`] on any read error other than an interrupt.
    pub fn receive_all(&mut self) -> Result<String, ClientError> {
        let mut received = BytesMut::with_capacity(self.read_chunk_size);
        let mut chunk = vec![0u8; self.read_chunk_size];

        loop {
            match self.stream.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => received.put_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(ClientError::receive(e)),
            }
        }

        trace!(size = received.len(), "received until end of stream");
        Ok(String::from_utf8_lossy(&received).into_owned())
    }

    /// Ends the exchange and releases the stream.
    pub fn close(self) {
        drop(self.stream);
        trace!("exchange closed");
    }
}
