//! Request encoder producing the exact bytes of a GET or POST request.
//!
//! Every line ends with CRLF and the headers always come in the same order:
//!
//! ```text
//! GET /path HTTP/1.1
//! Host: example.com:80
//! User-Agent: curl/7.71.1
//! Accept: */*
//!
//! ```
//!
//! POST requests add `Content-Length` and `Content-Type` and are followed by the
//! `application/x-www-form-urlencoded` payload, if there is one.

use bytes::{BufMut, BytesMut};
use http::Method;
use tracing::trace;

use crate::protocol::EncodeError;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "curl/7.71.1";

/// Ordered form fields, encoded in the order given.
pub type FormArgs<'a> = &'a [(&'a str, &'a str)];

const INIT_REQUEST_SIZE: usize = 256;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Builds request bytes. Holds nothing but the User-Agent it advertises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEncoder {
    user_agent: String,
}

impl Default for RequestEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl RequestEncoder {
    pub fn new<S: Into<String>>(user_agent: S) -> Self {
        Self { user_agent: user_agent.into() }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Encodes a GET request with no body. An empty `path` is sent as `/`.
    pub fn encode_get(&self, host: &str, port: u16, path: &str) -> BytesMut {
        let mut dst = BytesMut::with_capacity(INIT_REQUEST_SIZE);
        self.encode_head(&Method::GET, host, port, path, &mut dst);
        dst.put_slice(b"\r\n");

        trace!(size = dst.len(), "encoded GET request");
        dst
    }

    /// Encodes a POST request carrying `form_args` as a form-encoded body.
    ///
    /// Without arguments `Content-Length` is 0 and nothing follows the blank line.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Form`] if the arguments cannot be form-encoded.
    pub fn encode_post(
        &self,
        host: &str,
        port: u16,
        path: &str,
        form_args: Option<FormArgs<'_>>,
    ) -> Result<BytesMut, EncodeError> {
        let payload = match form_args {
            Some(args) => serde_urlencoded::to_string(args)?,
            None => String::new(),
        };

        let mut dst = BytesMut::with_capacity(INIT_REQUEST_SIZE + payload.len());
        self.encode_head(&Method::POST, host, port, path, &mut dst);
        put_header(&mut dst, "Content-Length", &payload.len().to_string());
        put_header(&mut dst, "Content-Type", FORM_CONTENT_TYPE);
        dst.put_slice(b"\r\n");
        dst.put_slice(payload.as_bytes());

        trace!(size = dst.len(), payload_size = payload.len(), "encoded POST request");
        Ok(dst)
    }

    /// Writes the request line and the headers common to every method.
    fn encode_head(&self, method: &Method, host: &str, port: u16, path: &str, dst: &mut BytesMut) {
        let path = if path.is_empty() { "/" } else { path };

        dst.put_slice(method.as_str().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(path.as_bytes());
        dst.put_slice(b" HTTP/1.1\r\n");

        put_header(dst, "Host", &format!("{host}:{port}"));
        put_header(dst, "User-Agent", &self.user_agent);
        put_header(dst, "Accept", "*/*");
    }
}

fn put_header(dst: &mut BytesMut, name: &str, value: &str) {
    dst.put_slice(name.as_bytes());
    dst.put_slice(b": ");
    dst.put_slice(value.as_bytes());
    dst.put_slice(b"\r\n");
}

/// Encodes a GET request with the default User-Agent.
pub fn build_get(host: &str, port: u16, path: &str) -> BytesMut {
    RequestEncoder::default().encode_get(host, port, path)
}

/// Encodes a POST request with the default User-Agent.
///
/// # Errors
///
/// Returns [`EncodeError::Form`] if the arguments cannot be form-encoded.
pub fn build_post(host: &str, port: u16, path: &str, form_args: Option<FormArgs<'_>>) -> Result<BytesMut, EncodeError> {
    RequestEncoder::default().encode_post(host, port, path, form_args)
}
