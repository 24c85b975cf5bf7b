//! A micro HTTP/1.1 client written directly against raw stream sockets
//!
//! This crate builds request bytes by hand, sends them over a plain TCP
//! connection, reads until the server closes the connection and parses what
//! came back into a status code, a header map and a body. No HTTP library
//! sits in between; the point is to show what actually travels on the wire.
//!
//! # Features
//!
//! - GET and POST requests to the host and port named by an `http` URL
//! - `application/x-www-form-urlencoded` POST bodies
//! - A forgiving response parser: malformed input degrades to a default
//!   response instead of an error
//! - One blocking connection per request, always closed afterwards
//!
//! # Example
//!
//! ```no_run
//! use micro_client::{ClientConfig, HttpClient};
//!
//! let client = HttpClient::with_config(ClientConfig::builder().verbose(true).build());
//!
//! let response = client.get("http://127.0.0.1:8080/index.html", None);
//! println!("{} {}", response.status_code(), response.body());
//!
//! let response = client.post("http://127.0.0.1:8080/form", Some(&[("name", "micro client")]));
//! println!("{response}");
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: URL decomposition, the [`Response`] value and error types
//! - [`codec`]: request encoding and response decoding
//! - [`connection`]: the blocking stream transport for one exchange
//! - [`client`]: the [`HttpClient`] facade tying them together
//!
//! # Error Handling
//!
//! The public request methods never fail. A malformed URL, a refused
//! connection or an I/O error is logged through `tracing` at warn level and
//! answered with [`Response::default`]: status 500, no headers, empty body.
//!
//! # Limitations
//!
//! - No TLS; `https` URLs are spoken to in plain text
//! - No keep-alive, chunked transfer encoding, redirects, cookies or compression
//! - No read timeout
//! - Only the first line of the body is kept unless
//!   [`BodyExtent::Remainder`](codec::BodyExtent::Remainder) is configured

pub mod client;
pub mod codec;
pub mod connection;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use client::{ClientConfig, HttpClient};
pub use protocol::Response;
