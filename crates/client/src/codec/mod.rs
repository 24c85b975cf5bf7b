//! Wire codec for HTTP/1.1 requests and responses.
//!
//! - Request side: [`RequestEncoder`] and the [`build_get`] / [`build_post`]
//!   shortcuts produce the exact bytes handed to the transport
//! - Response side: [`parse`] / [`parse_with`] turn everything received until
//!   the peer closed the connection into a [`Response`](crate::protocol::Response)
//!
//! # Example
//!
//! ```
//! use micro_client::codec::{build_get, parse};
//!
//! let request = build_get("example.com", 80, "/index.html");
//! assert!(request.starts_with(b"GET /index.html HTTP/1.1\r\n"));
//!
//! let response = parse("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
//! assert_eq!(response.status_code(), 200);
//! assert_eq!(response.body(), "hello");
//! ```
//!
//! Neither side keeps connections alive, understands chunked transfer encoding
//! or decompresses bodies.

mod request_encoder;
mod response_decoder;

pub use request_encoder::DEFAULT_USER_AGENT;
pub use request_encoder::FormArgs;
pub use request_encoder::RequestEncoder;
pub use request_encoder::build_get;
pub use request_encoder::build_post;

pub use response_decoder::BodyExtent;
pub use response_decoder::parse;
pub use response_decoder::parse_with;
