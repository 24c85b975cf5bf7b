//! The client facade.
//!
//! [`HttpClient`] ties the pieces together for one call:
//!
//! 1. decompose the URL, a malformed URL ends the call
//! 2. default the port to [`DEFAULT_HTTP_PORT`]
//! 3. encode the request
//! 4. connect, send, receive until the peer closes, close
//! 5. decode the received text
//!
//! Any failure along the way is logged as a warning and answered with
//! [`Response::default`](crate::protocol::Response::default), status 500 and
//! an empty body. Nothing is retried.

mod config;
mod http_client;

pub use config::ClientConfig;
pub use config::ClientConfigBuilder;
pub use http_client::DEFAULT_HTTP_PORT;
pub use http_client::HttpClient;
