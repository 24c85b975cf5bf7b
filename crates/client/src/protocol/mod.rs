//! Protocol level values shared by the codec, the transport and the client.
//!
//! - [`url`]: [`ParsedUrl`] and the [`decompose`] function
//! - [`Response`]: the parsed result handed back to callers
//! - error types: [`ClientError`], [`UrlError`], [`EncodeError`]

pub mod url;
pub use url::ParsedUrl;
pub use url::Scheme;
pub use url::decompose;

mod response;
pub use response::DEFAULT_STATUS_CODE;
pub use response::Response;

mod error;
pub use error::ClientError;
pub use error::EncodeError;
pub use error::UrlError;
