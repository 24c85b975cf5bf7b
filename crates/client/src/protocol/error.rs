use std::io;
use thiserror::Error;

/// Everything that can stop a single request/response exchange.
///
/// The facade never lets these escape: each one is logged and folded into a
/// default [`Response`](super::Response).
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("malformed url: {source}")]
    Url {
        #[from]
        source: UrlError,
    },

    #[error("request encode error: {source}")]
    Encode {
        #[from]
        source: EncodeError,
    },

    #[error("problem in connection to {host} on port {port}: {source}")]
    Connect { host: String, port: u16, source: io::Error },

    #[error("send error: {source}")]
    Send { source: io::Error },

    #[error("receive error: {source}")]
    Receive { source: io::Error },
}

impl ClientError {
    pub fn connect<S: ToString>(host: S, port: u16, source: io::Error) -> Self {
        Self::Connect { host: host.to_string(), port, source }
    }

    pub fn send<E: Into<io::Error>>(e: E) -> Self {
        Self::Send { source: e.into() }
    }

    pub fn receive<E: Into<io::Error>>(e: E) -> Self {
        Self::Receive { source: e.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("invalid url {url:?}: {reason}")]
    Invalid { url: String, reason: String },

    #[error("unsupported scheme {scheme:?}, expected http or https")]
    UnsupportedScheme { scheme: Option<String> },

    #[error("url {url:?} has no host")]
    MissingHost { url: String },
}

impl UrlError {
    pub fn invalid<U: ToString, S: ToString>(url: U, reason: S) -> Self {
        Self::Invalid { url: url.to_string(), reason: reason.to_string() }
    }

    pub fn unsupported_scheme(scheme: Option<&str>) -> Self {
        Self::UnsupportedScheme { scheme: scheme.map(ToString::to_string) }
    }

    pub fn missing_host<U: ToString>(url: U) -> Self {
        Self::MissingHost { url: url.to_string() }
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("invalid form arguments: {source}")]
    Form {
        #[from]
        source: serde_urlencoded::ser::Error,
    },
}
