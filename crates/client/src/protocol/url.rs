//! URL decomposition into the pieces a request needs.
//!
//! The URL is parsed with the standard URI grammar of [`http::Uri`]. Only the
//! `http` and `https` schemes are accepted; anything else is a [`UrlError`]
//! rather than a half-filled value.
//!
//! The decomposer does not resolve names and does not apply a default port:
//! [`ParsedUrl::port`] is `None` when the URL carries no explicit port and the
//! caller decides what that means.

use std::fmt;

use http::Uri;
use http::uri::{Authority, PathAndQuery};

use crate::ensure;
use crate::protocol::UrlError;

/// Schemes the client is willing to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A URL split into scheme, host, optional port and path.
///
/// The path keeps the query string exactly as it appeared in the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    path: String,
}

impl ParsedUrl {
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The host as written in the URL, hostname or literal address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The explicit port, `None` when the URL has none.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Splits `url` into a [`ParsedUrl`].
///
/// # Errors
///
/// - [`UrlError::Invalid`] if `url` is not a valid URI or its port is not a number in range
/// - [`UrlError::UnsupportedScheme`] if the scheme is missing or is neither `http` nor `https`
/// - [`UrlError::MissingHost`] if there is no host
pub fn decompose(url: &str) -> Result<ParsedUrl, UrlError> {
    let uri: Uri = url.parse().map_err(|e| UrlError::invalid(url, e))?;

    let scheme = match uri.scheme_str() {
        Some(s) if s.eq_ignore_ascii_case("http") => Scheme::Http,
        Some(s) if s.eq_ignore_ascii_case("https") => Scheme::Https,
        other => return Err(UrlError::unsupported_scheme(other)),
    };

    let host = uri.host().unwrap_or_default();
    ensure!(!host.is_empty(), UrlError::missing_host(url));

    let port = match uri.authority() {
        Some(authority) => explicit_port(url, authority, host)?,
        None => None,
    };

    let path = uri.path_and_query().map(PathAndQuery::as_str).unwrap_or_default();

    Ok(ParsedUrl { scheme, host: host.to_string(), port, path: path.to_string() })
}

/// Reads the port that follows `host` in the authority, if one is written.
///
/// `Authority::port` silently drops ports that do not fit a `u16`, which would
/// send the request to the default port instead, so the digits are checked here.
fn explicit_port(url: &str, authority: &Authority, host: &str) -> Result<Option<u16>, UrlError> {
    let host_port = authority.as_str().rsplit_once('@').map_or(authority.as_str(), |(_, host_port)| host_port);

    let port = host_port.strip_prefix(host).and_then(|rest| rest.strip_prefix(':')).filter(|port| !port.is_empty());

    match port {
        Some(port) => port.parse::<u16>().map(Some).map_err(|e| UrlError::invalid(url, format!("bad port {port:?}: {e}"))),
        None => Ok(None),
    }
}
