use bytes::BytesMut;
use http::Method;
use tracing::{info, warn};

use crate::client::ClientConfig;
use crate::codec::{FormArgs, RequestEncoder, parse_with};
use crate::connection::{Connect, Exchange, TcpConnector};
use crate::protocol::{ClientError, Response, decompose};

/// Port used when the URL does not name one.
pub const DEFAULT_HTTP_PORT: u16 = 80;

/// A blocking HTTP/1.1 client opening one connection per request.
///
/// The client keeps no per-request state, so one value can serve any number
/// of sequential calls. It adds no locking of its own.
///
/// # Example
///
/// ```no_run
/// use micro_client::HttpClient;
///
/// let client = HttpClient::new();
/// let response = client.post("http://127.0.0.1:8080/form", Some(&[("a", "1"), ("b", "2 3")]));
/// println!("{response}");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient<C = TcpConnector> {
    connector: C,
    config: ClientConfig,
    encoder: RequestEncoder,
}

impl HttpClient<TcpConnector> {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_connector(TcpConnector, config)
    }
}

impl Default for HttpClient<TcpConnector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HttpClient<C>
where
    C: Connect,
{
    pub fn with_connector(connector: C, config: ClientConfig) -> Self {
        let encoder = RequestEncoder::new(config.user_agent());
        Self { connector, config, encoder }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a GET. `args` are accepted for symmetry with [`HttpClient::post`] and not sent.
    pub fn get(&self, url: &str, args: Option<FormArgs<'_>>) -> Response {
        self.execute(&Method::GET, url, args)
    }

    /// Issues a POST with `args` as a form-encoded body.
    pub fn post(&self, url: &str, args: Option<FormArgs<'_>>) -> Response {
        self.execute(&Method::POST, url, args)
    }

    /// Issues a POST when `method` is exactly `POST`, a GET otherwise.
    pub fn command(&self, url: &str, method: &str, args: Option<FormArgs<'_>>) -> Response {
        if method == Method::POST.as_str() { self.post(url, args) } else { self.get(url, args) }
    }

    fn execute(&self, method: &Method, url: &str, args: Option<FormArgs<'_>>) -> Response {
        match self.try_execute(method, url, args) {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, url, cause = %e, "request failed, answering with default response");
                Response::default()
            }
        }
    }

    fn try_execute(&self, method: &Method, url: &str, args: Option<FormArgs<'_>>) -> Result<Response, ClientError> {
        let url = decompose(url)?;
        let port = url.port().unwrap_or(DEFAULT_HTTP_PORT);

        let request: BytesMut = if *method == Method::POST {
            self.encoder.encode_post(url.host(), port, url.path(), args)?
        } else {
            self.encoder.encode_get(url.host(), port, url.path())
        };

        let mut exchange = Exchange::open(&self.connector, url.host(), port, self.config.read_chunk_size())?;

        if self.config.verbose() {
            info!(%method, "requesting...\n{}", String::from_utf8_lossy(&request));
        }

        exchange.send_all(&request)?;
        let raw = exchange.receive_all()?;
        exchange.close();

        if self.config.verbose() {
            info!(%method, "response:\n{raw}");
        }

        Ok(parse_with(&raw, self.config.body_extent()))
    }
}
