use crate::codec::{BodyExtent, DEFAULT_USER_AGENT};
use crate::connection::DEFAULT_READ_CHUNK_SIZE;

/// Settings fixed for the lifetime of an [`HttpClient`](super::HttpClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    verbose: bool,
    user_agent: String,
    body_extent: BodyExtent,
    read_chunk_size: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            body_extent: BodyExtent::FirstLine,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Whether every request and response is logged in full.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn body_extent(&self) -> BodyExtent {
        self.body_extent
    }

    pub fn read_chunk_size(&self) -> usize {
        self.read_chunk_size
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    fn new() -> Self {
        Self { config: ClientConfig::default() }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn body_extent(mut self, body_extent: BodyExtent) -> Self {
        self.config.body_extent = body_extent;
        self
    }

    /// Size of each socket read; zero is raised to one.
    pub fn read_chunk_size(mut self, read_chunk_size: usize) -> Self {
        self.config.read_chunk_size = read_chunk_size.max(1);
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::builder().build();

        assert_eq!(config, ClientConfig::default());
        assert!(!config.verbose());
        assert_eq!(config.user_agent(), "curl/7.71.1");
        assert_eq!(config.body_extent(), BodyExtent::FirstLine);
        assert_eq!(config.read_chunk_size(), 1024);
    }

    #[test]
    fn overrides() {
        let config = ClientConfig::builder()
            .verbose(true)
            .user_agent("probe/1.0")
            .body_extent(BodyExtent::Remainder)
            .read_chunk_size(0)
            .build();

        assert!(config.verbose());
        assert_eq!(config.user_agent(), "probe/1.0");
        assert_eq!(config.body_extent(), BodyExtent::Remainder);
        assert_eq!(config.read_chunk_size(), 1);
    }
}
