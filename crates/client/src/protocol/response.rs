//! The structured result of one request/response exchange.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Status code reported until a valid status line has been parsed, and for
/// every exchange that fails before one could be.
pub const DEFAULT_STATUS_CODE: u16 = 500;

/// A parsed HTTP response.
///
/// Header names keep the case they were received with. A name received twice
/// keeps the last value. The value is immutable once built; use the accessors
/// or [`Response::into_parts`] to take it apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "code")]
    status_code: u16,
    body: String,
    headers: BTreeMap<String, String>,
}

impl Response {
    pub fn new(status_code: u16, headers: BTreeMap<String, String>, body: String) -> Self {
        Self { status_code, body, headers }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Looks up a header by its exact, case-sensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_parts(self) -> (u16, BTreeMap<String, String>, String) {
        (self.status_code, self.headers, self.body)
    }
}

impl Default for Response {
    fn default() -> Self {
        Self { status_code: DEFAULT_STATUS_CODE, body: String::new(), headers: BTreeMap::new() }
    }
}

/// Renders the response as a JSON object: `{"code":200,"body":"..","headers":{..}}`.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_server_error() {
        let response = Response::default();

        assert_eq!(response.status_code(), 500);
        assert_eq!(response.body(), "");
        assert!(response.headers().is_empty());
    }

    #[test]
    fn display_as_json() {
        let headers = BTreeMap::from([
            ("Server".to_string(), "micro".to_string()),
            ("Content-Type".to_string(), "text/plain".to_string()),
        ]);
        let response = Response::new(200, headers, "hi \"there\"".to_string());

        assert_eq!(
            response.to_string(),
            r#"{"code":200,"body":"hi \"there\"","headers":{"Content-Type":"text/plain","Server":"micro"}}"#
        );
    }

    #[test]
    fn header_lookup_is_case_sensitive() {
        let headers = BTreeMap::from([("Content-Type".to_string(), "text/html".to_string())]);
        let response = Response::new(200, headers, String::new());

        assert_eq!(response.header("Content-Type"), Some("text/html"));
        assert_eq!(response.header("content-type"), None);
    }
}
