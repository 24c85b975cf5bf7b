//! Response decoder turning the full received text into a [`Response`].
//!
//! Decoding never fails. Input that does not look like an HTTP/1.x response
//! yields [`Response::default`], and header lines that are not `name: value`
//! pairs are skipped. Both cases are only reported at debug level.
//!
//! # Line handling
//!
//! The text is split on `\n` only. Carriage returns stay attached to their
//! line until the header scan trims them away, so a body line of a CRLF
//! response keeps its trailing `\r` unless it is the last line.
//!
//! # Body
//!
//! With [`BodyExtent::FirstLine`] the body is the single line following the
//! blank line that ends the headers, everything after it is dropped. This is
//! what the client has always reported and stays the default.
//! [`BodyExtent::Remainder`] keeps every line after the blank line instead.

use std::collections::BTreeMap;

use tracing::debug;

use crate::protocol::Response;

const HTTP_10_PREFIX: &str = "HTTP/1.0 ";
const HTTP_11_PREFIX: &str = "HTTP/1.1 ";

/// How much of the text after the header block becomes the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyExtent {
    /// Only the first line after the blank line.
    #[default]
    FirstLine,
    /// Everything after the blank line.
    Remainder,
}

/// Decodes `raw` keeping only the first body line.
pub fn parse(raw: &str) -> Response {
    parse_with(raw, BodyExtent::FirstLine)
}

/// Decodes `raw`, taking as much body as `extent` asks for.
pub fn parse_with(raw: &str, extent: BodyExtent) -> Response {
    let lines: Vec<&str> = raw.split('\n').collect();

    let Some(status_code) = lines.first().and_then(|line| parse_status_line(line)) else {
        return Response::default();
    };

    let (headers, separator) = parse_headers(&lines[1..]);

    let body = match separator {
        // `separator` is relative to the header lines, which start at index 1
        Some(index) => {
            let body_lines = &lines[index + 2..];
            match extent {
                BodyExtent::FirstLine => body_lines.first().copied().unwrap_or_default().to_string(),
                BodyExtent::Remainder => body_lines.join("\n"),
            }
        }
        None => String::new(),
    };

    Response::new(status_code, headers, body)
}

/// Extracts the status code from `HTTP/1.x <digits> <reason>`.
fn parse_status_line(line: &str) -> Option<u16> {
    if !line.starts_with(HTTP_10_PREFIX) && !line.starts_with(HTTP_11_PREFIX) {
        debug!(status_line = line, "bad first line in response, expected HTTP/1.0 or HTTP/1.1");
        return None;
    }

    let rest = &line[HTTP_11_PREFIX.len()..];
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let (digits, reason) = rest.split_at(digits_end);

    if digits.is_empty() || !reason.starts_with(' ') {
        debug!(status_line = line, "bad status line in response");
        return None;
    }

    match digits.parse::<u16>() {
        Ok(code) => Some(code),
        Err(e) => {
            debug!(status_line = line, cause = %e, "status code out of range");
            None
        }
    }
}

/// Collects headers up to the first blank line.
///
/// Returns the headers and the index of the blank line within `lines`, or
/// `None` if the text ended first.
fn parse_headers(lines: &[&str]) -> (BTreeMap<String, String>, Option<usize>) {
    let mut headers = BTreeMap::new();

    for (index, line) in lines.iter().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            return (headers, Some(index));
        }

        match parse_header_line(line) {
            Some((name, value)) => {
                headers.insert(name, value);
            }
            None => debug!(header_line = line, "bad header line, skipped"),
        }
    }

    (headers, None)
}

/// Splits `name: value`. Colons after the first one are removed from the value.
fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let value = value.replace(':', "");

    Some((name.trim().to_string(), value.trim().to_string()))
}
