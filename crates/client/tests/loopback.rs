use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use indoc::indoc;
use micro_client::codec::BodyExtent;
use micro_client::{ClientConfig, HttpClient, Response};

/// Accepts one connection, reads a full request, answers with `reply` and closes.
fn serve_once(reply: &'static str) -> (u16, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(reply.as_bytes()).unwrap();
        request
    });

    (port, handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut received = Vec::new();
    let mut buf = [0u8; 512];

    let head_end = loop {
        if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "client closed before finishing the request");
        received.extend_from_slice(&buf[..n]);
    };

    let head = String::from_utf8(received[..head_end].to_vec()).unwrap();
    let content_length = head
        .lines()
        .find_map(|line| line.strip_prefix("Content-Length: "))
        .map_or(0, |len| len.trim().parse::<usize>().unwrap());

    while received.len() < head_end + content_length {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "client closed before finishing the body");
        received.extend_from_slice(&buf[..n]);
    }

    String::from_utf8(received).unwrap()
}

const HELLO: &str = "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello";

#[test]
fn get_over_tcp() {
    let (port, server) = serve_once(HELLO);

    let response = HttpClient::new().get(&format!("http://127.0.0.1:{port}/greeting?lang=en"), None);

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.body(), "hello");

    let request = server.join().unwrap();
    assert_eq!(
        request,
        format!(
            "GET /greeting?lang=en HTTP/1.1\r\nHost: 127.0.0.1:{port}\r\nUser-Agent: curl/7.71.1\r\nAccept: */*\r\n\r\n"
        )
    );
}

#[test]
fn post_over_tcp() {
    let (port, server) = serve_once("HTTP/1.1 201 Created\r\nLocation: /items/7\r\nContent-Length: 0\r\n\r\n");

    let args = [("a", "1"), ("b", "2 3")];
    let response = HttpClient::new().post(&format!("http://127.0.0.1:{port}/items"), Some(&args));

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.header("Location"), Some("/items/7"));
    assert_eq!(response.body(), "");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /items HTTP/1.1\r\n"));
    assert!(request.contains("\r\nContent-Length: 9\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\n"));
    assert!(request.ends_with("\r\n\r\na=1&b=2+3"));
}

#[test]
fn command_over_tcp() {
    let (port, server) = serve_once(HELLO);

    let response = HttpClient::new().command(&format!("http://127.0.0.1:{port}/"), "POST", None);

    assert_eq!(response.status_code(), 200);
    let request = server.join().unwrap();
    assert!(request.starts_with("POST / HTTP/1.1\r\n"));
    assert!(request.ends_with("Content-Length: 0\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\n"));
}

#[test]
fn large_multi_line_body() {
    static REPLY: std::sync::LazyLock<String> = std::sync::LazyLock::new(|| {
        let mut reply = String::from("HTTP/1.0 200 OK\r\nServer: loopback\r\n\r\n");
        for i in 0..500 {
            reply.push_str(&format!("line {i}\r\n"));
        }
        reply
    });
    let reply: &'static str = REPLY.as_str();

    let (port, server) = serve_once(reply);
    let url = format!("http://127.0.0.1:{port}/");

    let client = HttpClient::with_config(ClientConfig::builder().body_extent(BodyExtent::Remainder).build());
    let response = client.get(&url, None);
    server.join().unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("Server"), Some("loopback"));
    assert!(response.body().starts_with("line 0\r\nline 1\r\n"));
    assert!(response.body().ends_with("line 499\r\n"));

    let (port, server) = serve_once(reply);
    let response = HttpClient::new().get(&format!("http://127.0.0.1:{port}/"), None);
    server.join().unwrap();

    assert_eq!(response.body(), "line 0\r");
}

#[test]
fn malformed_response_over_tcp() {
    let (port, server) = serve_once(indoc! {"
        <html>
        not http at all
        </html>
    "});

    let response = HttpClient::new().get(&format!("http://127.0.0.1:{port}/"), None);
    server.join().unwrap();

    assert_eq!(response, Response::default());
}

#[test]
fn connection_refused() {
    // bind then drop to get a port nobody listens on
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();

    let response = HttpClient::new().get(&format!("http://127.0.0.1:{port}/"), None);

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.body(), "");
    assert!(response.headers().is_empty());
}

#[test]
fn unsupported_scheme() {
    let response = HttpClient::new().get("gopher://127.0.0.1:70/", None);

    assert_eq!(response, Response::default());
}
