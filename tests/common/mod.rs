//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// One request captured by the recording store.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Start a mock health backend whose status code can be flipped at runtime.
#[allow(dead_code)]
pub async fn start_mock_backend() -> (SocketAddr, Arc<AtomicU16>) {
    let status = Arc::new(AtomicU16::new(200));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let current = status.clone();
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let code = current.load(Ordering::SeqCst);
                    tokio::spawn(async move {
                        let mut buf = [0u8; 1024];
                        let _ = socket.read(&mut buf).await;
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                            code,
                            reason_phrase(code)
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, status)
}

/// Start a mock store that records every request and answers with whatever
/// status and extra headers the responder returns.
pub async fn start_recording_store<F>(respond: F) -> (SocketAddr, Recorded)
where
    F: Fn(&RecordedRequest) -> (u16, Vec<(&'static str, String)>) + Send + Sync + 'static,
{
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let log = recorded.clone();
    let respond = Arc::new(respond);
    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let log = log.clone();
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        let request = match read_request(&mut socket).await {
                            Some(r) => r,
                            None => return,
                        };
                        let (status, headers) = respond(&request);
                        log.lock().unwrap().push(request);

                        let mut response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n",
                            status,
                            reason_phrase(status)
                        );
                        for (name, value) in headers {
                            response.push_str(&format!("{name}: {value}\r\n"));
                        }
                        response.push_str("\r\n");
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, recorded)
}

/// Poll `check` until it passes or the timeout elapses.
#[allow(dead_code)]
pub async fn wait_for<F>(timeout: Duration, check: F)
where
    F: Fn() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        if check() {
            return;
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met within {timeout:?}"
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

/// Read one full HTTP request, honoring Content-Length for the body.
async fn read_request(socket: &mut TcpStream) -> Option<RecordedRequest> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(pos) = find_header_end(&raw) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let content_length = header_value(&head, "content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    while raw.len() < header_end + 4 + content_length {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
    }
    let body = String::from_utf8_lossy(&raw[header_end + 4..]).to_string();

    let mut request_line = head.lines().next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    Some(RecordedRequest {
        method,
        path,
        content_type: header_value(&head, "content-type"),
        body,
    })
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|w| w == b"\r\n\r\n")
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        if key.trim().eq_ignore_ascii_case(name) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "OK",
    }
}
