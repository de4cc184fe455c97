//! Shared utilities for integration tests.
//!
//! - A small music-catalogue resource set: `Album` (root, every capability),
//!   `Track` (child of `Album`, list/show), `Settings` (root singleton,
//!   show/update)
//! - A programmable HTTP backend on a raw TCP listener

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use pathwise::error::DecodeError;
use pathwise::routing::{decode_json, Identifiable, Listable, Resource, Root, Singleton, Under};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Album {
    pub id: u32,
    #[serde(default)]
    pub title: String,
}

impl Resource for Album {
    const PATH: &'static str = "albums";
    type Mount = Root;
    type Singular = Album;

    fn decode_singular(bytes: &[u8]) -> Result<Album, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for Album {
    type Collection = Vec<Album>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<Album>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for Album {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

pathwise::restful!(Album);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Track {
    pub id: u32,
    pub name: String,
}

impl Resource for Track {
    const PATH: &'static str = "tracks";
    type Mount = Under<Album>;
    type Singular = Track;

    fn decode_singular(bytes: &[u8]) -> Result<Track, DecodeError> {
        decode_json(bytes)
    }
}

impl Listable for Track {
    type Collection = Vec<Track>;

    fn decode_collection(bytes: &[u8]) -> Result<Vec<Track>, DecodeError> {
        decode_json(bytes)
    }
}

impl Identifiable for Track {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

pathwise::capabilities!(Track: Showable);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    pub theme: String,
}

impl Resource for Settings {
    const PATH: &'static str = "settings";
    type Mount = Root;
    type Singular = Settings;

    fn decode_singular(bytes: &[u8]) -> Result<Settings, DecodeError> {
        let settings: Settings = decode_json(bytes)?;
        if settings.theme.is_empty() {
            return Err(DecodeError::invalid("theme must not be empty"));
        }
        Ok(settings)
    }
}

impl Singleton for Settings {}

pathwise::capabilities!(Settings: Showable, Patchable);

/// What the backend saw for one request.
#[derive(Debug, Clone, Default)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including any query string.
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

async fn read_request<S>(socket: &mut S) -> std::io::Result<RecordedRequest>
where
    S: tokio::io::AsyncRead + Unpin,
{
    let mut reader = BufReader::new(socket);
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    let mut parts = line.split_whitespace();
    let mut request = RecordedRequest {
        method: parts.next().unwrap_or_default().to_string(),
        target: parts.next().unwrap_or_default().to_string(),
        ..RecordedRequest::default()
    };

    loop {
        line.clear();
        reader.read_line(&mut line).await?;
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            request.headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = request
        .header("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).await?;
    request.body = String::from_utf8_lossy(&body).into_owned();
    Ok(request)
}

/// Start a programmable backend on an ephemeral port and return its address.
///
/// `f` sees each request and answers with `(status, body)`.
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(RecordedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            tokio::spawn(async move {
                let Ok(request) = read_request(&mut socket).await else {
                    return;
                };
                let (status, body) = f(request).await;
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nETag: \"v1\"\r\nConnection: close\r\n\r\n{}",
                    status,
                    status_text(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                tokio::time::sleep(Duration::from_millis(10)).await;
            });
        }
    });

    addr
}

/// Start a backend that always answers `status` with `body`.
pub async fn start_mock_backend(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}
