//! Shared utilities for integration testing.

#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    http::{header::SET_COOKIE, HeaderMap, Method, Request, StatusCode, Uri},
    response::{AppendHeaders, IntoResponse, Response},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};

use reliable_proxy::{HttpServer, ProxyConfig, RegionState, Shutdown};

/// What the echo upstream saw.
#[derive(Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

/// Start an upstream that echoes the request back as JSON.
///
/// `/teapot` answers 418 with two `set-cookie` headers, `/stream` answers
/// with a chunked body.
pub async fn start_echo_upstream() -> SocketAddr {
    let app = Router::new().fallback(echo_handler);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Start the echo upstream behind HTTPS with a freshly generated
/// self-signed certificate for `localhost`.
pub async fn start_tls_echo_upstream() -> SocketAddr {
    let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    let cert = certified.cert.der().clone();
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(certified.key_pair.serialize_der()));

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let mut server_config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .unwrap()
        .with_no_client_auth()
        .with_single_cert(vec![cert], key)
        .unwrap();
    server_config.alpn_protocols = vec![b"http/1.1".to_vec()];
    let tls = axum_server::tls_rustls::RustlsConfig::from_config(Arc::new(server_config));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo_handler);

    tokio::spawn(async move {
        let _ = axum_server::from_tcp_rustls(listener, tls)
            .serve(app.into_make_service())
            .await;
    });
    addr
}

async fn echo_handler(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    match uri.path() {
        "/teapot" => (
            StatusCode::IM_A_TEAPOT,
            AppendHeaders([(SET_COOKIE, "a=1"), (SET_COOKIE, "b=2")]),
            "short and stout",
        )
            .into_response(),
        "/stream" => {
            let chunks = (0..5).map(|i| Ok::<_, std::io::Error>(Bytes::from(format!("chunk-{i};"))));
            Body::from_stream(futures_util::stream::iter(chunks)).into_response()
        }
        _ => {
            let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for (name, value) in &headers {
                seen.entry(name.as_str().to_string())
                    .or_default()
                    .push(value.to_str().unwrap_or_default().to_string());
            }
            Json(Echo {
                method: method.to_string(),
                path: uri.path().to_string(),
                query: uri.query().map(str::to_string),
                headers: seen,
                body: String::from_utf8_lossy(&body).into_owned(),
            })
            .into_response()
        }
    }
}

/// Start a raw TCP backend answering every request with `status` and `body`
/// after `delay`. Returns the address and a hit counter.
pub async fn start_programmable_backend(
    status: u16,
    body: &'static str,
    delay: Duration,
) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        read_request_head(&mut socket).await;
                        counter.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(delay).await;

                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, hits)
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

/// Start the proxy on an ephemeral port.
pub async fn start_proxy(config: ProxyConfig, region: RegionState) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, region);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that never reuses connections and ignores system proxies.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

pub fn request_with_target(method: Method, uri: &str, target: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("target-api-url", target)
        .body(Body::empty())
        .unwrap()
}
