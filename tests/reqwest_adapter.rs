//! The reqwest adapter against a real HTTP listener.

mod common;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use common::{start_mock_backend, start_programmable_backend, Album, RecordedRequest, Settings};
use pathwise::adapter::ReqwestAdapter;
use pathwise::config::ServiceConfig;
use pathwise::prelude::*;
use pathwise::resilience::RetryPolicy;
use url::Url;

fn fast_retries() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        base_delay_ms: 5,
        max_delay_ms: 20,
    }
}

fn service_for(addr: std::net::SocketAddr) -> Service<ReqwestAdapter> {
    let adapter = ReqwestAdapter::new(None).unwrap().with_retry_policy(fast_retries());
    Service::builder(adapter)
        .host(&format!("http://{addr}/api"))
        .unwrap()
        .build()
}

#[tokio::test]
async fn test_success_decodes_and_keeps_headers() {
    let addr = start_mock_backend(200, r#"[{"id": 1, "title": "Blue"}]"#).await;
    let service = service_for(addr);

    let response = service.send(Album::list(), Options::default()).await;
    assert_eq!(response.payload().unwrap()[0].title, "Blue");
    assert_eq!(response.headers().get("etag"), Some("\"v1\""));
}

#[tokio::test]
async fn test_request_carries_merged_options() {
    let seen = Arc::new(Mutex::new(None::<RecordedRequest>));
    let s = seen.clone();
    let addr = start_programmable_backend(move |request| {
        let s = s.clone();
        async move {
            *s.lock().unwrap() = Some(request);
            (201, r#"{"id": 9, "title": "New"}"#.to_string())
        }
    })
    .await;

    let service = service_for(addr);
    let options = Options::new()
        .header(Header::BearerAuth("token".into()))
        .query_param("notify", "true")
        .body(r#"{"title":"New"}"#);
    let response = service.send(Album::create(), options).await;
    assert_eq!(response.payload().map(|a| a.id), Some(9));

    let request = seen.lock().unwrap().clone().unwrap();
    assert_eq!(request.method, "POST");
    assert_eq!(request.target, "/api/albums?notify=true");
    assert_eq!(request.header("authorization"), Some("Bearer token"));
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert!(request.header("x-request-id").is_some());
    assert_eq!(request.body, r#"{"title":"New"}"#);
}

#[tokio::test]
async fn test_no_content_is_empty() {
    let addr = start_mock_backend(204, "").await;
    let service = service_for(addr);

    let response = service.send(Album::delete(1), Options::default()).await;
    assert!(response.is_empty());
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let addr = start_mock_backend(404, "no such album").await;
    let service = service_for(addr);

    let response = service.send(Album::show(5), Options::default()).await;
    match response.error() {
        Some(Error::Transport(TransportError::Status { status, body })) => {
            assert_eq!(*status, 404);
            assert_eq!(body, "no such album");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_idempotent_request_retries_on_503() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = start_programmable_backend(move |_| {
        let c = c.clone();
        async move {
            if c.fetch_add(1, Ordering::SeqCst) < 2 {
                (503, "busy".to_string())
            } else {
                (200, r#"{"theme": "dark"}"#.to_string())
            }
        }
    })
    .await;

    let service = service_for(addr);
    let response = service.send(Settings::show(), Options::default()).await;
    assert_eq!(response.payload().map(|s| s.theme.as_str()), Some("dark"));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_non_idempotent_request_is_not_retried() {
    let calls = Arc::new(AtomicU32::new(0));
    let c = calls.clone();
    let addr = start_programmable_backend(move |_| {
        let c = c.clone();
        async move {
            c.fetch_add(1, Ordering::SeqCst);
            (503, "busy".to_string())
        }
    })
    .await;

    let service = service_for(addr);
    let response = service.send(Settings::update(), Options::new().body("{}")).await;
    assert_eq!(response.error().and_then(Error::status), Some(503));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Bind then drop to find a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(addr);
    let response = service.send(Album::list(), Options::default()).await;
    assert!(matches!(
        response.error(),
        Some(Error::Transport(TransportError::Http(_)))
    ));
}

#[tokio::test]
async fn test_relative_targets_use_adapter_base_url() {
    let addr = start_mock_backend(200, r#"{"theme": "light"}"#).await;

    let mut config = ServiceConfig::default();
    config.service.host = Some(format!("http://{addr}"));
    let adapter = ReqwestAdapter::from_config(&config).unwrap();
    assert_eq!(adapter.base_url(), Some(&Url::parse(&format!("http://{addr}/")).unwrap()));

    // No host on the service: the target stays relative until the adapter resolves it
    let service = Service::new(adapter);
    let response = service.send(Settings::show(), Options::default()).await;
    assert_eq!(response.payload().map(|s| s.theme.as_str()), Some("light"));
}
