//! HTTP transport on reqwest.
//!
//! # Responsibilities
//! - Resolve relative targets against an optional base URL
//! - Apply merged headers, query and body to the outgoing request
//! - Retry idempotent requests on 502/503/504 and connection failures
//! - Map the HTTP outcome onto `AdapterResponse`
//!
//! # Design Decisions
//! - `perform` spawns onto the tokio runtime captured at construction and
//!   returns immediately
//! - 204 and empty bodies are `Empty`; other 2xx are `Success`; everything
//!   else is `TransportError::Status` with the body kept for diagnostics
//! - Every attempt carries the same `X-Request-ID`; a caller-supplied one wins

use std::time::Duration;

use reqwest::StatusCode;
use tokio::runtime::Handle;
use url::Url;
use uuid::Uuid;

use crate::adapter::Adapter;
use crate::config::{HttpConfig, ServiceConfig};
use crate::error::{BuildError, TransportError};
use crate::http::{AdapterRequest, AdapterResponse, Headers, Method};
use crate::observability::metrics;
use crate::resilience::RetryPolicy;
use crate::service::builder::normalize_host;
use crate::service::Completion;

/// Correlation header attached to every attempt.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Adapter performing real HTTP requests.
#[derive(Debug, Clone)]
pub struct ReqwestAdapter {
    client: reqwest::Client,
    base_url: Option<Url>,
    retry: RetryPolicy,
    runtime: Handle,
}

impl ReqwestAdapter {
    /// Default HTTP settings, spawning onto the current tokio runtime.
    pub fn new(base_url: Option<Url>) -> Result<Self, BuildError> {
        let client = build_client(&HttpConfig::default())?;
        Ok(Self::with_client(client, base_url, RetryPolicy::default(), current_runtime()?))
    }

    /// Use the `[service]`, `[http]` and `[retries]` sections of a config.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, BuildError> {
        let base_url = config
            .service
            .host
            .as_deref()
            .map(|host| {
                Url::parse(host).map_err(|source| BuildError::InvalidHost {
                    host: host.to_string(),
                    source,
                })
            })
            .transpose()?;

        let adapter = Self::with_client(
            build_client(&config.http)?,
            base_url,
            RetryPolicy::from_config(&config.retries),
            current_runtime()?,
        );

        tracing::info!(
            base_url = ?adapter.base_url.as_ref().map(Url::as_str),
            max_attempts = adapter.retry.max_attempts,
            request_timeout_secs = config.http.request_timeout_secs,
            "HTTP adapter configured"
        );
        Ok(adapter)
    }

    /// Assemble from parts.
    pub fn with_client(
        client: reqwest::Client,
        base_url: Option<Url>,
        retry: RetryPolicy,
        runtime: Handle,
    ) -> Self {
        Self {
            client,
            base_url: base_url.map(normalize_host),
            retry,
            runtime,
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

impl Adapter for ReqwestAdapter {
    fn perform(&self, method: Method, request: AdapterRequest, completion: Completion) {
        let Some(url) = request.target.resolve(self.base_url.as_ref()) else {
            tracing::warn!(target = %request.target, "No base URL to resolve relative target");
            completion.complete(AdapterResponse::error(TransportError::UnresolvedTarget(
                request.target.to_string(),
            )));
            return;
        };

        let client = self.client.clone();
        let retry = self.retry.clone();
        self.runtime.spawn(async move {
            let response = execute(&client, &retry, method, url, &request).await;
            completion.complete(response);
        });
    }
}

fn current_runtime() -> Result<Handle, BuildError> {
    Handle::try_current().map_err(|_| BuildError::NoRuntime)
}

fn build_client(http: &HttpConfig) -> Result<reqwest::Client, BuildError> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .user_agent(http.user_agent.as_str())
        .build()?;
    Ok(client)
}

async fn execute(
    client: &reqwest::Client,
    retry: &RetryPolicy,
    method: Method,
    url: Url,
    request: &AdapterRequest,
) -> AdapterResponse {
    let request_id = request
        .header(REQUEST_ID_HEADER)
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut attempt = 1;
    loop {
        match build_request(client, method, &url, request, &request_id).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() && retry.should_retry(method, attempt, Some(status.as_u16())) {
                    tracing::info!(
                        request_id = %request_id,
                        status = status.as_u16(),
                        attempt,
                        "Retrying after upstream status"
                    );
                } else {
                    return read_response(response).await;
                }
            }
            Err(error) => {
                let connection_failure = error.is_connect() || error.is_timeout();
                if connection_failure && retry.should_retry(method, attempt, None) {
                    tracing::info!(
                        request_id = %request_id,
                        error = %error,
                        attempt,
                        "Retrying after connection failure"
                    );
                } else {
                    tracing::warn!(
                        request_id = %request_id,
                        method = %method,
                        url = %url,
                        error = %error,
                        "HTTP request failed"
                    );
                    return AdapterResponse::error(TransportError::Http(error));
                }
            }
        }

        metrics::record_retry(method);
        tokio::time::sleep(retry.delay(attempt)).await;
        attempt += 1;
    }
}

fn build_request(
    client: &reqwest::Client,
    method: Method,
    url: &Url,
    request: &AdapterRequest,
    request_id: &str,
) -> reqwest::RequestBuilder {
    let mut builder = client.request(method.into(), url.clone());

    if let Some(headers) = &request.headers {
        for (name, value) in headers.iter() {
            builder = builder.header(name, value);
        }
    }
    if request.header(REQUEST_ID_HEADER).is_none() {
        builder = builder.header(REQUEST_ID_HEADER, request_id);
    }
    if let Some(query) = &request.query {
        builder = builder.query(query);
    }
    if let Some(body) = &request.body {
        if request.header("Content-Type").is_none() {
            builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json");
        }
        builder = builder.body(body.clone());
    }
    builder
}

async fn read_response(response: reqwest::Response) -> AdapterResponse {
    let status = response.status();
    let headers = convert_headers(response.headers());

    let body = match response.bytes().await {
        Ok(body) => body,
        Err(error) => return AdapterResponse::error(TransportError::Http(error)).with_headers(headers),
    };

    let outcome = if !status.is_success() {
        AdapterResponse::error(TransportError::Status {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    } else if status == StatusCode::NO_CONTENT || body.is_empty() {
        AdapterResponse::empty()
    } else {
        AdapterResponse::success(body)
    };
    outcome.with_headers(headers)
}

/// Non-UTF-8 values are skipped; repeated names keep the last value.
fn convert_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| value.to_str().ok().map(|v| (name.as_str(), v)))
        .collect()
}
