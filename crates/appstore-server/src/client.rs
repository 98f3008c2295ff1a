use crate::auth::TokenSigner;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::limits::MAX_RESPONSE_SIZE;
use crate::url::{endpoint, validate_base_url};
use appstore_types::ErrorPayload;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the App Store Server API
///
/// Cheap to clone; clones share the connection pool and the bearer token
/// cache.
#[derive(Clone)]
pub struct AppStoreClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    config: ClientConfig,
    base_url: url::Url,
    signer: TokenSigner,
}

/// One API call: method, path segments and query
pub(crate) struct ApiRequest<'a> {
    method: Method,
    segments: &'a [&'a str],
    query: Vec<(&'static str, String)>,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn new(method: Method, segments: &'a [&'a str]) -> Self {
        Self {
            method,
            segments,
            query: Vec::new(),
        }
    }

    pub(crate) fn query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }
}

impl AppStoreClient {
    /// Build a client with its own connection pool
    ///
    /// Fails when the base URL is invalid, the credentials are incomplete for
    /// the configured service, or the private key cannot be parsed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("HTTP client: {e}")))?;

        Self::with_http_client(config, http)
    }

    /// Build a client on a caller-provided `reqwest::Client`
    ///
    /// The configured timeout is still applied to every request.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self> {
        let base_url = validate_base_url(config.base_url())?;
        let signer = TokenSigner::new(config.service, &config.credentials, config.token_lifetime)?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                base_url,
                signer,
            }),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Send a request without body and decode the JSON response
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
    ) -> Result<T> {
        let body = self.execute::<()>(request, None).await?;
        decode_json(&body)
    }

    /// Send a JSON body and decode the JSON response
    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        body: &B,
    ) -> Result<T> {
        let body = self.execute(request, Some(body)).await?;
        decode_json(&body)
    }

    /// Send a JSON body to an endpoint that answers without content
    pub(crate) async fn send_no_content<B: Serialize>(
        &self,
        request: ApiRequest<'_>,
        body: &B,
    ) -> Result<()> {
        self.execute(request, Some(body)).await.map(|_| ())
    }

    /// Run a request with retries and return the body of the success response
    async fn execute<B: Serialize>(
        &self,
        request: ApiRequest<'_>,
        body: Option<&B>,
    ) -> Result<Vec<u8>> {
        let inner = &self.inner;
        let url = endpoint(&inner.base_url, request.segments, &request.query)?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::Json(format!("request body: {e}")))?;

        let mut retry = 0;
        loop {
            let token = inner
                .signer
                .bearer_token(request.method.as_str(), url.path())
                .await?;

            tracing::debug!(
                method = %request.method,
                path = url.path(),
                attempt = retry + 1,
                "sending request"
            );

            let mut builder = inner
                .http
                .request(request.method.clone(), url.clone())
                .timeout(inner.config.timeout)
                .bearer_auth(token)
                .header(ACCEPT, "application/json");
            if let Some(body) = &body {
                builder = builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            let outcome = builder.send().await;
            let retryable = match &outcome {
                Ok(response) => is_retryable(response.status()),
                Err(e) => !e.is_builder(),
            };

            if retryable && retry < inner.config.retry_count {
                let wait = inner.config.backoff(retry);
                match &outcome {
                    Ok(response) => tracing::warn!(
                        status = response.status().as_u16(),
                        path = url.path(),
                        wait_ms = wait.as_millis() as u64,
                        "retrying request"
                    ),
                    Err(e) => tracing::warn!(
                        error = %e,
                        path = url.path(),
                        wait_ms = wait.as_millis() as u64,
                        "retrying request"
                    ),
                }
                tokio::time::sleep(wait).await;
                retry += 1;
                continue;
            }

            let response = outcome.map_err(|e| Error::Network(e.to_string()))?;
            return read_response(response).await;
        }
    }
}

/// Statuses worth another attempt
fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Read a response body, turning non-success statuses into [`Error::Api`]
async fn read_response(response: reqwest::Response) -> Result<Vec<u8>> {
    let status = response.status();

    if let Some(length) = response.content_length() {
        if length > MAX_RESPONSE_SIZE as u64 {
            return Err(Error::RemoteResponseTooLarge {
                size: length as usize,
                max: MAX_RESPONSE_SIZE,
            });
        }
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if bytes.len() > MAX_RESPONSE_SIZE {
        return Err(Error::RemoteResponseTooLarge {
            size: bytes.len(),
            max: MAX_RESPONSE_SIZE,
        });
    }

    if !status.is_success() {
        let payload: ErrorPayload = serde_json::from_slice(&bytes).unwrap_or_default();
        let message = payload.error_message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
        tracing::warn!(status = status.as_u16(), code = ?payload.error_code, "App Store API error");
        return Err(Error::Api {
            status: status.as_u16(),
            code: payload.error_code,
            message,
        });
    }

    Ok(bytes.to_vec())
}

fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::Json(format!("response body: {e}")))
}
