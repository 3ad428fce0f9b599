//! ApodApiClient - REST client for the Astronomy Picture of the Day service.
//!
//! One GET per date: `<base_url>?api_key=<key>&date=<YYYY-MM-DD>`.

use apod_core::config::{ApiConfig, DEFAULT_BASE_URL};
use apod_core::error::{ApodError, Result};
use apod_core::record::{DateKey, Record, RemoteService};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Longest slice of an unparseable error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// [`RemoteService`] implementation that talks to the APOD HTTP API.
#[derive(Clone)]
pub struct ApodApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ApodApiClient {
    /// Creates a client for the public endpoint with the provided access key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Builds a client from the `[api]` config section, including its
    /// request timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApodError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Overrides the endpoint after construction.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_request(&self, key: &DateKey) -> Result<Option<Record>> {
        let date = key.to_string();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("api_key", self.api_key.as_str()), ("date", date.as_str())])
            .send()
            .await
            // The URL carries the access key; keep it out of the message
            .map_err(|err| ApodError::remote(None, err.without_url().to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            ApodError::remote(
                Some(status.as_u16()),
                format!("Failed to read response body: {}", err.without_url()),
            )
        })?;

        interpret_response(status, &body)
    }
}

#[async_trait]
impl RemoteService for ApodApiClient {
    async fn fetch(&self, key: &DateKey) -> Result<Option<Record>> {
        tracing::info!(date = %key, "Requesting picture of the day");
        self.send_request(key).await
    }
}

/// Error shapes the service uses: `{"code": 400, "msg": "..."}` for request
/// validation and `{"error": {"code": "...", "message": "..."}}` from the
/// API gateway (bad key, rate limit).
#[derive(Deserialize)]
struct ErrorBody {
    msg: Option<String>,
    error: Option<GatewayError>,
}

#[derive(Deserialize)]
struct GatewayError {
    code: Option<String>,
    message: Option<String>,
}

/// Maps a status and body to the three fetch outcomes.
///
/// - non-2xx: `Err(RemoteRequest)` with the service's own message when the
///   body has one
/// - 2xx with a body that decodes as a [`Record`]: `Ok(Some(record))`
/// - any other 2xx body (empty, not JSON, another shape): `Ok(None)`
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Option<Record>> {
    if !status.is_success() {
        return Err(ApodError::remote(
            Some(status.as_u16()),
            error_message(status, body),
        ));
    }

    if body.trim().is_empty() {
        tracing::debug!(status = status.as_u16(), "Empty response body");
        return Ok(None);
    }

    match serde_json::from_str::<Record>(body) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            tracing::debug!(error = %e, "Response body is not a record");
            Ok(None)
        }
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(msg) = parsed.msg {
            return msg;
        }
        if let Some(GatewayError { code, message }) = parsed.error {
            return match (code, message) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => fallback_message(status, body),
            };
        }
    }
    fallback_message(status, body)
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
    }
    trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
