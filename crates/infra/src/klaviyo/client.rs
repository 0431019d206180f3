//! Klaviyo events API client
//!
//! Implements [`EventTransport`]: one authenticated POST per envelope, with
//! anything other than `202 Accepted` classified as a delivery failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use usersync_core::EventTransport;
use usersync_domain::constants::{ACCEPTED_STATUS, KLAVIYO_AUTH_SCHEME};
use usersync_domain::{Credentials, EventEnvelope, KlaviyoConfig, Result, SyncError};

use crate::http::HttpClient;

const JSON: &str = "application/json";

/// Endpoint settings for [`KlaviyoClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KlaviyoClientConfig {
    pub events_url: String,
    pub revision: String,
    pub timeout: Duration,
}

impl Default for KlaviyoClientConfig {
    fn default() -> Self {
        Self::from(&KlaviyoConfig::default())
    }
}

impl From<&KlaviyoConfig> for KlaviyoClientConfig {
    fn from(config: &KlaviyoConfig) -> Self {
        Self {
            events_url: config.events_url.clone(),
            revision: config.revision.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorItem {
    title: Option<String>,
}

/// Delivery message for a non-accepted response.
fn rejection_message(status: u16, body: &str) -> String {
    let title = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.errors.into_iter().next())
        .and_then(|first| first.title);

    match title {
        Some(title) => format!("Error code: {status} Message: {title}"),
        None => format!("Error code: {status}"),
    }
}

/// Logs the failed payload and hands the error back.
fn delivery_failure(err: SyncError, status: Option<u16>, payload: &str) -> SyncError {
    warn!(?status, error = %err.message(), payload, "Request to Klaviyo failed");
    err
}

/// Events API client holding the credentials it was built with
#[derive(Clone)]
pub struct KlaviyoClient {
    http: HttpClient,
    config: KlaviyoClientConfig,
    credentials: Credentials,
}

impl KlaviyoClient {
    pub fn new(config: KlaviyoClientConfig, credentials: Credentials) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http_client(http, config, credentials))
    }

    /// Reuse an existing HTTP client (its timeout wins over `config.timeout`).
    pub fn with_http_client(
        http: HttpClient,
        config: KlaviyoClientConfig,
        credentials: Credentials,
    ) -> Self {
        Self { http, config, credentials }
    }

    /// Request headers for the events API.
    ///
    /// Fails with `SyncError::Config` when no private key is configured.
    pub fn build_headers(&self) -> Result<HeaderMap> {
        let private_key = self
            .credentials
            .private_key()
            .ok_or_else(|| SyncError::Config("Klaviyo private key is not set".to_string()))?;

        let authorization =
            HeaderValue::from_str(&format!("{KLAVIYO_AUTH_SCHEME} {private_key}"))
                .map_err(|_| SyncError::Config("Klaviyo private key is not a valid header".into()))?;
        let revision = HeaderValue::from_str(&self.config.revision)
            .map_err(|_| SyncError::Config(format!("invalid API revision '{}'", self.config.revision)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert("revision", revision);
        Ok(headers)
    }

    /// POST one envelope and return the response body on `202`.
    #[instrument(skip_all, fields(metric = envelope.metric_name(), user_id = envelope.attributes().profile.wordpress_user_id))]
    pub async fn send(&self, envelope: &EventEnvelope) -> Result<String> {
        let headers = self.build_headers()?;
        let body = serde_json::to_string(envelope)
            .map_err(|e| SyncError::Internal(format!("failed to serialize event: {e}")))?;

        let request =
            self.http.request(Method::POST, &self.config.events_url).headers(headers).body(body.clone());

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(err) => return Err(delivery_failure(err, None, &body)),
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let err = SyncError::Delivery(format!("failed to read response body: {e}"));
                return Err(delivery_failure(err, Some(status), &body));
            }
        };

        if status != ACCEPTED_STATUS {
            let err = SyncError::Delivery(rejection_message(status, &text));
            return Err(delivery_failure(err, Some(status), &body));
        }

        debug!(status, "Event accepted");
        Ok(text)
    }
}

#[async_trait]
impl EventTransport for KlaviyoClient {
    async fn send(&self, envelope: &EventEnvelope) -> Result<String> {
        KlaviyoClient::send(self, envelope).await
    }
}
