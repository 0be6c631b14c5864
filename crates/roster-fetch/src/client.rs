//! HTTP client for the members endpoint.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use roster_model::Record;

use crate::config::FetchSettings;
use crate::decode::decode_records;
use crate::error::{FetchError, Result};

/// User agent string for member list requests.
const USER_AGENT_VALUE: &str = concat!("roster-admin/", env!("CARGO_PKG_VERSION"));

/// Client for the member list endpoint.
#[derive(Debug, Clone)]
pub struct RecordClient {
    client: reqwest::Client,
    endpoint: Url,
    settings: FetchSettings,
}

impl RecordClient {
    /// Creates a client for the configured endpoint.
    ///
    /// Fails when the endpoint is not an absolute http(s) URL or the TLS
    /// backend cannot be initialised.
    pub fn new(settings: FetchSettings) -> Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)
            .map_err(|e| FetchError::InvalidEndpoint(format!("{}: {e}", settings.endpoint)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(FetchError::InvalidEndpoint(format!(
                "{}: unsupported scheme {}",
                settings.endpoint,
                endpoint.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout());
        if !settings.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    /// Fetches and decodes the member list.
    ///
    /// Transient failures are retried up to `max_attempts` times in total,
    /// sleeping with exponential backoff in between. The last error is
    /// returned once attempts run out.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let attempts = self.settings.attempts();
        let mut attempt = 1;
        loop {
            match self.fetch_once().await {
                Ok(records) => {
                    tracing::debug!(attempt, records = records.len(), "Fetched member list");
                    return Ok(records);
                }
                Err(err) if err.is_retryable() && attempt < attempts => {
                    let delay = self.settings.backoff(attempt);
                    tracing::warn!(
                        attempt,
                        attempts,
                        ?delay,
                        error = %err,
                        "Member list fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::error!(attempt, error = %err, "Member list fetch failed");
                    return Err(err);
                }
            }
        }
    }

    /// One GET, status check and decode.
    async fn fetch_once(&self) -> Result<Vec<Record>> {
        tracing::debug!("Fetching member list from {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_records(&body)
    }
}
