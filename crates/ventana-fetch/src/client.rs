//! HTTP client for the chart endpoint.

use bytes::Bytes;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use ventana_types::{DateRange, Instrument};

use crate::{parse_chart, url::chart_url};

/// Configuration for the price client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum concurrent downloads.
    pub concurrency: usize,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retry attempts for failed requests.
    pub max_retries: u32,
    /// Base delay for exponential backoff (in milliseconds).
    pub base_delay_ms: u64,
    /// Maximum delay between retries (in milliseconds).
    pub max_delay_ms: u64,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            concurrency: 5,
            timeout: Duration::from_secs(30),
            max_retries: 5,
            base_delay_ms: 500,
            max_delay_ms: 15_000,
            // Yahoo rejects requests without a browser-like agent.
            user_agent: format!(
                "Mozilla/5.0 (compatible; ventana/{})",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// Errors that can occur during downloads.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out on every attempt.
    #[error("Request timed out after {0} attempts")]
    Timeout(u32),

    /// Server returned an error status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with connection pooling and retry logic.
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: Client,
    config: ClientConfig,
}

impl PriceClient {
    /// Creates a new price client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the chart response body of an instrument over a date range.
    ///
    /// Returns `Ok(None)` when Yahoo has no chart for the symbol (404).
    ///
    /// # Errors
    ///
    /// Returns an error if the download fails after all retries.
    pub async fn download_chart(
        &self,
        instrument: Instrument,
        range: DateRange,
    ) -> Result<Option<Bytes>, FetchError> {
        let url = chart_url(instrument, range);
        let mut attempt = 0;

        loop {
            let error = match self.client.get(&url).send().await {
                Ok(response) => {
                    let status = response.status();
                    match ChartStatus::from_status(status) {
                        ChartStatus::Chart => return Ok(Some(response.bytes().await?)),
                        ChartStatus::NoChart => {
                            // The 404 body is a chart document carrying the reason.
                            let reason = match response.bytes().await {
                                Ok(body) => parse_chart(&body)
                                    .err()
                                    .map_or_else(|| "no reason given".to_string(), |e| e.to_string()),
                                Err(e) => e.to_string(),
                            };
                            debug!(%instrument, %reason, "no chart for symbol");
                            return Ok(None);
                        }
                        ChartStatus::Throttled | ChartStatus::Unavailable
                            if attempt < self.config.max_retries =>
                        {
                            attempt += 1;
                            let delay = self
                                .backoff_delay(attempt)
                                .max(retry_after(response.headers()).unwrap_or_default())
                                .min(Duration::from_millis(self.config.max_delay_ms));
                            warn!(
                                %instrument,
                                %status,
                                attempt,
                                ?delay,
                                "chart endpoint busy, retrying"
                            );
                            tokio::time::sleep(delay).await;
                            continue;
                        }
                        ChartStatus::Throttled | ChartStatus::Unavailable => {
                            return Err(FetchError::ServerError {
                                status: status.as_u16(),
                            });
                        }
                        ChartStatus::Rejected => {
                            response.error_for_status_ref()?;
                            return Err(FetchError::ServerError {
                                status: status.as_u16(),
                            });
                        }
                    }
                }
                Err(e) => e,
            };

            if is_retryable(&error) && attempt < self.config.max_retries {
                attempt += 1;
                let delay = self.backoff_delay(attempt);
                warn!(
                    %instrument,
                    %range,
                    error = %error,
                    attempt,
                    ?delay,
                    "chart request failed, retrying"
                );
                tokio::time::sleep(delay).await;
            } else if error.is_timeout() {
                return Err(FetchError::Timeout(attempt + 1));
            } else {
                return Err(error.into());
            }
        }
    }

    /// Exponential backoff capped at `max_delay_ms`, with ±25% deterministic jitter.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let capped = self
            .config
            .base_delay_ms
            .saturating_mul(1u64 << attempt.min(10))
            .min(self.config.max_delay_ms);

        let spread = capped / 4;
        let jitter = if spread > 0 {
            (u64::from(attempt) * 17) % (spread * 2)
        } else {
            0
        };
        Duration::from_millis((capped + jitter).saturating_sub(spread).max(100))
    }
}

/// How the chart endpoint answered a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartStatus {
    /// A chart document follows.
    Chart,
    /// Unknown or delisted symbol.
    NoChart,
    /// Rate limited (429).
    Throttled,
    /// Transient server failure (5xx).
    Unavailable,
    /// Any other client error; not retried.
    Rejected,
}

impl ChartStatus {
    fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NoChart,
            StatusCode::TOO_MANY_REQUESTS => Self::Throttled,
            s if s.is_server_error() => Self::Unavailable,
            s if s.is_success() => Self::Chart,
            _ => Self::Rejected,
        }
    }
}

/// Reads a `Retry-After` header given in seconds.
fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Timeouts and connection failures are worth another attempt; builder errors
/// are not.
fn is_retryable(error: &reqwest::Error) -> bool {
    !error.is_builder() && (error.is_timeout() || error.is_connect() || error.is_request())
}
