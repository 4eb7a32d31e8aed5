//! Async HTTP client wrapping reqwest.
//!
//! Not a browser — just HTTP requests. Handles redirects, timeouts, retry
//! on 5xx, and backoff on 429. Failure is explicit: a fetch either yields a
//! `FetchedPage` (whose body may legitimately be empty) or a `FetchError`.
//! Callers never have to guess whether an empty document means "nothing
//! there" or "the request blew up".

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// User-Agent sent when the caller does not override it.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Tunables for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retry attempts on 5xx, 429, and transport errors.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }
}

/// Why a page could not be acquired.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested URL did not parse.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Transport-level failure (DNS, connect, TLS, timeout) after retries.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered, but not with a success status.
    #[error("{url} answered HTTP {status}")]
    Status { status: u16, url: String },
}

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Originally requested URL.
    pub url: String,
    /// Final URL after redirects; the base for resolving page references.
    pub final_url: Url,
    /// HTTP status code (always a success code).
    pub status: u16,
    /// Content-Type header, if the server sent one.
    pub content_type: Option<String>,
    /// Response body as text. May be empty — that is not an error.
    pub body: String,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

/// HTTP client for page acquisition.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    /// Perform a GET request with retry on 5xx and backoff on 429.
    ///
    /// Transport errors are retried with the same exponential backoff as
    /// 5xx responses. A non-success status after retries are exhausted maps
    /// to `FetchError::Status`.
    pub async fn get(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let requested = Url::parse(url)?;
        let mut attempt = 0u32;

        loop {
            let resp = self.client.get(requested.clone()).send().await;

            match resp {
                Ok(r) => {
                    let status = r.status().as_u16();

                    if status >= 500 && attempt < self.config.max_retries {
                        attempt += 1;
                        debug!(url, status, attempt, "retrying after server error");
                        tokio::time::sleep(backoff_delay(attempt)).await;
                        continue;
                    }

                    if status == 429 && attempt < self.config.max_retries {
                        attempt += 1;
                        let retry_after = r
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|s| s.parse::<u64>().ok())
                            .unwrap_or(2);
                        debug!(url, retry_after, attempt, "throttled, backing off");
                        tokio::time::sleep(Duration::from_secs(retry_after.min(10))).await;
                        continue;
                    }

                    if !r.status().is_success() {
                        return Err(FetchError::Status {
                            status,
                            url: url.to_string(),
                        });
                    }

                    let final_url = r.url().clone();
                    let content_type = r
                        .headers()
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(|s| s.to_string());
                    // Reading the body can fail after a successful status
                    // line (connection reset mid-stream); that is a transport
                    // failure, not an empty page.
                    let body = match r.text().await {
                        Ok(body) => body,
                        Err(e) => {
                            if attempt < self.config.max_retries {
                                attempt += 1;
                                debug!(url, attempt, error = %e, "retrying after body read error");
                                tokio::time::sleep(backoff_delay(attempt)).await;
                                continue;
                            }
                            return Err(e.into());
                        }
                    };

                    return Ok(FetchedPage {
                        url: url.to_string(),
                        final_url,
                        status,
                        content_type,
                        body,
                        fetched_at: Utc::now(),
                    });
                }
                Err(e) => {
                    if attempt < self.config.max_retries {
                        attempt += 1;
                        debug!(url, attempt, error = %e, "retrying after transport error");
                        tokio::time::sleep(backoff_delay(attempt)).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Perform parallel GET requests with bounded concurrency.
    ///
    /// Results arrive in completion order, each paired with the URL it was
    /// requested for.
    pub async fn get_many(
        &self,
        urls: &[String],
        concurrency: usize,
    ) -> Vec<(String, Result<FetchedPage, FetchError>)> {
        use futures::stream::{self, StreamExt};

        stream::iter(urls.iter())
            .map(|url| {
                let client = self.clone();
                let u = url.clone();
                async move {
                    let result = client.get(&u).await;
                    (u, result)
                }
            })
            .buffer_unordered(concurrency)
            .collect()
            .await
    }
}

/// Exponential backoff: 500 ms doubling per attempt.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(500 * 2u64.pow(attempt.saturating_sub(1)))
}
