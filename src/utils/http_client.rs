//! Polite HTTP fetching with bounded retries.
//!
//! Every request carries the same browser-like header bundle and the same
//! timeout. Failures are retried a fixed number of times with a fixed sleep
//! in between; there is deliberately no exponential backoff, no jitter, and
//! no distinction between retryable and permanent failures (a 404 is retried
//! exactly like a timeout). After the last attempt the fetcher degrades to
//! `None` so a single unreachable page never aborts a scan.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::{self, ScanConfig};
use crate::errors::{AppError, AppResult};

pub struct PoliteHttpClient {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl PoliteHttpClient {
    pub fn new(config: &ScanConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(config::ACCEPT_LANGUAGE),
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_retries: config.max_retries,
            retry_delay: config.retry_delay,
        }
    }

    /// Single GET attempt. Non-2xx statuses are mapped to `AppError::Source`
    /// so they run through the same retry path as transport failures.
    async fn fetch_text(&self, url: &str) -> AppResult<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::source_error(format!(
                "HTTP error: {} {} - URL: {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown"),
                url
            )));
        }

        Ok(response.text().await?)
    }

    /// Fetch a page's text body, retrying with a fixed delay between
    /// attempts. Returns `None` once the attempt budget is exhausted.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        for attempt in 1..=self.max_retries {
            match self.fetch_text(url).await {
                Ok(text) => {
                    debug!("Fetched {} characters from {}", text.len(), url);
                    return Some(text);
                }
                Err(e) => {
                    warn!("Attempt {}/{} failed for {}: {}", attempt, self.max_retries, url, e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        warn!("Failed to fetch {} after {} attempts", url, self.max_retries);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_config() {
        let config = ScanConfig::default();
        let client = PoliteHttpClient::new(&config);
        assert_eq!(client.max_retries, 3);
        assert_eq!(client.retry_delay, Duration::from_secs(2));
    }
}
