//! Blocking HTTP client for the quote endpoint.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::network::QuoteSource;

// ── Endpoint ───────────────────────────────────────────────────────────────────

pub const QUOTE_URL: &str = "https://build-system.fman.io/quote";

/// Upper bound on a single fetch, connect included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ── Client ─────────────────────────────────────────────────────────────────────

/// Fetches quotes from the quote endpoint with one plain GET per call.
///
/// No request body, custom headers or authentication are sent, and nothing
/// is retried or cached. A server that stalls past the client's timeout
/// ends as [`crate::error::AppError::Network`].
pub struct HttpQuoteSource {
    client: Client,
    url: String,
}

impl HttpQuoteSource {
    /// Client for [`QUOTE_URL`] with the default [`FETCH_TIMEOUT`].
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self::with_client(QUOTE_URL, client))
    }

    /// Use a prepared client, e.g. one without proxies for local servers.
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for HttpQuoteSource {
    /// The body is returned as text whatever the status code; error pages are
    /// shown to the user as they are.
    fn fetch_quote(&self) -> Result<String> {
        log::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("quote endpoint answered {status}, showing body as-is");
        }
        Ok(response.text()?)
    }
}
