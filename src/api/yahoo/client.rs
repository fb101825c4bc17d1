use reqwest::header::USER_AGENT;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::models::{ApiError, QuoteEnvelope};
use crate::models::Quote;

// Yahoo rejects requests without a browser-ish user agent.
const QUOTE_USER_AGENT: &str = "Mozilla/5.0 (compatible; tickerboard/0.1)";

/// Yahoo Finance quote API client
pub struct YahooClient {
    http_client: HttpClient,
    base_url: String,
}

impl YahooClient {
    const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com";

    /// Create a client against the public Yahoo Finance endpoint
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Create a client from the QUOTE_API_BASE_URL environment variable,
    /// falling back to the public endpoint.
    pub fn from_env() -> Self {
        match std::env::var("QUOTE_API_BASE_URL") {
            Ok(url) => Self::with_base_url(url),
            Err(_) => Self::new(),
        }
    }

    /// GET /v7/finance/quote?symbols={symbol}
    ///
    /// Fetches the current quote for a single symbol.
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol as listed on the exchange (e.g. "AAPL", "ISF.L")
    ///
    /// # Returns
    /// * `Ok(Quote)` - Raw quote flattened to the board's model; any field
    ///   the provider omitted is `None`
    /// * `Err(ApiError)` - Request, status, or decode failure
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote, ApiError> {
        let url = format!("{}/v7/finance/quote?symbols={}", self.base_url, symbol);
        debug!("Fetching quote for {}", symbol);

        let response = self
            .http_client
            .get(&url)
            .header(USER_AGENT, QUOTE_USER_AGENT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_text = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body_text));
        }

        let body = response.text().await?;
        let envelope: QuoteEnvelope = serde_json::from_str(&body)?;

        let raw = envelope
            .quote_response
            .result
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::MissingResult(symbol.to_string()))?;

        Ok(raw.into_quote(symbol))
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}
