use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::Quote;

/// Top-level envelope of the v7 quote endpoint.
#[derive(Debug, Deserialize)]
pub struct QuoteEnvelope {
    #[serde(rename = "quoteResponse")]
    pub quote_response: QuoteResponse,
}

/// Result list plus the provider's own error slot.
#[derive(Debug, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub result: Vec<RawQuote>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// One raw quote as the provider returns it.
///
/// Every field is optional, and a field of the wrong type deserializes to
/// `None` rather than failing the whole response — missing and malformed
/// fields are indistinguishable downstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuote {
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub short_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub regular_market_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub regular_market_previous_close: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub regular_market_volume: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub market_cap: Option<f64>,
}

impl RawQuote {
    /// Flatten into the board's quote model. The requested symbol stands in
    /// when the provider omits the symbol or any name field.
    pub fn into_quote(self, requested: &str) -> Quote {
        let symbol = self.symbol.unwrap_or_else(|| requested.to_string());
        let name = self
            .long_name
            .or(self.short_name)
            .unwrap_or_else(|| symbol.clone());
        Quote {
            symbol,
            name,
            price: self.regular_market_price,
            previous_close: self.regular_market_previous_close,
            currency: self.currency.unwrap_or_default(),
            volume: self.regular_market_volume,
            market_cap: self.market_cap,
        }
    }
}

// Swallow type mismatches: a malformed field becomes None instead of
// poisoning the rest of the quote.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Errors from the quote provider client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network/request error
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status with the response body for context
    #[error("provider returned HTTP {0}: {1}")]
    Status(u16, String),

    /// Response body was not the expected JSON shape
    #[error("failed to parse provider response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The provider answered but had no result for the symbol
    #[error("no quote result for symbol {0}")]
    MissingResult(String),
}
