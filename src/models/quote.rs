//! Raw quote model

/// A single quote as returned by the market-data provider, flattened to the
/// fields the board renders. Every numeric field may be absent; absent fields
/// become the placeholder at render time.
#[derive(Debug, Clone, Default)]
pub struct Quote {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
    pub previous_close: Option<f64>,
    pub currency: String,
    pub volume: Option<u64>,
    pub market_cap: Option<f64>,
}

impl Quote {
    /// Placeholder quote for a symbol the provider returned nothing for.
    /// The symbol doubles as the display name.
    pub fn empty(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            ..Default::default()
        }
    }
}
