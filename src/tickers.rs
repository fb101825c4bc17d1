//! Hardcoded ticker groups rendered by every surface.
//!
//! Lists are fixed at compile time; there is no runtime configuration.

use crate::models::RowOptions;

/// A named symbol list plus the optional columns its table shows.
pub struct TickerGroup {
    pub label: &'static str,
    pub symbols: &'static [&'static str],
    pub options: RowOptions,
}

pub const COMPANIES: TickerGroup = TickerGroup {
    label: "Companies",
    symbols: &[
        "AAPL", "GOOGL", "MSFT", "NVDA", "TSLA", "CSCO", "META", "ANET", "NKE", "BLZE", "AMZN",
    ],
    options: RowOptions {
        volume: true,
        market_cap: true,
    },
};

// LSE-listed, so these quote in pence and exercise the GBp conversion.
pub const ETFS: TickerGroup = TickerGroup {
    label: "ETFs",
    symbols: &[
        "DXJG.L", "FLO5.L", "ISF.L", "CSP1.L", "EMVL.L", "ISFR.L", "FSEU.L", "SPX4.L", "VGER.L",
        "VEMT.L", "WDEP.L",
    ],
    options: RowOptions {
        volume: true,
        market_cap: false,
    },
};

/// Every group, in page order.
pub const GROUPS: &[&TickerGroup] = &[&COMPANIES, &ETFS];
