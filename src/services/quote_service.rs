use tracing::warn;

use crate::api::yahoo::YahooClient;
use crate::models::{FormattedRow, Quote};
use crate::utils::currency_symbol;
use crate::utils::format::{abbreviate_market_cap, group_thousands, round2};

/// Placeholder substituted for any absent or malformed field.
pub const UNAVAILABLE: &str = "unavailable";

/// Fetch one quote per symbol, sequentially, in list order.
///
/// A failed provider call degrades that symbol to an empty quote (every
/// cell renders the placeholder) and is logged; the rest of the list still
/// renders. No retries.
pub async fn fetch_quotes(client: &YahooClient, symbols: &[&str]) -> Vec<Quote> {
    let mut quotes = Vec::with_capacity(symbols.len());
    for symbol in symbols {
        match client.get_quote(symbol).await {
            Ok(quote) => quotes.push(quote),
            Err(e) => {
                warn!("Failed to fetch quote for {}: {}", symbol, e);
                quotes.push(Quote::empty(symbol));
            }
        }
    }
    quotes
}

/// Fetch and normalize a whole symbol list into display rows.
pub async fn fetch_rows(client: &YahooClient, symbols: &[&str]) -> Vec<FormattedRow> {
    fetch_quotes(client, symbols)
        .await
        .iter()
        .map(normalize)
        .collect()
}

/// Normalize a raw quote into display cells.
///
/// Pence-denominated quotes (GBp/GBX) are divided by 100 and relabeled GBP
/// before anything else is computed. Day change and day change percent are
/// rounded to two decimals; if either price is absent both change cells are
/// unavailable, and a previous close of zero leaves the percent unavailable.
pub fn normalize(quote: &Quote) -> FormattedRow {
    let mut price = quote.price;
    let mut previous_close = quote.previous_close;
    let mut currency = quote.currency.as_str();

    // Convert GBp (pence) to GBP
    if currency == "GBp" || currency == "GBX" {
        price = price.map(|p| round2(p / 100.0));
        previous_close = previous_close.map(|p| round2(p / 100.0));
        currency = "GBP";
    }

    let glyph = currency_symbol(currency);

    let price_str = match price {
        Some(p) => format!("{}{:.2}", glyph, p),
        None => UNAVAILABLE.to_string(),
    };

    let mut change = UNAVAILABLE.to_string();
    let mut change_pct = UNAVAILABLE.to_string();
    let mut change_negative = false;
    let mut change_pct_negative = false;

    if let (Some(current), Some(previous)) = (price, previous_close) {
        let day_change = round2(current - previous);
        change = format!("{:.2}", day_change);
        change_negative = day_change < 0.0;

        if previous != 0.0 {
            let pct = round2(day_change / previous * 100.0);
            change_pct = format!("{:.2}", pct);
            change_pct_negative = pct < 0.0;
        }
    }

    let volume = match quote.volume {
        Some(v) => group_thousands(v),
        None => UNAVAILABLE.to_string(),
    };

    let market_cap = match quote.market_cap {
        Some(cap) => abbreviate_market_cap(cap, glyph),
        None => UNAVAILABLE.to_string(),
    };

    FormattedRow {
        name: quote.name.clone(),
        symbol: quote.symbol.clone(),
        price: price_str,
        change,
        change_pct,
        change_negative,
        change_pct_negative,
        volume,
        market_cap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_quote(price: Option<f64>, previous_close: Option<f64>) -> Quote {
        Quote {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            price,
            previous_close,
            currency: "USD".to_string(),
            volume: Some(1_234_567),
            market_cap: Some(2_500_000_000.0),
        }
    }

    #[test]
    fn test_day_change_and_percent() {
        let row = normalize(&usd_quote(Some(150.5), Some(148.0)));
        assert_eq!(row.change, "2.50");
        assert_eq!(row.change_pct, "1.69");
        assert!(!row.change_negative);
        assert!(!row.change_pct_negative);
    }

    #[test]
    fn test_negative_change_sets_flags() {
        let row = normalize(&usd_quote(Some(148.0), Some(150.5)));
        assert_eq!(row.change, "-2.50");
        assert_eq!(row.change_pct, "-1.66");
        assert!(row.change_negative);
        assert!(row.change_pct_negative);
    }

    #[test]
    fn test_zero_previous_close_leaves_percent_unavailable() {
        let row = normalize(&usd_quote(Some(150.5), Some(0.0)));
        assert_eq!(row.change, "150.50");
        assert_eq!(row.change_pct, UNAVAILABLE);
        assert!(!row.change_pct_negative);
    }

    #[test]
    fn test_missing_price_leaves_both_changes_unavailable() {
        let row = normalize(&usd_quote(None, Some(148.0)));
        assert_eq!(row.price, UNAVAILABLE);
        assert_eq!(row.change, UNAVAILABLE);
        assert_eq!(row.change_pct, UNAVAILABLE);
    }

    #[test]
    fn test_missing_previous_close_leaves_both_changes_unavailable() {
        let row = normalize(&usd_quote(Some(150.5), None));
        assert_eq!(row.price, "$150.50");
        assert_eq!(row.change, UNAVAILABLE);
        assert_eq!(row.change_pct, UNAVAILABLE);
    }

    #[test]
    fn test_pence_quotes_convert_to_pounds_before_change() {
        let quote = Quote {
            symbol: "ISF.L".to_string(),
            name: "iShares Core FTSE 100".to_string(),
            price: Some(905.8),
            previous_close: Some(901.2),
            currency: "GBp".to_string(),
            volume: None,
            market_cap: None,
        };
        let row = normalize(&quote);
        assert_eq!(row.price, "£9.06");
        // 9.06 - 9.01, computed on the converted values
        assert_eq!(row.change, "0.05");
        assert_eq!(row.volume, UNAVAILABLE);
        assert_eq!(row.market_cap, UNAVAILABLE);
    }

    #[test]
    fn test_gbx_alias_also_converts() {
        let quote = Quote {
            currency: "GBX".to_string(),
            price: Some(250.0),
            previous_close: Some(250.0),
            ..Quote::empty("CSP1.L")
        };
        let row = normalize(&quote);
        assert_eq!(row.price, "£2.50");
        assert_eq!(row.change, "0.00");
    }

    #[test]
    fn test_volume_grouping_and_market_cap_abbreviation() {
        let row = normalize(&usd_quote(Some(150.5), Some(148.0)));
        assert_eq!(row.volume, "1,234,567");
        assert_eq!(row.market_cap, "$2.50B");
    }

    #[test]
    fn test_empty_quote_renders_all_placeholders() {
        let row = normalize(&Quote::empty("BLZE"));
        assert_eq!(row.name, "BLZE");
        assert_eq!(row.symbol, "BLZE");
        assert_eq!(row.price, UNAVAILABLE);
        assert_eq!(row.change, UNAVAILABLE);
        assert_eq!(row.change_pct, UNAVAILABLE);
        assert_eq!(row.volume, UNAVAILABLE);
        assert_eq!(row.market_cap, UNAVAILABLE);
    }
}
