use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    // Currency code -> display glyph. GBp maps to the pound sign because
    // pence quotes are converted to pounds before display.
    static ref CURRENCY_SYMBOLS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("USD", "$");
        m.insert("GBP", "\u{a3}");
        m.insert("GBp", "\u{a3}");
        m.insert("EUR", "\u{20ac}");
        m.insert("JPY", "\u{a5}");
        m
    };
}

/// Look up the display glyph for a currency code.
/// Codes without a glyph fall back to the raw code string.
pub fn currency_symbol(code: &str) -> &str {
    CURRENCY_SYMBOLS.get(code).copied().unwrap_or(code)
}
