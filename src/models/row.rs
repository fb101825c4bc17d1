//! Display projection of a quote

/// Read-only projection of a [`Quote`](crate::models::Quote) with every cell
/// already formatted as a string. Cells for absent provider fields hold the
/// "unavailable" placeholder.
///
/// The negative flags are kept separate from the cell text so renderers can
/// attach their own visual marker.
#[derive(Debug, Clone)]
pub struct FormattedRow {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub change_pct: String,
    pub change_negative: bool,
    pub change_pct_negative: bool,
    pub volume: String,
    pub market_cap: String,
}

/// Column toggles for the optional table columns.
///
/// The historical script variants diverged only in which of these columns
/// they showed; each ticker group now carries its own set.
#[derive(Debug, Clone, Copy)]
pub struct RowOptions {
    pub volume: bool,
    pub market_cap: bool,
}
