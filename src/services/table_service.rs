//! Renders formatted rows as an HTML fragment or an aligned text table.
//!
//! Both surfaces share the same rows and column toggles; only the markup
//! differs.

use crate::models::{FormattedRow, RowOptions};
use crate::utils::TextTable;

/// Public quote page the symbol cell links to.
const QUOTE_PAGE_URL: &str = "https://finance.yahoo.com/quote";

const NEGATIVE_STYLE: &str = " style=\"color:red;\"";

/// Render rows as an HTML table fragment.
///
/// The header matches the columns selected by `options`, negative change
/// cells carry an inline red marker, and the symbol cell links to the
/// provider's public quote page.
pub fn render_html_table(rows: &[FormattedRow], options: &RowOptions) -> String {
    let mut table = String::from(
        "<table><tr><th>Name</th><th>Symbol</th><th>Current Price</th>\
         <th>Day Change</th><th>Day Change (%)</th>",
    );
    if options.volume {
        table.push_str("<th>Volume</th>");
    }
    if options.market_cap {
        table.push_str("<th>Market Cap</th>");
    }
    table.push_str("</tr>");

    for row in rows {
        let change_style = if row.change_negative { NEGATIVE_STYLE } else { "" };
        let pct_style = if row.change_pct_negative { NEGATIVE_STYLE } else { "" };

        table.push_str(&format!(
            "<tr><td>{name}</td>\
             <td><a href=\"{url}/{symbol}\">{symbol}</a></td>\
             <td>{price}</td>\
             <td{change_style}>{change}</td>\
             <td{pct_style}>{pct}</td>",
            name = row.name,
            url = QUOTE_PAGE_URL,
            symbol = row.symbol,
            price = row.price,
            change_style = change_style,
            change = row.change,
            pct_style = pct_style,
            pct = row.change_pct,
        ));
        if options.volume {
            table.push_str(&format!("<td>{}</td>", row.volume));
        }
        if options.market_cap {
            table.push_str(&format!("<td>{}</td>", row.market_cap));
        }
        table.push_str("</tr>");
    }

    table.push_str("</table>");
    table
}

/// Render the same rows as an aligned text table for the console surface.
pub fn render_text_table(rows: &[FormattedRow], options: &RowOptions) -> String {
    let mut headers = vec!["Name", "Symbol", "Current Price", "Day Change", "Day Change (%)"];
    if options.volume {
        headers.push("Volume");
    }
    if options.market_cap {
        headers.push("Market Cap");
    }

    let mut table = TextTable::new(&headers);
    for row in rows {
        let mut cells = vec![
            row.name.clone(),
            row.symbol.clone(),
            row.price.clone(),
            row.change.clone(),
            row.change_pct.clone(),
        ];
        if options.volume {
            cells.push(row.volume.clone());
        }
        if options.market_cap {
            cells.push(row.market_cap.clone());
        }
        table.add_row(cells);
    }
    table.render()
}
