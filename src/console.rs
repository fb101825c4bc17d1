//! Console surface: the same ticker groups printed as aligned text tables.

use chrono::Local;

use crate::api::yahoo::YahooClient;
use crate::services::{quote_service, table_service};
use crate::tickers;

/// Fetch every group once and print it to stdout, one table per group.
pub async fn run(client: &YahooClient) {
    println!(
        "Quotes as of {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    for group in tickers::GROUPS {
        let rows = quote_service::fetch_rows(client, group.symbols).await;
        println!("\nPrices for {}:", group.label);
        print!("{}", table_service::render_text_table(&rows, &group.options));
    }
}
