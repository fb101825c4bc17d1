use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod console;
mod models;
mod services;
mod tickers;
mod utils;
mod web;

use api::yahoo::YahooClient;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Near-real-time stock and ETF quote board", long_about = None)]
struct Args {
    /// Print the quote tables to stdout once instead of serving HTTP.
    #[clap(long)]
    console: bool,

    /// Socket address to bind the HTTP server to (overrides BIND_ADDR).
    #[clap(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("tickerboard=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let client = YahooClient::from_env();

    if args.console {
        console::run(&client).await;
        return;
    }

    let bind_addr = args
        .bind
        .or_else(|| std::env::var("BIND_ADDR").ok())
        .unwrap_or_else(|| "0.0.0.0:3000".to_string());

    info!("Starting tickerboard on {}", bind_addr);

    if let Err(e) = web::serve(&bind_addr, client).await {
        error!("Server error: {}", e);
    }
}
