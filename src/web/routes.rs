use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use chrono::Local;
use tower_http::cors::{Any, CorsLayer};

use crate::api::yahoo::YahooClient;
use crate::services::{quote_service, table_service};
use crate::tickers;
use crate::web::page;

/// Build the application router: a single GET / route.
pub fn router(client: Arc<YahooClient>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .layer(cors)
        .with_state(client)
}

/// GET /
///
/// Re-fetches every ticker group on each request (nothing is cached) and
/// returns the rendered page.
async fn index(State(client): State<Arc<YahooClient>>) -> Html<String> {
    let mut sections = Vec::with_capacity(tickers::GROUPS.len());
    for group in tickers::GROUPS {
        let rows = quote_service::fetch_rows(&client, group.symbols).await;
        let table = table_service::render_html_table(&rows, &group.options);
        sections.push((group.label.to_string(), table));
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Html(page::render_page(&sections, &timestamp))
}
