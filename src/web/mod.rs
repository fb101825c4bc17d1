//! HTTP surface: one GET route serving the quote page.

pub mod page;
pub mod routes;

use std::sync::Arc;

use tracing::info;

use crate::api::yahoo::YahooClient;

/// Bind and serve the quote page until the process is stopped.
pub async fn serve(bind_addr: &str, client: YahooClient) -> Result<(), std::io::Error> {
    let app = routes::router(Arc::new(client));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}
