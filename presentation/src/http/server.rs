//! HTTP server bootstrap

use super::routes::{self, AppState};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the full application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::consultation_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app).await
}
