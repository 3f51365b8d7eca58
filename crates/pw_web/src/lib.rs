use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Builds the two-endpoint router. CORS is wide open: the only client is a
/// local developer UI with no session state of its own.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/fetch_recent_papers", get(handlers::fetch_recent_papers))
        .route("/add_to_notion", post(handlers::add_to_notion))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds the listener and serves requests until the process exits.
pub async fn serve(state: AppState, addr: SocketAddr) -> pw_core::Result<()> {
    let app = create_app(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use pw_core::{Paper, Result, ScoredPaper};
}
