//! Router construction and server wiring.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::{InMemoryTaskStore, TaskStore};

use super::tasks as tasks_api;

/// Shared application state.
pub struct AppState {
    /// The task store backing every handler
    pub tasks: Arc<dyn TaskStore>,
}

/// Build the application router for the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/tasks", tasks_api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let tasks: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::seeded().await);
    tracing::info!(persistent = tasks.is_persistent(), "Task store initialized");

    let state = Arc::new(AppState { tasks });

    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
