//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::{
    handler::{create_room, get_room_detail, get_rooms, health_check, index, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Routes of the game server, without a listener attached.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket エンドポイント
        .route("/ws", get(websocket_handler))
        // HTTP エンドポイント
        .route("/", get(index))
        .route("/create_room", post(create_room))
        .route("/api/health", get(health_check))
        .route("/api/rooms", get(get_rooms))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Tic-tac-toe game server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(Arc::new(app_state));
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
}

impl Server {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self { app_state }
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = build_router(self.app_state);

        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!("Tic-tac-toe server listening on {}", listener.local_addr()?);
        tracing::info!("Create a room: POST http://{}/create_room", bind_addr);
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
