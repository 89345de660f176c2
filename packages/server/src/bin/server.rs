//! Real-time tic-tac-toe server.
//!
//! Clients allocate a room over HTTP, then join it and play over WebSocket.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin tactoe-server
//! cargo run --bin tactoe-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use tactoe_server::{
    config::ServerConfig,
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    ui::{AppState, Server},
};
use tactoe_shared::{logger::setup_logger, time::SystemClock};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Initialize dependencies in order:
    // 1. Repository
    // 2. MessagePusher
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Repository (in-memory database)
    let repository = Arc::new(InMemoryRoomRepository::new());

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new());

    // 3. Create UseCases
    let app_state = AppState::new(
        repository,
        message_pusher,
        Arc::new(SystemClock),
        config.room_grace_period(),
    );
    tracing::info!(
        "Rooms without two players are discarded after {:?}",
        config.room_grace_period()
    );

    // 4. Create and run the server
    let server = Server::new(Arc::new(app_state));
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
