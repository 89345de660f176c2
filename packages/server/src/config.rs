//! Command-line and environment configuration.

use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tactoe-server")]
#[command(about = "Real-time tic-tac-toe room server over WebSocket", long_about = None)]
pub struct ServerConfig {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "TACTOE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "TACTOE_PORT", default_value = "8080")]
    pub port: u16,

    /// Seconds a new room may wait for its second player before it is discarded
    #[arg(long, env = "TACTOE_ROOM_GRACE_SECS", default_value = "60")]
    pub room_grace_secs: u64,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "TACTOE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn room_grace_period(&self) -> Duration {
        Duration::from_secs(self.room_grace_secs)
    }
}
