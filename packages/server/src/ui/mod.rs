//! HTTP / WebSocket server.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::{Server, build_router};
pub use state::AppState;
