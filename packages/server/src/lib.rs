//! Tactoe server: rooms, players and tic-tac-toe games over WebSocket.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
