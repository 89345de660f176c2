//! WebSocket message DTOs.
//!
//! Every frame is a JSON object tagged by its `type` field, e.g.
//! `{"type":"join_room","room_id":"ABCDEF","name":"Alice"}`.

use serde::{Deserialize, Serialize};

/// Messages sent by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    JoinRoom {
        room_id: String,
        name: String,
    },
    LeaveRoom {
        room_id: String,
    },
    Move {
        room_id: String,
        position: usize,
        mark: String,
    },
    PlayAgain {
        room_id: String,
    },
}

/// Messages sent by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Connected,
    PlayerJoined {
        name: String,
    },
    JoinedRoom {
        players: Vec<String>,
    },
    RoomFull,
    NoRoom,
    OpponentLeft,
    GameStart {
        role: String,
    },
    MoveMade {
        position: usize,
    },
    /// `winner` is `"X"`, `"O"`, or `""` for a draw.
    GameOver {
        winner: String,
        draw: bool,
    },
    Reset,
    RoomExpired,
    Error {
        code: String,
        message: String,
    },
}
