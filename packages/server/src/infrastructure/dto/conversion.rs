//! Conversion logic between DTOs and domain entities.

use tactoe_shared::time::timestamp_to_rfc3339;

use crate::domain::{Mark, Notification, Room, RoomStatus};
use crate::infrastructure::dto::{http, websocket as dto};

fn status_str(status: RoomStatus) -> &'static str {
    match status {
        RoomStatus::Waiting => "waiting",
        RoomStatus::Playing => "playing",
        RoomStatus::Finished => "finished",
    }
}

// ========================================
// Domain → WebSocket DTO
// ========================================

impl From<&Notification> for dto::ServerMessage {
    fn from(notification: &Notification) -> Self {
        match notification {
            Notification::Connected => Self::Connected,
            Notification::PlayerJoined { name } => Self::PlayerJoined { name: name.clone() },
            Notification::JoinedRoom { players } => Self::JoinedRoom {
                players: players.clone(),
            },
            Notification::RoomFull => Self::RoomFull,
            Notification::NoRoom => Self::NoRoom,
            Notification::OpponentLeft => Self::OpponentLeft,
            Notification::GameStart { role } => Self::GameStart {
                role: role.as_str().to_string(),
            },
            Notification::MoveMade { position } => Self::MoveMade {
                position: *position,
            },
            Notification::GameOver { winner } => Self::GameOver {
                winner: winner.map(Mark::as_str).unwrap_or_default().to_string(),
                draw: winner.is_none(),
            },
            Notification::Reset => Self::Reset,
            Notification::RoomExpired => Self::RoomExpired,
            Notification::Error { code, message } => Self::Error {
                code: code.as_str().to_string(),
                message: message.clone(),
            },
        }
    }
}

// ========================================
// Domain → HTTP DTO
// ========================================

impl From<&Room> for http::RoomSummaryDto {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.as_str().to_string(),
            players: room
                .players()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
            full: room.is_full(),
            status: status_str(room.status()).to_string(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&Room> for http::RoomDetailDto {
    fn from(room: &Room) -> Self {
        let status = room.status();
        Self {
            id: room.id.as_str().to_string(),
            players: room
                .players()
                .iter()
                .map(|p| http::PlayerDetailDto {
                    name: p.name().to_string(),
                    role: room
                        .role_of(p.connection_id())
                        .map(|mark| mark.as_str().to_string()),
                })
                .collect(),
            status: status_str(status).to_string(),
            board: room
                .board()
                .cells()
                .iter()
                .map(|cell| cell.map(Mark::as_str).unwrap_or_default().to_string())
                .collect(),
            next_mark: (status == RoomStatus::Playing)
                .then(|| room.board().next_mark().as_str().to_string()),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}
