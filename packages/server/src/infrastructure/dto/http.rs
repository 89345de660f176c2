//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub success: bool,
    pub message: String,
}

/// `POST /create_room`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    pub success: bool,
    pub room_id: String,
}

/// Room summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummaryDto {
    pub id: String,
    pub players: Vec<String>,
    pub full: bool,
    pub status: String,
    pub created_at: String,
}

/// Player detail for room detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDetailDto {
    pub name: String,
    /// `"X"`, `"O"`, or absent while slots are unassigned
    pub role: Option<String>,
}

/// Room detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetailDto {
    pub id: String,
    pub players: Vec<PlayerDetailDto>,
    pub status: String,
    /// Nine cells, row-major; `""` for an empty cell
    pub board: Vec<String>,
    pub next_mark: Option<String>,
    pub created_at: String,
}
