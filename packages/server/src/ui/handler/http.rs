//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    infrastructure::dto::http::{
        CreateRoomResponse, IndexResponse, RoomDetailDto, RoomSummaryDto,
    },
    ui::state::AppState,
    usecase::GetRoomDetailError,
};

/// Index endpoint
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        success: true,
        message: "tic-tac-toe server is running".to_string(),
    })
}

/// Allocate a new room
pub async fn create_room(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CreateRoomResponse>, StatusCode> {
    match state.create_room_usecase.execute().await {
        Ok(room_id) => Ok(Json(CreateRoomResponse {
            success: true,
            room_id: room_id.into_string(),
        })),
        Err(e) => {
            tracing::error!("Failed to create room: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Json<Vec<RoomSummaryDto>> {
    let rooms = state.get_rooms_usecase.execute().await;
    Json(rooms.iter().map(RoomSummaryDto::from).collect())
}

/// Get room detail by ID
pub async fn get_room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomDetailDto>, StatusCode> {
    match state.get_room_detail_usecase.execute(room_id).await {
        Ok(room) => Ok(Json(RoomDetailDto::from(&room))),
        Err(GetRoomDetailError::RoomNotFound) => Err(StatusCode::NOT_FOUND),
    }
}
