//! UseCase: 部屋の一覧・詳細の取得
//!
//! HTTP API 向けの読み取り専用ユースケース。部屋のロックは複製を作る間だけ保持します。

use std::sync::Arc;

use crate::domain::{Room, RoomId, RoomRepository};

use super::error::GetRoomDetailError;

/// 部屋一覧取得のユースケース
pub struct GetRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 全ての部屋の複製を作成時刻・ID 順で返す
    pub async fn execute(&self) -> Vec<Room> {
        let mut rooms = Vec::new();
        for room in self.repository.list_rooms().await {
            rooms.push(room.lock().await.clone());
        }
        rooms.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        rooms
    }
}

/// 部屋詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomDetailUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 指定した部屋の複製を返す（ID が不正な場合も RoomNotFound）
    pub async fn execute(&self, room_id: String) -> Result<Room, GetRoomDetailError> {
        let room_id = RoomId::new(room_id).map_err(|_| GetRoomDetailError::RoomNotFound)?;
        let room = self
            .repository
            .find_room(&room_id)
            .await
            .ok_or(GetRoomDetailError::RoomNotFound)?;
        let snapshot = room.lock().await.clone();
        Ok(snapshot)
    }
}
