//! UseCase: 再戦
//!
//! X / O を入れ替えて盤面を空にし、部屋の全員に `reset` を送ります。
//! 対局の途中でも受け付けます。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Notification, RoomId, RoomRepository};

use super::{
    error::PlayAgainError,
    room_access::{lock_live_room, notify_all},
};

/// 再戦のユースケース
pub struct PlayAgainUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl PlayAgainUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
    ) -> Result<(), PlayAgainError> {
        let mut room = lock_live_room(self.repository.as_ref(), &room_id)
            .await
            .ok_or_else(|| PlayAgainError::RoomNotFound(room_id.to_string()))?;

        if !room.contains(&connection_id) {
            return Err(PlayAgainError::NotInRoom(room_id.to_string()));
        }
        room.swap_slots()
            .map_err(|_| PlayAgainError::GameNotStarted(room_id.to_string()))?;
        room.reset_board();

        notify_all(
            self.message_pusher.as_ref(),
            &room.connection_ids(),
            &Notification::Reset,
        )
        .await;
        tracing::info!(
            "Room '{}' rematch requested by {}: X={:?} O={:?}",
            room_id,
            connection_id,
            room.x_player().map(|p| p.name()),
            room.o_player().map(|p| p.name())
        );
        Ok(())
    }
}
