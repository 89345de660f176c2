//! UseCase: 手の適用
//!
//! 手を盤面に適用し、相手に `move_made` を送ります。対局が終了した場合は
//! その後に `game_over` を部屋の全員に送ります。不正な手は盤面を変更せず、
//! エラーとして呼び出し元（手を打った本人）にだけ返します。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, Mark, MessagePusher, MoveOutcome, Notification, RoomId, RoomRepository,
};

use super::{
    error::MakeMoveError,
    room_access::{lock_live_room, notify_all},
};

/// 手の適用のユースケース
pub struct MakeMoveUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl MakeMoveUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 手を適用して結果を通知する
    ///
    /// # Returns
    ///
    /// * `Ok(MoveOutcome)` - 手が受理された（対局継続・勝利・引き分け）
    /// * `Err(MakeMoveError)` - 部屋が無い、または手が拒否された
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        position: usize,
        mark: Mark,
    ) -> Result<MoveOutcome, MakeMoveError> {
        let mut room = lock_live_room(self.repository.as_ref(), &room_id)
            .await
            .ok_or_else(|| MakeMoveError::RoomNotFound(room_id.to_string()))?;

        let outcome = room.apply_move(&connection_id, position, mark)?;
        tracing::debug!(
            "Room '{}': {} played {} at {}",
            room_id,
            connection_id,
            mark,
            position
        );

        notify_all(
            self.message_pusher.as_ref(),
            &room.connection_ids_except(&connection_id),
            &Notification::MoveMade { position },
        )
        .await;

        let winner = match outcome {
            MoveOutcome::Continue => return Ok(outcome),
            MoveOutcome::Winner(mark) => Some(mark),
            MoveOutcome::Draw => None,
        };
        notify_all(
            self.message_pusher.as_ref(),
            &room.connection_ids(),
            &Notification::GameOver { winner },
        )
        .await;
        tracing::info!("Room '{}' finished: {:?}", room_id, outcome);

        Ok(outcome)
    }
}
