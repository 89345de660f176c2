//! UseCase: 部屋からの退出
//!
//! 明示的な退出要求を処理します。残ったプレイヤーには `opponent_left` を送り、
//! 部屋が空になった場合は部屋を削除します。接続自体は維持されます。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository};

use super::{
    error::LeaveRoomError,
    room_access::{lock_live_room, remove_member},
};

/// 部屋からの退出のユースケース
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl LeaveRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 退出を実行
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - 退出成功（部屋を削除した場合 `true`）
    /// * `Err(LeaveRoomError)` - 部屋が無い、またはメンバーではない
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
    ) -> Result<bool, LeaveRoomError> {
        let mut room = lock_live_room(self.repository.as_ref(), &room_id)
            .await
            .ok_or_else(|| LeaveRoomError::RoomNotFound(room_id.to_string()))?;

        if !room.contains(&connection_id) {
            return Err(LeaveRoomError::NotInRoom(room_id.to_string()));
        }

        Ok(remove_member(
            self.repository.as_ref(),
            self.message_pusher.as_ref(),
            &mut room,
            &connection_id,
        )
        .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomRepository;
    use crate::usecase::test_support::{Harness, conn, room_id};

    #[tokio::test]
    async fn test_leave_notifies_remaining_player() {
        // テスト項目: 退出すると残ったプレイヤーに opponent_left が届き、スロットが解除される
        // given (前提条件):
        let harness = Harness::new();
        let (mut alice, mut bob) = harness.started_room("QWERTY").await;

        // when (操作):
        let deleted = harness
            .leave_room()
            .execute(conn("a"), room_id("QWERTY"))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(!deleted);
        assert!(alice.drain().is_empty());
        assert_eq!(bob.drain_types(), vec!["opponent_left"]);
        assert_eq!(harness.repository.room_of(&conn("a")).await, None);
        let room = harness.room_snapshot("QWERTY").await;
        assert_eq!(room.players().len(), 1);
        assert!(!room.has_both_slots());
    }

    #[tokio::test]
    async fn test_last_player_leaving_deletes_room() {
        // テスト項目: 最後のプレイヤーが退出すると部屋が削除される
        // given (前提条件):
        let harness = Harness::new();
        harness.create_room("QWERTY").await;
        let _alice = harness.connect("a").await;
        harness
            .join_room()
            .execute(conn("a"), room_id("QWERTY"), "Alice".to_string())
            .await
            .unwrap();

        // when (操作):
        let deleted = harness
            .leave_room()
            .execute(conn("a"), room_id("QWERTY"))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(deleted);
        assert!(!harness.room_exists("QWERTY").await);
    }

    #[tokio::test]
    async fn test_leave_by_non_member() {
        // テスト項目: メンバーでない接続の退出要求は拒否され、部屋は変わらない
        // given (前提条件):
        let harness = Harness::new();
        let (_alice, mut bob) = harness.started_room("QWERTY").await;

        // when (操作):
        let result = harness
            .leave_room()
            .execute(conn("c"), room_id("QWERTY"))
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(LeaveRoomError::NotInRoom("QWERTY".to_string())));
        assert!(bob.drain().is_empty());
        assert!(harness.room_snapshot("QWERTY").await.has_both_slots());
    }

    #[tokio::test]
    async fn test_leave_unknown_room() {
        // テスト項目: 存在しない部屋からの退出は RoomNotFound になる
        // given (前提条件):
        let harness = Harness::new();

        // when (操作):
        let result = harness
            .leave_room()
            .execute(conn("a"), room_id("QWERTY"))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(LeaveRoomError::RoomNotFound("QWERTY".to_string()))
        );
    }
}
