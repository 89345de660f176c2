//! UseCase: プレイヤーの切断
//!
//! WebSocket が閉じた時に呼ばれます。送信チャンネルの登録を解除し、
//! 所属していた部屋があれば退出と同じ処理を行います。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, RoomId, RoomRepository};

use super::room_access::{lock_live_room, remove_member};

/// 切断の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectOutcome {
    /// 所属していた部屋
    pub room_id: Option<RoomId>,
    /// この切断で部屋が空になり削除されたか
    pub room_deleted: bool,
}

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectPlayerUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self, connection_id: ConnectionId) -> DisconnectOutcome {
        self.message_pusher.unregister_client(&connection_id).await;

        let Some(room_id) = self.repository.room_of(&connection_id).await else {
            tracing::info!("Connection '{}' closed outside any room", connection_id);
            return DisconnectOutcome {
                room_id: None,
                room_deleted: false,
            };
        };

        let room_deleted = match lock_live_room(self.repository.as_ref(), &room_id).await {
            Some(mut room) => {
                remove_member(
                    self.repository.as_ref(),
                    self.message_pusher.as_ref(),
                    &mut room,
                    &connection_id,
                )
                .await
            }
            None => {
                // 部屋が先に削除されていた場合は紐付けだけ残っている
                self.repository.unbind_connection(&connection_id).await;
                false
            }
        };

        tracing::info!(
            "Connection '{}' closed, left room '{}' (deleted: {})",
            connection_id,
            room_id,
            room_deleted
        );
        DisconnectOutcome {
            room_id: Some(room_id),
            room_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockMessagePusher, RoomRepository};
    use crate::infrastructure::repository::InMemoryRoomRepository;
    use crate::usecase::test_support::{Harness, conn, room_id};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 切断で部屋が空になった場合に限り部屋が削除されること
    // - 残ったプレイヤーに opponent_left が届くこと
    // - 部屋に所属していない接続の切断は送信登録の解除だけで終わること
    // ========================================

    #[tokio::test]
    async fn test_disconnect_with_opponent_keeps_room() {
        // テスト項目: 相手が残っている場合は部屋を残し、相手に opponent_left を送る
        // given (前提条件):
        let harness = Harness::new();
        let (_alice, mut bob) = harness.started_room("QWERTY").await;

        // when (操作):
        let outcome = harness.disconnect().execute(conn("a")).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            DisconnectOutcome {
                room_id: Some(room_id("QWERTY")),
                room_deleted: false
            }
        );
        assert_eq!(bob.drain_types(), vec!["opponent_left"]);
        assert!(harness.room_exists("QWERTY").await);
        assert_eq!(harness.pusher.client_count().await, 1);
    }

    #[tokio::test]
    async fn test_disconnect_of_both_players_deletes_room() {
        // テスト項目: 最後のプレイヤーの切断で部屋が削除される
        // given (前提条件):
        let harness = Harness::new();
        let (_alice, _bob) = harness.started_room("QWERTY").await;
        let disconnect = harness.disconnect();
        disconnect.execute(conn("a")).await;

        // when (操作):
        let outcome = disconnect.execute(conn("b")).await;

        // then (期待する結果):
        assert!(outcome.room_deleted);
        assert!(!harness.room_exists("QWERTY").await);
        assert_eq!(harness.repository.room_of(&conn("b")).await, None);
    }

    #[tokio::test]
    async fn test_disconnect_with_stale_binding() {
        // テスト項目: 部屋が既に削除されていても紐付けは解除される
        // given (前提条件):
        let harness = Harness::new();
        harness
            .repository
            .bind_connection(conn("a"), room_id("QWERTY"))
            .await;

        // when (操作):
        let outcome = harness.disconnect().execute(conn("a")).await;

        // then (期待する結果):
        assert_eq!(outcome.room_id, Some(room_id("QWERTY")));
        assert!(!outcome.room_deleted);
        assert_eq!(harness.repository.room_of(&conn("a")).await, None);
    }

    #[tokio::test]
    async fn test_disconnect_outside_room_only_unregisters() {
        // テスト項目: 部屋に所属していない接続は送信登録の解除だけが行われる
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_unregister_client()
            .withf(|id| id.as_str() == "a")
            .times(1)
            .returning(|_| ());
        pusher.expect_push_to().never();
        pusher.expect_broadcast().never();
        let usecase = DisconnectPlayerUseCase::new(
            Arc::new(InMemoryRoomRepository::new()),
            Arc::new(pusher),
        );

        // when (操作):
        let outcome = usecase.execute(conn("a")).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            DisconnectOutcome {
                room_id: None,
                room_deleted: false
            }
        );
    }
}
