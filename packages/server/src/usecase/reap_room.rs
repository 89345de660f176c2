//! UseCase: 期限切れの部屋の削除
//!
//! 部屋の作成時に予約され、猶予時間が経過するまでに一度も 2 人揃わなかった
//! 部屋を削除します。タイマー自体は取り消さず、発火時に現在の状態を確認します。

use std::{sync::Arc, time::Duration};

use tokio::task::JoinHandle;

use crate::domain::{MessagePusher, Notification, RoomId, RoomRepository};

use super::room_access::{lock_live_room, notify_all};

/// Default grace window for a room to reach two players.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(60);

/// 期限切れの部屋を削除するユースケース
pub struct ReapRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    message_pusher: Arc<dyn MessagePusher>,
    grace_period: Duration,
}

impl ReapRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        grace_period: Duration,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            grace_period,
        }
    }

    pub fn grace_period(&self) -> Duration {
        self.grace_period
    }

    /// 猶予時間後に `execute` を実行するタスクを起動する
    pub fn schedule(self: &Arc<Self>, room_id: RoomId) -> JoinHandle<()> {
        let reaper = Arc::clone(self);
        tokio::spawn(async move {
            tokio::time::sleep(reaper.grace_period).await;
            reaper.execute(&room_id).await;
        })
    }

    /// 部屋が存在し、一度も対局が始まっていなければ削除する
    ///
    /// # Returns
    ///
    /// 部屋を削除した場合 `true`（既に削除済み、または一度でも対局が始まっていれば `false`）
    pub async fn execute(&self, room_id: &RoomId) -> bool {
        let Some(room) = lock_live_room(self.repository.as_ref(), room_id).await else {
            tracing::debug!("Room '{}' already gone when its grace period ended", room_id);
            return false;
        };

        if room.has_started() {
            tracing::debug!("Room '{}' reached two players, keeping it", room_id);
            return false;
        }

        let stranded = room.connection_ids();
        for connection_id in &stranded {
            self.repository.unbind_connection(connection_id).await;
        }
        let deleted = self.repository.remove_room(room_id).await;
        notify_all(
            self.message_pusher.as_ref(),
            &stranded,
            &Notification::RoomExpired,
        )
        .await;

        tracing::info!(
            "Room '{}' expired after {:?} without two players ({} stranded)",
            room_id,
            self.grace_period,
            stranded.len()
        );
        deleted
    }
}
