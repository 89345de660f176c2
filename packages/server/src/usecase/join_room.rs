//! UseCase: 部屋への参加
//!
//! ## 処理の流れ
//!
//! 1. 既に別の部屋に所属していないか確認
//! 2. 部屋をロックし、プレイヤーを追加して接続と部屋を紐付け
//! 3. 盤面をリセットし、参加通知を送信
//! 4. 2 人揃ったら参加順に X / O を割り当て、それぞれに `game_start` を送信
//!
//! 手順 2〜4 は部屋のロックを保持したまま行うため、同じ部屋への同時参加でも
//! 定員を超えることはありません。

use std::sync::Arc;

use crate::domain::{
    ConnectionId, Mark, MessagePusher, Notification, Player, RoomId, RoomRepository,
};

use super::{
    error::JoinRoomError,
    room_access::{lock_live_room, notify, notify_all},
};

/// 参加の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    /// 参加時点で既に部屋にいたプレイヤーの名前
    pub opponents: Vec<String>,
    /// この参加で対局が始まったかどうか
    pub game_started: bool,
}

/// 部屋への参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    /// 部屋への参加を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 参加する接続
    /// * `room_id` - 参加先の部屋
    /// * `name` - 表示名（検証しない）
    ///
    /// # Returns
    ///
    /// * `Ok(JoinOutcome)` - 参加成功
    /// * `Err(JoinRoomError)` - 部屋が無い・満員・既に参加済み
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
        name: String,
    ) -> Result<JoinOutcome, JoinRoomError> {
        if let Some(current) = self.repository.room_of(&connection_id).await {
            return Err(JoinRoomError::AlreadyInRoom(current.into_string()));
        }

        let mut room = lock_live_room(self.repository.as_ref(), &room_id)
            .await
            .ok_or_else(|| JoinRoomError::RoomNotFound(room_id.to_string()))?;

        room.add_player(Player::new(connection_id.clone(), name.clone()))
            .map_err(|_| JoinRoomError::RoomFull(room_id.to_string()))?;
        self.repository
            .bind_connection(connection_id.clone(), room_id.clone())
            .await;
        room.reset_board();
        tracing::info!(
            "Player '{}' ({}) joined room '{}' ({}/{})",
            name,
            connection_id,
            room_id,
            room.players().len(),
            crate::domain::MAX_PLAYERS
        );

        let opponents = room.other_player_names(&connection_id);
        notify_all(
            self.message_pusher.as_ref(),
            &room.connection_ids_except(&connection_id),
            &Notification::PlayerJoined { name },
        )
        .await;
        notify(
            self.message_pusher.as_ref(),
            &connection_id,
            &Notification::JoinedRoom {
                players: opponents.clone(),
            },
        )
        .await;

        let mut game_started = false;
        if room.is_full() {
            let members = room.connection_ids();
            match room.assign_slots(&members[0], &members[1]) {
                Ok(()) => {
                    for (member, role) in members.iter().zip([Mark::X, Mark::O]) {
                        notify(
                            self.message_pusher.as_ref(),
                            member,
                            &Notification::GameStart { role },
                        )
                        .await;
                    }
                    game_started = true;
                    tracing::info!("Room '{}' started: X={} O={}", room_id, members[0], members[1]);
                }
                Err(e) => {
                    tracing::error!("Could not assign slots in room '{}': {}", room_id, e);
                }
            }
        }

        Ok(JoinOutcome {
            opponents,
            game_started,
        })
    }
}
