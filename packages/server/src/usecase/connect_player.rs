//! UseCase: プレイヤーの接続
//!
//! WebSocket のアップグレード直後に呼ばれ、送信チャンネルを登録して
//! `connected` を通知します。接続しただけではどの部屋にも所属しません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, Notification, PusherChannel};

use super::room_access::notify;

/// プレイヤー接続のユースケース
pub struct ConnectPlayerUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectPlayerUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録し、本人に `connected` を送る
    pub async fn execute(&self, connection_id: ConnectionId, sender: PusherChannel) {
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;
        notify(
            self.message_pusher.as_ref(),
            &connection_id,
            &Notification::Connected,
        )
        .await;
        tracing::info!("Connection '{}' established", connection_id);
    }
}
