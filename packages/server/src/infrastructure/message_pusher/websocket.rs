//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - 接続ごとの `UnboundedSender` を管理
//! - ドメインの `Notification` を JSON フレームに変換して送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! 送信はチャンネルへの書き込みのみで待機しないため、部屋のロックを保持したまま
//! 呼び出しても通知の順序が保たれます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, Notification, PusherChannel},
    infrastructure::dto::websocket::ServerMessage,
};

/// WebSocket を使った MessagePusher 実装
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    ///
    /// Key: ConnectionId
    /// Value: PusherChannel
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 登録中のクライアント数
    pub async fn client_count(&self) -> usize {
        self.clients.lock().await.len()
    }

    fn encode(notification: &Notification) -> Result<String, MessagePushError> {
        serde_json::to_string(&ServerMessage::from(notification))
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", connection_id);
        clients.insert(connection_id, sender);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id);
        tracing::debug!("Client '{}' unregistered from MessagePusher", connection_id);
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        let content = Self::encode(notification)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed {:?} to client '{}'", notification, connection_id);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        notification: &Notification,
    ) -> Result<(), MessagePushError> {
        if targets.is_empty() {
            return Ok(());
        }
        let content = Self::encode(notification)?;
        let clients = self.clients.lock().await;

        for target in targets {
            match clients.get(target) {
                // ブロードキャストでは一部の送信失敗を許容
                Some(sender) => {
                    if let Err(e) = sender.send(content.clone()) {
                        tracing::warn!("Failed to push message to client '{}': {}", target, e);
                    } else {
                        tracing::debug!("Broadcasted {:?} to client '{}'", notification, target);
                    }
                }
                None => {
                    tracing::warn!("Client '{}' not found during broadcast, skipping", target);
                }
            }
        }

        Ok(())
    }
}
