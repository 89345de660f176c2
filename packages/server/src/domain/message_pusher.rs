//! MessagePusher trait 定義
//!
//! クライアントへの通知のインターフェース。送信方式（WebSocket など）は
//! Infrastructure 層が実装します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{ConnectionId, MessagePushError, Notification};

/// クライアントへ送るエンコード済みフレームのチャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// クライアントの登録を解除
    async fn unregister_client(&self, connection_id: &ConnectionId);

    /// 特定のクライアントに通知を送る
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        notification: &Notification,
    ) -> Result<(), MessagePushError>;

    /// 複数のクライアントに通知を送る（一部の失敗は許容）
    async fn broadcast(
        &self,
        targets: &[ConnectionId],
        notification: &Notification,
    ) -> Result<(), MessagePushError>;
}
