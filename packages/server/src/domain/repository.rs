//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{ConnectionId, RepositoryError, Room, RoomId};

/// 部屋ごとのロック付きハンドル
///
/// 部屋の状態確認と変更、それに伴う通知は、このロックを保持したまま行います。
pub type SharedRoom = Arc<Mutex<Room>>;

/// Room Repository trait
///
/// 部屋 ID → Room と、接続 ID → 部屋 ID の 2 つの対応表を管理します。
/// 2 つの対応表と各 Room のプレイヤーリストの整合性は UseCase 層が保ちます。
///
/// ## ロック順序
///
/// 実装は内部のロックを保持したまま `SharedRoom` をロックしてはいけません。
/// UseCase 層は `SharedRoom` をロックした状態でこの trait のメソッドを呼びます。
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Room を登録する（同じ ID が登録済みならエラー）
    async fn insert_room(&self, room: Room) -> Result<SharedRoom, RepositoryError>;

    /// Room を取得
    async fn find_room(&self, room_id: &RoomId) -> Option<SharedRoom>;

    /// Room を削除（削除した場合 true）
    async fn remove_room(&self, room_id: &RoomId) -> bool;

    /// 登録済みの全ての Room を取得
    async fn list_rooms(&self) -> Vec<SharedRoom>;

    /// 登録済みの Room 数を取得
    async fn count_rooms(&self) -> usize;

    /// 接続と部屋を紐付ける
    async fn bind_connection(&self, connection_id: ConnectionId, room_id: RoomId);

    /// 接続の紐付けを解除（解除前の部屋 ID を返す）
    async fn unbind_connection(&self, connection_id: &ConnectionId) -> Option<RoomId>;

    /// 接続が所属している部屋 ID を取得
    async fn room_of(&self, connection_id: &ConnectionId) -> Option<RoomId>;
}
