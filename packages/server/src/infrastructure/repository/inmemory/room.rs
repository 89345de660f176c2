//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。プロセス再起動で状態は失われます。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, RepositoryError, Room, RoomId, RoomRepository, SharedRoom};

/// インメモリ Room Repository 実装
///
/// 2 つの対応表はそれぞれ短時間だけロックされ、保持中に `SharedRoom` を
/// ロックすることはありません。
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// 部屋 ID → Room
    rooms: Mutex<HashMap<RoomId, SharedRoom>>,
    /// 接続 ID → 所属している部屋 ID
    connections: Mutex<HashMap<ConnectionId, RoomId>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn insert_room(&self, room: Room) -> Result<SharedRoom, RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        if rooms.contains_key(&room.id) {
            return Err(RepositoryError::DuplicateRoomId(room.id.into_string()));
        }
        let room_id = room.id.clone();
        let shared = Arc::new(Mutex::new(room));
        rooms.insert(room_id, shared.clone());
        Ok(shared)
    }

    async fn find_room(&self, room_id: &RoomId) -> Option<SharedRoom> {
        let rooms = self.rooms.lock().await;
        rooms.get(room_id).cloned()
    }

    async fn remove_room(&self, room_id: &RoomId) -> bool {
        let mut rooms = self.rooms.lock().await;
        rooms.remove(room_id).is_some()
    }

    async fn list_rooms(&self) -> Vec<SharedRoom> {
        let rooms = self.rooms.lock().await;
        rooms.values().cloned().collect()
    }

    async fn count_rooms(&self) -> usize {
        let rooms = self.rooms.lock().await;
        rooms.len()
    }

    async fn bind_connection(&self, connection_id: ConnectionId, room_id: RoomId) {
        let mut connections = self.connections.lock().await;
        if let Some(previous) = connections.insert(connection_id.clone(), room_id.clone()) {
            tracing::warn!(
                "Connection '{}' was still bound to room '{}', rebound to '{}'",
                connection_id,
                previous,
                room_id
            );
        }
    }

    async fn unbind_connection(&self, connection_id: &ConnectionId) -> Option<RoomId> {
        let mut connections = self.connections.lock().await;
        connections.remove(connection_id)
    }

    async fn room_of(&self, connection_id: &ConnectionId) -> Option<RoomId> {
        let connections = self.connections.lock().await;
        connections.get(connection_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryRoomRepository の部屋の登録・取得・削除
    // - 接続と部屋の紐付け・解除
    //
    // 【なぜこのテストが必要か】
    // - UseCase 層は 2 つの対応表の整合性をこの Repository に依存している
    // - 同じ ID の部屋を上書きしてしまうと、既存の対戦が消えてしまう
    // ========================================

    fn room_id(value: &str) -> RoomId {
        RoomId::new(value.to_string()).unwrap()
    }

    fn conn(value: &str) -> ConnectionId {
        ConnectionId::new(value.to_string()).unwrap()
    }

    fn create_room(value: &str) -> Room {
        Room::new(room_id(value), Timestamp::new(1000))
    }

    #[tokio::test]
    async fn test_insert_and_find_room() {
        // テスト項目: 登録した部屋を ID で取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();

        // when (操作):
        let inserted = repo.insert_room(create_room("ABCDEF")).await.unwrap();
        let found = repo.find_room(&room_id("ABCDEF")).await;

        // then (期待する結果):
        let found = found.expect("room should be registered");
        assert!(Arc::ptr_eq(&inserted, &found));
        assert_eq!(repo.count_rooms().await, 1);
        assert!(repo.find_room(&room_id("ZZZZZZ")).await.is_none());
    }

    #[tokio::test]
    async fn test_insert_duplicate_room_id_is_refused() {
        // テスト項目: 同じ ID の部屋は登録できず、既存の部屋は保持される
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        let original = repo.insert_room(create_room("ABCDEF")).await.unwrap();

        // when (操作):
        let result = repo.insert_room(create_room("ABCDEF")).await;

        // then (期待する結果):
        assert_eq!(
            result.err(),
            Some(RepositoryError::DuplicateRoomId("ABCDEF".to_string()))
        );
        let found = repo.find_room(&room_id("ABCDEF")).await.unwrap();
        assert!(Arc::ptr_eq(&original, &found));
    }

    #[tokio::test]
    async fn test_remove_room_is_idempotent() {
        // テスト項目: 部屋の削除は一度だけ true を返す
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        repo.insert_room(create_room("ABCDEF")).await.unwrap();

        // when (操作):
        let first = repo.remove_room(&room_id("ABCDEF")).await;
        let second = repo.remove_room(&room_id("ABCDEF")).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(repo.count_rooms().await, 0);
    }

    #[tokio::test]
    async fn test_list_rooms() {
        // テスト項目: 登録済みの全ての部屋を取得できる
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();
        repo.insert_room(create_room("AAAAAA")).await.unwrap();
        repo.insert_room(create_room("BBBBBB")).await.unwrap();

        // when (操作):
        let rooms = repo.list_rooms().await;

        // then (期待する結果):
        let mut ids = Vec::new();
        for room in rooms {
            ids.push(room.lock().await.id.as_str().to_string());
        }
        ids.sort();
        assert_eq!(ids, vec!["AAAAAA".to_string(), "BBBBBB".to_string()]);
    }

    #[tokio::test]
    async fn test_bind_and_unbind_connection() {
        // テスト項目: 接続と部屋を紐付け、解除すると元の部屋 ID が返る
        // given (前提条件):
        let repo = InMemoryRoomRepository::new();

        // when (操作):
        repo.bind_connection(conn("alice"), room_id("ABCDEF")).await;

        // then (期待する結果):
        assert_eq!(repo.room_of(&conn("alice")).await, Some(room_id("ABCDEF")));
        assert_eq!(
            repo.unbind_connection(&conn("alice")).await,
            Some(room_id("ABCDEF"))
        );
        assert_eq!(repo.room_of(&conn("alice")).await, None);
        assert_eq!(repo.unbind_connection(&conn("alice")).await, None);
    }
}
