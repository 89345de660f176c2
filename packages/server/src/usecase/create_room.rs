//! UseCase: 部屋の作成
//!
//! HTTP の部屋作成エンドポイントから呼ばれ、部屋を登録して期限切れ削除を予約します。

use std::sync::Arc;

use tactoe_shared::time::Clock;

use crate::domain::{RepositoryError, Room, RoomId, RoomIdFactory, RoomRepository, Timestamp};

use super::{ReapRoomUseCase, error::CreateRoomError};

/// How many fresh ids are tried before giving up on a collision streak.
const MAX_ID_ATTEMPTS: usize = 8;

/// 部屋作成のユースケース
pub struct CreateRoomUseCase {
    repository: Arc<dyn RoomRepository>,
    reaper: Arc<ReapRoomUseCase>,
    clock: Arc<dyn Clock>,
    generate_id: fn() -> RoomId,
}

impl CreateRoomUseCase {
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        reaper: Arc<ReapRoomUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            reaper,
            clock,
            generate_id: RoomIdFactory::generate,
        }
    }

    #[cfg(test)]
    fn with_id_generator(mut self, generate_id: fn() -> RoomId) -> Self {
        self.generate_id = generate_id;
        self
    }

    /// 部屋を作成して登録し、期限切れ削除を予約する
    ///
    /// # Returns
    ///
    /// * `Ok(RoomId)` - クライアントに配布する部屋 ID
    /// * `Err(CreateRoomError)` - 一意な ID を確保できなかった
    pub async fn execute(&self) -> Result<RoomId, CreateRoomError> {
        let created_at = Timestamp::new(self.clock.now_millis());

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let room_id = (self.generate_id)();
            match self
                .repository
                .insert_room(Room::new(room_id.clone(), created_at))
                .await
            {
                Ok(_) => {
                    self.reaper.schedule(room_id.clone());
                    tracing::info!(
                        "Room '{}' created ({} open), expires in {:?} unless two players join",
                        room_id,
                        self.repository.count_rooms().await,
                        self.reaper.grace_period()
                    );
                    return Ok(room_id);
                }
                Err(RepositoryError::DuplicateRoomId(id)) => {
                    tracing::warn!("Room id '{}' collided (attempt {})", id, attempt);
                }
            }
        }

        tracing::error!("Gave up allocating a room id after {} attempts", MAX_ID_ATTEMPTS);
        Err(CreateRoomError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }
}
