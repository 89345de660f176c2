//! Shared application state.

use std::{sync::Arc, time::Duration};

use tactoe_shared::time::Clock;

use crate::{
    domain::{MessagePusher, RoomRepository},
    usecase::{
        ConnectPlayerUseCase, CreateRoomUseCase, DisconnectPlayerUseCase, GetRoomDetailUseCase,
        GetRoomsUseCase, JoinRoomUseCase, LeaveRoomUseCase, MakeMoveUseCase, PlayAgainUseCase,
        ReapRoomUseCase,
    },
};

/// Use cases reachable from the handlers.
pub struct AppState {
    /// CreateRoomUseCase（部屋作成のユースケース）
    pub create_room_usecase: Arc<CreateRoomUseCase>,
    /// ConnectPlayerUseCase（接続のユースケース）
    pub connect_player_usecase: Arc<ConnectPlayerUseCase>,
    /// DisconnectPlayerUseCase（切断のユースケース）
    pub disconnect_player_usecase: Arc<DisconnectPlayerUseCase>,
    /// JoinRoomUseCase（部屋への参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// LeaveRoomUseCase（部屋からの退出のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// MakeMoveUseCase（手の適用のユースケース）
    pub make_move_usecase: Arc<MakeMoveUseCase>,
    /// PlayAgainUseCase（再戦のユースケース）
    pub play_again_usecase: Arc<PlayAgainUseCase>,
    /// GetRoomsUseCase（部屋一覧取得のユースケース）
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    /// GetRoomDetailUseCase（部屋詳細取得のユースケース）
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
    /// MessagePusher（リクエストへの直接の返信に使用）
    pub message_pusher: Arc<dyn MessagePusher>,
}

impl AppState {
    /// Build every use case on top of one repository and one pusher.
    pub fn new(
        repository: Arc<dyn RoomRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        grace_period: Duration,
    ) -> Self {
        let reaper = Arc::new(ReapRoomUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            grace_period,
        ));
        Self {
            create_room_usecase: Arc::new(CreateRoomUseCase::new(
                repository.clone(),
                reaper,
                clock,
            )),
            connect_player_usecase: Arc::new(ConnectPlayerUseCase::new(message_pusher.clone())),
            disconnect_player_usecase: Arc::new(DisconnectPlayerUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            join_room_usecase: Arc::new(JoinRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            leave_room_usecase: Arc::new(LeaveRoomUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            make_move_usecase: Arc::new(MakeMoveUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            play_again_usecase: Arc::new(PlayAgainUseCase::new(
                repository.clone(),
                message_pusher.clone(),
            )),
            get_rooms_usecase: Arc::new(GetRoomsUseCase::new(repository.clone())),
            get_room_detail_usecase: Arc::new(GetRoomDetailUseCase::new(repository)),
            message_pusher,
        }
    }
}
