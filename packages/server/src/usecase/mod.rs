//! UseCase 層
//!
//! 接続ごとのイベント（接続・参加・退出・手・再戦・切断）と、部屋の作成・
//! 期限切れ削除・参照を扱います。ドメイン層の trait にのみ依存します。

mod connect_player;
mod create_room;
mod disconnect_player;
pub mod error;
mod get_rooms;
mod join_room;
mod leave_room;
mod make_move;
mod play_again;
mod reap_room;
mod room_access;

#[cfg(test)]
mod test_support;

pub use connect_player::ConnectPlayerUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect_player::{DisconnectOutcome, DisconnectPlayerUseCase};
pub use error::{
    CreateRoomError, GetRoomDetailError, JoinRoomError, LeaveRoomError, MakeMoveError,
    PlayAgainError,
};
pub use get_rooms::{GetRoomDetailUseCase, GetRoomsUseCase};
pub use join_room::{JoinOutcome, JoinRoomUseCase};
pub use leave_room::LeaveRoomUseCase;
pub use make_move::MakeMoveUseCase;
pub use play_again::PlayAgainUseCase;
pub use reap_room::{DEFAULT_GRACE_PERIOD, ReapRoomUseCase};
