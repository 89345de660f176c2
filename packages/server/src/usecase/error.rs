//! UseCase 層のエラー定義
//!
//! 各エラーは、要求したクライアントだけに返す通知に変換できます。

use thiserror::Error;

use crate::domain::{BoardError, ErrorCode, Notification, RoomError};

/// 部屋作成のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateRoomError {
    #[error("could not allocate a unique room id after {0} attempts")]
    IdSpaceExhausted(usize),
}

/// 部屋への参加のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinRoomError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("room '{0}' is full")]
    RoomFull(String),

    #[error("connection is already in room '{0}'")]
    AlreadyInRoom(String),
}

impl JoinRoomError {
    pub fn notification(&self) -> Notification {
        match self {
            JoinRoomError::RoomNotFound(_) => Notification::NoRoom,
            JoinRoomError::RoomFull(_) => Notification::RoomFull,
            JoinRoomError::AlreadyInRoom(_) => {
                Notification::error(ErrorCode::AlreadyInRoom, self.to_string())
            }
        }
    }
}

/// 部屋からの退出のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveRoomError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("connection is not a player in room '{0}'")]
    NotInRoom(String),
}

impl LeaveRoomError {
    pub fn notification(&self) -> Notification {
        match self {
            LeaveRoomError::RoomNotFound(_) => Notification::NoRoom,
            LeaveRoomError::NotInRoom(_) => {
                Notification::error(ErrorCode::NotInRoom, self.to_string())
            }
        }
    }
}

/// 手の適用のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MakeMoveError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("move rejected: {0}")]
    Rejected(#[from] RoomError),
}

impl MakeMoveError {
    pub fn notification(&self) -> Notification {
        match self {
            MakeMoveError::RoomNotFound(_) => Notification::NoRoom,
            MakeMoveError::Rejected(e) => Notification::error(error_code(e), e.to_string()),
        }
    }
}

/// 再戦のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayAgainError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),

    #[error("connection is not a player in room '{0}'")]
    NotInRoom(String),

    #[error("room '{0}' has no assigned players to swap")]
    GameNotStarted(String),
}

impl PlayAgainError {
    pub fn notification(&self) -> Notification {
        match self {
            PlayAgainError::RoomNotFound(_) => Notification::NoRoom,
            PlayAgainError::NotInRoom(_) => {
                Notification::error(ErrorCode::NotInRoom, self.to_string())
            }
            PlayAgainError::GameNotStarted(_) => {
                Notification::error(ErrorCode::GameNotStarted, self.to_string())
            }
        }
    }
}

/// 部屋詳細取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("room not found")]
    RoomNotFound,
}

fn error_code(error: &RoomError) -> ErrorCode {
    match error {
        RoomError::NotInRoom(_) => ErrorCode::NotInRoom,
        RoomError::GameNotStarted => ErrorCode::GameNotStarted,
        RoomError::GameFinished => ErrorCode::GameFinished,
        RoomError::WrongMark(_) => ErrorCode::WrongMark,
        RoomError::NotYourTurn(_) => ErrorCode::NotYourTurn,
        RoomError::Board(BoardError::OutOfRange(_)) => ErrorCode::InvalidPosition,
        RoomError::Board(BoardError::CellOccupied(_)) => ErrorCode::CellOccupied,
        RoomError::RoomFull
        | RoomError::DuplicateSlotAssignment
        | RoomError::InvalidSlotAssignment => ErrorCode::Internal,
    }
}
