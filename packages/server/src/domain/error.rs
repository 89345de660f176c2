//! Domain errors.

use thiserror::Error;

/// Value Object の生成エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("invalid room id '{0}': expected 6 uppercase letters")]
    InvalidRoomId(String),

    #[error("connection id must not be empty")]
    EmptyConnectionId,

    #[error("invalid mark '{0}': expected \"X\" or \"O\"")]
    InvalidMark(String),
}

/// Board への操作エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is out of range (0..=8)")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
}

/// Room への操作エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room is full")]
    RoomFull,

    #[error("slots are already assigned")]
    DuplicateSlotAssignment,

    #[error("slots can only be assigned to the two players in the room")]
    InvalidSlotAssignment,

    #[error("connection '{0}' is not a player in this room")]
    NotInRoom(String),

    #[error("the game has not started yet")]
    GameNotStarted,

    #[error("the game is already over")]
    GameFinished,

    #[error("mark {0} does not belong to this player")]
    WrongMark(String),

    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Repository のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("room '{0}' is already registered")]
    DuplicateRoomId(String),
}

/// MessagePusher のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
