//! Outbound notifications emitted by the session layer.
//!
//! Use cases decide who receives which notification; the transport decides
//! how it is encoded (see `infrastructure::dto`).

use super::Mark;

/// Machine-readable reason attached to [`Notification::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidMessage,
    AlreadyInRoom,
    NotInRoom,
    GameNotStarted,
    GameFinished,
    WrongMark,
    NotYourTurn,
    InvalidPosition,
    CellOccupied,
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidMessage => "invalid_message",
            ErrorCode::AlreadyInRoom => "already_in_room",
            ErrorCode::NotInRoom => "not_in_room",
            ErrorCode::GameNotStarted => "game_not_started",
            ErrorCode::GameFinished => "game_finished",
            ErrorCode::WrongMark => "wrong_mark",
            ErrorCode::NotYourTurn => "not_your_turn",
            ErrorCode::InvalidPosition => "invalid_position",
            ErrorCode::CellOccupied => "cell_occupied",
            ErrorCode::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Connected,
    PlayerJoined { name: String },
    JoinedRoom { players: Vec<String> },
    RoomFull,
    NoRoom,
    OpponentLeft,
    GameStart { role: Mark },
    MoveMade { position: usize },
    /// `winner` is `None` for a draw.
    GameOver { winner: Option<Mark> },
    Reset,
    RoomExpired,
    Error { code: ErrorCode, message: String },
}

impl Notification {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Notification::Error {
            code,
            message: message.into(),
        }
    }
}
