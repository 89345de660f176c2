//! Value Objects
//!
//! 識別子やマークなど、不変で値そのものが意味を持つドメインの型を定義します。

use std::{fmt, str::FromStr};

use serde::Serialize;

use super::error::ValueObjectError;

/// Number of characters in a room identifier.
pub const ROOM_ID_LEN: usize = 6;

/// Room identifier: six uppercase ASCII letters (e.g. `QWERTY`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Create a RoomId, validating length and alphabet.
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.len() != ROOM_ID_LEN {
            return Err(ValueObjectError::InvalidRoomId(value));
        }
        if !value.chars().all(|ch| ch.is_ascii_uppercase()) {
            return Err(ValueObjectError::InvalidRoomId(value));
        }
        Ok(Self(value))
    }

    /// Wrap a value produced by [`super::RoomIdFactory`], which only emits A..=Z.
    pub(super) fn from_generated(value: String) -> Self {
        debug_assert!(Self::new(value.clone()).is_ok());
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque identifier of one live connection, assigned by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// Create a ConnectionId. Empty identifiers are rejected.
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.is_empty() {
            return Err(ValueObjectError::EmptyConnectionId);
        }
        Ok(Self(value))
    }

    /// Generate a fresh identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A player's mark, which doubles as the slot (role) they hold in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(ValueObjectError::InvalidMark(other.to_string())),
        }
    }
}

/// Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_id_accepts_six_uppercase_letters() {
        // テスト項目: 6 文字の大文字アルファベットは RoomId として受理される
        // given (前提条件):
        let value = "ABCXYZ".to_string();

        // when (操作):
        let result = RoomId::new(value);

        // then (期待する結果):
        assert_eq!(result.map(|id| id.into_string()), Ok("ABCXYZ".to_string()));
    }

    #[test]
    fn test_room_id_rejects_malformed_values() {
        // テスト項目: 長さ・文字種が不正な値は拒否される
        // given (前提条件):
        let candidates = ["", "ABCDE", "ABCDEFG", "abcdef", "ABC1EF", "ÄBCDEF"];

        for candidate in candidates {
            // when (操作):
            let result = RoomId::new(candidate.to_string());

            // then (期待する結果):
            assert_eq!(
                result,
                Err(ValueObjectError::InvalidRoomId(candidate.to_string())),
                "{candidate:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_connection_id_rejects_empty_value() {
        // テスト項目: 空の ConnectionId は拒否される
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = ConnectionId::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyConnectionId));
    }

    #[test]
    fn test_connection_id_generate_is_unique() {
        // テスト項目: 生成される ConnectionId は毎回異なる
        // when (操作):
        let a = ConnectionId::generate();
        let b = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(a, b);
    }

    #[test]
    fn test_mark_parse() {
        // テスト項目: "X" / "O" のみがマークとして解釈される
        assert_eq!("X".parse::<Mark>(), Ok(Mark::X));
        assert_eq!("O".parse::<Mark>(), Ok(Mark::O));
        assert_eq!(
            "x".parse::<Mark>(),
            Err(ValueObjectError::InvalidMark("x".to_string()))
        );
        assert_eq!(Mark::O.to_string(), "O");
    }
}
