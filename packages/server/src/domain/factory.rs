//! Factories for domain identifiers.

use rand::Rng;

use super::{ROOM_ID_LEN, RoomId};

/// Generates room identifiers.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Random identifier of six uppercase letters.
    ///
    /// Uniqueness is not guaranteed here; the repository refuses duplicates.
    pub fn generate() -> RoomId {
        let mut rng = rand::rng();
        let value: String = (0..ROOM_ID_LEN)
            .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
            .collect();
        RoomId::from_generated(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_valid_ids() {
        // テスト項目: 生成された RoomId は 6 文字の大文字アルファベット
        for _ in 0..100 {
            // when (操作):
            let id = RoomIdFactory::generate();

            // then (期待する結果):
            assert_eq!(id.as_str().len(), ROOM_ID_LEN);
            assert!(id.as_str().chars().all(|c| c.is_ascii_uppercase()));
        }
    }
}
