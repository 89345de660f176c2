//! Domain entities.

pub mod board;
pub mod player;
pub mod room;

pub use board::{Board, CELL_COUNT, Outcome};
pub use player::Player;
pub use room::{MAX_PLAYERS, MoveOutcome, Room, RoomStatus};
