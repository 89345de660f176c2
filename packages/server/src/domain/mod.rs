//! Domain layer: entities, value objects and the interfaces the use cases
//! depend on.

pub mod entity;
pub mod error;
pub mod factory;
pub mod message_pusher;
pub mod notification;
pub mod repository;
pub mod value_object;

pub use entity::{Board, CELL_COUNT, MAX_PLAYERS, MoveOutcome, Outcome, Player, Room, RoomStatus};
pub use error::{BoardError, MessagePushError, RepositoryError, RoomError, ValueObjectError};
pub use factory::RoomIdFactory;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use notification::{ErrorCode, Notification};
pub use repository::{RoomRepository, SharedRoom};
pub use value_object::{ConnectionId, Mark, ROOM_ID_LEN, RoomId, Timestamp};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
