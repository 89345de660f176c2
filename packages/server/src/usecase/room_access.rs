//! Helpers shared by the session use cases.
//!
//! A handler holds the room's lock for its whole check-then-act sequence,
//! including the registry updates and the notifications it emits, so the
//! transitions of one room and their notifications are totally ordered.

use tokio::sync::OwnedMutexGuard;

use crate::domain::{
    ConnectionId, MessagePusher, Notification, Room, RoomId, RoomRepository,
};

/// Lock the room registered under `room_id`.
///
/// Returns `None` when the room is unknown, or when it was removed from the
/// registry while this task waited for the lock. Rooms are only removed
/// under their own lock, so the second lookup is reliable.
pub(crate) async fn lock_live_room(
    repository: &dyn RoomRepository,
    room_id: &RoomId,
) -> Option<OwnedMutexGuard<Room>> {
    let room = repository.find_room(room_id).await?;
    let guard = room.clone().lock_owned().await;
    match repository.find_room(room_id).await {
        Some(current) if std::sync::Arc::ptr_eq(&current, &room) => Some(guard),
        _ => {
            tracing::debug!("Room '{}' was removed while waiting for its lock", room_id);
            None
        }
    }
}

/// Remove `connection_id` from `room`, unbind it, tell the remaining member
/// and delete the room once it is empty. Returns whether the room was deleted.
pub(crate) async fn remove_member(
    repository: &dyn RoomRepository,
    message_pusher: &dyn MessagePusher,
    room: &mut Room,
    connection_id: &ConnectionId,
) -> bool {
    if let Some(player) = room.remove_player(connection_id) {
        tracing::info!(
            "Player '{}' ({}) left room '{}'",
            player.name(),
            connection_id,
            room.id
        );
    }
    repository.unbind_connection(connection_id).await;

    notify_all(message_pusher, &room.connection_ids(), &Notification::OpponentLeft).await;

    if !room.is_empty() {
        return false;
    }
    let deleted = repository.remove_room(&room.id).await;
    if deleted {
        tracing::info!("Room '{}' is empty and was deleted", room.id);
    }
    deleted
}

/// Push to one connection; failures are logged, never propagated.
pub(crate) async fn notify(
    message_pusher: &dyn MessagePusher,
    connection_id: &ConnectionId,
    notification: &Notification,
) {
    if let Err(e) = message_pusher.push_to(connection_id, notification).await {
        tracing::warn!("Failed to notify '{}': {}", connection_id, e);
    }
}

/// Push to several connections; failures are logged, never propagated.
pub(crate) async fn notify_all(
    message_pusher: &dyn MessagePusher,
    targets: &[ConnectionId],
    notification: &Notification,
) {
    if let Err(e) = message_pusher.broadcast(targets, notification).await {
        tracing::warn!("Failed to broadcast {:?}: {}", notification, e);
    }
}
