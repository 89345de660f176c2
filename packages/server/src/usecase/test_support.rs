//! Test helpers for the use case tests.

use std::{sync::Arc, time::Duration};

use serde_json::Value;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, MessagePusher, Room, RoomId, RoomRepository, SharedRoom, Timestamp},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
};

use super::{
    DisconnectPlayerUseCase, JoinRoomUseCase, LeaveRoomUseCase, MakeMoveUseCase,
    PlayAgainUseCase, ReapRoomUseCase,
};

pub(crate) fn conn(id: &str) -> ConnectionId {
    ConnectionId::new(id.to_string()).unwrap()
}

pub(crate) fn room_id(value: &str) -> RoomId {
    RoomId::new(value.to_string()).unwrap()
}

/// Frames received by one fake client.
pub(crate) struct Inbox {
    rx: mpsc::UnboundedReceiver<String>,
}

impl Inbox {
    /// Everything pushed so far, decoded.
    pub(crate) fn drain(&mut self) -> Vec<Value> {
        let mut frames = Vec::new();
        while let Ok(frame) = self.rx.try_recv() {
            frames.push(serde_json::from_str(&frame).unwrap());
        }
        frames
    }

    /// `type` of everything pushed so far.
    pub(crate) fn drain_types(&mut self) -> Vec<String> {
        self.drain()
            .into_iter()
            .map(|frame| frame["type"].as_str().unwrap().to_string())
            .collect()
    }
}

/// In-memory repository and pusher wired together, plus use case builders.
pub(crate) struct Harness {
    pub(crate) repository: Arc<InMemoryRoomRepository>,
    pub(crate) pusher: Arc<WebSocketMessagePusher>,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self {
            repository: Arc::new(InMemoryRoomRepository::new()),
            pusher: Arc::new(WebSocketMessagePusher::new()),
        }
    }

    /// Register a fake client with the pusher.
    pub(crate) async fn connect(&self, id: &str) -> Inbox {
        let (tx, rx) = mpsc::unbounded_channel();
        self.pusher.register_client(conn(id), tx).await;
        Inbox { rx }
    }

    pub(crate) async fn create_room(&self, id: &str) -> SharedRoom {
        self.repository
            .insert_room(Room::new(room_id(id), Timestamp::new(0)))
            .await
            .unwrap()
    }

    /// Clone of the room's current state.
    pub(crate) async fn room_snapshot(&self, id: &str) -> Room {
        let room = self.repository.find_room(&room_id(id)).await.unwrap();
        room.lock().await.clone()
    }

    pub(crate) async fn room_exists(&self, id: &str) -> bool {
        self.repository.find_room(&room_id(id)).await.is_some()
    }

    pub(crate) fn join_room(&self) -> JoinRoomUseCase {
        JoinRoomUseCase::new(self.repository.clone(), self.pusher.clone())
    }

    pub(crate) fn leave_room(&self) -> LeaveRoomUseCase {
        LeaveRoomUseCase::new(self.repository.clone(), self.pusher.clone())
    }

    pub(crate) fn make_move(&self) -> MakeMoveUseCase {
        MakeMoveUseCase::new(self.repository.clone(), self.pusher.clone())
    }

    pub(crate) fn play_again(&self) -> PlayAgainUseCase {
        PlayAgainUseCase::new(self.repository.clone(), self.pusher.clone())
    }

    pub(crate) fn disconnect(&self) -> DisconnectPlayerUseCase {
        DisconnectPlayerUseCase::new(self.repository.clone(), self.pusher.clone())
    }

    pub(crate) fn reaper(&self, grace_period: Duration) -> Arc<ReapRoomUseCase> {
        Arc::new(ReapRoomUseCase::new(
            self.repository.clone(),
            self.pusher.clone(),
            grace_period,
        ))
    }

    /// Create `id`, join alice ("a") and bob ("b"), and drain the join traffic.
    pub(crate) async fn started_room(&self, id: &str) -> (Inbox, Inbox) {
        self.create_room(id).await;
        let mut alice = self.connect("a").await;
        let mut bob = self.connect("b").await;
        let join = self.join_room();
        join.execute(conn("a"), room_id(id), "Alice".to_string())
            .await
            .unwrap();
        join.execute(conn("b"), room_id(id), "Bob".to_string())
            .await
            .unwrap();
        alice.drain();
        bob.drain();
        (alice, bob)
    }
}
