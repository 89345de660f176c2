//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ErrorCode, Mark, Notification, RoomId},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that forwards frames queued for this connection to its WebSocket.
///
/// # Arguments
///
/// * `rx` - Channel receiver fed by the MessagePusher
/// * `sender` - WebSocket sink of this connection
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::generate();
    let (tx, rx) = mpsc::unbounded_channel();

    // register_client is called inside the UseCase
    state
        .connect_player_usecase
        .execute(connection_id.clone(), tx)
        .await;

    let (sender, mut receiver) = socket.split();
    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received from '{}': {}", connection_id_clone, text);
                    dispatch(&state_clone, &connection_id_clone, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", connection_id_clone);
                    break;
                }
                // Ping/pong is handled by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let outcome = state
        .disconnect_player_usecase
        .execute(connection_id.clone())
        .await;
    tracing::debug!("Connection '{}' cleaned up: {:?}", connection_id, outcome);
}

/// Parse one inbound frame and run the matching use case.
///
/// Rejections are answered to this connection only.
async fn dispatch(state: &AppState, connection_id: &ConnectionId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Malformed message from '{}': {}", connection_id, e);
            reply(
                state,
                connection_id,
                Notification::error(ErrorCode::InvalidMessage, e.to_string()),
            )
            .await;
            return;
        }
    };

    let rejection = match message {
        ClientMessage::JoinRoom { room_id, name } => match RoomId::new(room_id) {
            Ok(room_id) => state
                .join_room_usecase
                .execute(connection_id.clone(), room_id, name)
                .await
                .err()
                .map(|e| (e.to_string(), e.notification())),
            Err(e) => Some((e.to_string(), Notification::NoRoom)),
        },
        ClientMessage::LeaveRoom { room_id } => match RoomId::new(room_id) {
            Ok(room_id) => state
                .leave_room_usecase
                .execute(connection_id.clone(), room_id)
                .await
                .err()
                .map(|e| (e.to_string(), e.notification())),
            Err(e) => Some((e.to_string(), Notification::NoRoom)),
        },
        ClientMessage::Move {
            room_id,
            position,
            mark,
        } => match (RoomId::new(room_id), mark.parse::<Mark>()) {
            (Err(e), _) => Some((e.to_string(), Notification::NoRoom)),
            (_, Err(e)) => Some((
                e.to_string(),
                Notification::error(ErrorCode::InvalidMessage, e.to_string()),
            )),
            (Ok(room_id), Ok(mark)) => state
                .make_move_usecase
                .execute(connection_id.clone(), room_id, position, mark)
                .await
                .err()
                .map(|e| (e.to_string(), e.notification())),
        },
        ClientMessage::PlayAgain { room_id } => match RoomId::new(room_id) {
            Ok(room_id) => state
                .play_again_usecase
                .execute(connection_id.clone(), room_id)
                .await
                .err()
                .map(|e| (e.to_string(), e.notification())),
            Err(e) => Some((e.to_string(), Notification::NoRoom)),
        },
    };

    if let Some((reason, notification)) = rejection {
        tracing::info!("Rejected request from '{}': {}", connection_id, reason);
        reply(state, connection_id, notification).await;
    }
}

async fn reply(state: &AppState, connection_id: &ConnectionId, notification: Notification) {
    if let Err(e) = state
        .message_pusher
        .push_to(connection_id, &notification)
        .await
    {
        tracing::warn!("Failed to reply to '{}': {}", connection_id, e);
    }
}
