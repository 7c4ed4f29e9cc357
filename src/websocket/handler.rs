//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs one dashboard session per
//! connection.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::SessionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::DashboardSession;
use crate::ratings::RatingStore;

/// WebSocket upgrade handler
///
/// Entry point for the dashboard page's live connection.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.hub);
    let store = Arc::clone(&state.store);
    ws.on_upgrade(move |socket| handle_socket(socket, hub, store))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<SessionHub>, store: Arc<RatingStore>) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let session_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected dashboard session");
            if let Ok(text) = serde_json::to_string(&ServerMessage::error(e.to_string())) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    let mut session = DashboardSession::new(store);

    let connected = ServerMessage::Connected {
        session_id: session_id.clone(),
        view: Box::new(session.view()),
    };
    if hub.send_to(&session_id, connected).await.is_err() {
        tracing::error!(session_id = %session_id, "Failed to queue connected message");
        hub.unregister(&session_id).await;
        return;
    }

    let id_for_send = session_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            session_id = %id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let hub_for_recv = Arc::clone(&hub);
    let id_for_recv = session_id.clone();

    // Task to receive slider events and reply with recomputed views
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            let reply = match result {
                Ok(Message::Text(text)) => handle_text(&mut session, &id_for_recv, &text),
                Ok(Message::Binary(_)) => {
                    ServerMessage::error("Binary messages not supported")
                }
                // Axum answers pings itself
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => continue,
                Ok(Message::Close(_)) => {
                    tracing::debug!(session_id = %id_for_recv, "Client requested close");
                    break;
                }
                Err(e) => {
                    tracing::debug!(
                        session_id = %id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            };

            if hub_for_recv.send_to(&id_for_recv, reply).await.is_err() {
                break;
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    hub.unregister(&session_id).await;
}

/// Turn one text frame into the reply for it
///
/// Malformed or rejected input produces an error reply and leaves the
/// session untouched.
fn handle_text(session: &mut DashboardSession, session_id: &str, text: &str) -> ServerMessage {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::debug!(
                session_id = %session_id,
                error = %e,
                text = %text,
                "Invalid client message"
            );
            return ServerMessage::error(format!("Invalid message format: {}", e));
        }
    };

    let Some(event) = message.into_event() else {
        return ServerMessage::Pong;
    };

    match session.apply(&event) {
        Ok(view) => ServerMessage::update(view),
        Err(e) => {
            tracing::debug!(session_id = %session_id, error = %e, "Slider event rejected");
            ServerMessage::error(e.to_string())
        }
    }
}
