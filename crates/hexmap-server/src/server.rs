//! WebSocket server and connection handling.
//!
//! Each connection is independent: a `Generate` request runs the core
//! engine synchronously (generation is cheap, allocation-only work) and
//! the reply carries the map plus its derived statistics and validation
//! report. No state is shared across connections.

use crate::protocol::{ClientMessage, ServerMessage};
use futures_util::{SinkExt, StreamExt};
use hexmap_core::{generate, statistics, validate, GameConfig};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("hexmap server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection.
async fn handle_connection(stream: TcpStream, addr: SocketAddr) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    info!("New WebSocket connection from {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();

    // Assign a session ID
    let session_id = Uuid::new_v4();

    // Create channel for outgoing messages
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Send welcome message
    let welcome = ServerMessage::Welcome { session_id };
    let msg_text = serde_json::to_string(&welcome)?;
    ws_sender.send(Message::Text(msg_text.into())).await?;

    // Spawn task to forward messages from channel to WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Ok(text) = serde_json::to_string(&msg) {
                if ws_sender.send(Message::Text(text.into())).await.is_err() {
                    break;
                }
            }
        }
    });

    // Handle incoming messages
    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Ok(client_msg) = serde_json::from_str::<ClientMessage>(&text) {
                    handle_message(session_id, client_msg, &tx);
                } else {
                    warn!("Invalid message from {}: {}", session_id, text);
                    let _ = tx.send(ServerMessage::Error {
                        message: "unrecognized request".to_string(),
                    });
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} closing connection", session_id);
                break;
            }
            Ok(Message::Ping(_)) => {
                let _ = tx.send(ServerMessage::Pong);
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", session_id, e);
                break;
            }
            _ => {}
        }
    }

    send_task.abort();
    info!("Connection closed for {}", session_id);
    Ok(())
}

/// Handle a client message.
fn handle_message(
    session_id: Uuid,
    msg: ClientMessage,
    tx: &mpsc::UnboundedSender<ServerMessage>,
) {
    match msg {
        ClientMessage::Generate { config } => {
            let reply = generate_reply(session_id, &config);
            let _ = tx.send(reply);
        }

        ClientMessage::Ping => {
            let _ = tx.send(ServerMessage::Pong);
        }
    }
}

/// Run one generation and package the outcome as a protocol message.
fn generate_reply(session_id: Uuid, config: &GameConfig) -> ServerMessage {
    match generate(config) {
        Ok(map) => {
            let stats = statistics(&map);
            let validation = validate(&map);
            info!(
                "Generated {}-cell map for session {} ({} players)",
                map.cells().len(),
                session_id,
                map.player_count()
            );
            ServerMessage::MapReady {
                map,
                stats,
                validation,
            }
        }
        Err(e) => {
            warn!("Generation failed for session {}: {}", session_id, e);
            ServerMessage::Error {
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_reply_success() {
        let config = GameConfig::default();
        match generate_reply(Uuid::new_v4(), &config) {
            ServerMessage::MapReady { map, validation, .. } => {
                assert_eq!(map.cells().len(), 19);
                assert!(validation.valid);
            }
            other => panic!("expected MapReady, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_reply_unknown_expansion() {
        let config = GameConfig {
            expansion: "seafarers".to_string(),
            ..GameConfig::default()
        };
        match generate_reply(Uuid::new_v4(), &config) {
            ServerMessage::Error { message } => {
                assert!(message.contains("seafarers"));
            }
            other => panic!("expected Error, got {:?}", other),
        }
    }
}
