//! WebSocket protocol messages for the map generation service.

use hexmap_core::{Board, GameConfig, StatsReport, ValidationReport};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ClientMessage {
    /// Generate a fresh map from the given configuration
    Generate { config: GameConfig },

    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ServerMessage {
    /// Welcome message with the assigned session ID
    Welcome { session_id: Uuid },

    /// A generated map with its derived reports
    MapReady {
        map: Board,
        stats: StatsReport,
        validation: ValidationReport,
    },

    /// Error occurred (bad payload, unknown expansion, ...)
    Error { message: String },

    /// Pong response
    Pong,
}
