//! Generation configuration.
//!
//! A `GameConfig` is the single immutable input to [`crate::generator`].
//! It comes from an external collaborator (a settings form, a request
//! payload) and is never mutated during generation.

use crate::board::MapSize;
use serde::{Deserialize, Serialize};

/// The expansion key every shipped configuration uses.
pub const BASE_EXPANSION: &str = "base";

/// Immutable input record for one map generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (3-6 exercised; above 4 switches on the
    /// frame-extension layout and inventory deltas)
    pub player_count: u8,
    /// true: numbers drawn by reshuffling the base cycle;
    /// false: the canonical fixed distribution, sliced to fit
    pub use_random_numbers: bool,
    /// Run the 6/8 adjacency-relaxation pass after number assignment
    pub balanced_resources: bool,
    /// Advisory only: generation currently always attempts harbor
    /// placement regardless of this flag
    pub require_harbors: bool,
    /// Presentational size hint, passed through untouched
    pub map_size: MapSize,
    /// Which tile inventory to draw from; unknown keys fail generation
    pub expansion: String,
}

impl GameConfig {
    /// Configuration for a given player count with default toggles.
    pub fn for_players(player_count: u8) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Whether this configuration uses the 5-6 player extension.
    pub fn is_extended(&self) -> bool {
        self.player_count > 4
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            use_random_numbers: false,
            balanced_resources: true,
            require_harbors: true,
            map_size: MapSize::default(),
            expansion: BASE_EXPANSION.to_string(),
        }
    }
}
