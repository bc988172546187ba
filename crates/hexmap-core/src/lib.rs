//! hexmap - procedural board generation for a hex-tile resource game
//!
//! This crate generates complete, balanced board layouts: a hexagonal
//! arrangement of terrain cells carrying numeric production tokens and
//! trade harbors, with the robber placed on the desert. Generation is a
//! pure function of a configuration value plus randomness; rendering,
//! settings forms, and other presentation concerns live in collaborating
//! crates that consume the generated map as data.
//!
//! # Architecture
//!
//! The engine is platform-agnostic. It can be compiled to:
//! - Native Rust for server-side generation
//! - WebAssembly for in-browser generation
//!
//! # Modules
//!
//! - [`hex`]: Cube coordinate system for the hex grid
//! - [`board`]: Cells, terrain, harbors, and the generated map
//! - [`config`]: The immutable generation input record
//! - [`catalog`]: Declarative tile inventories per expansion
//! - [`layout`]: Board coordinate layouts per player count
//! - [`pools`]: Expansion of inventories into concrete tile pools
//! - [`generator`]: The constrained-random assignment engine
//! - [`stats`]: Descriptive statistics and soft validation

pub mod board;
pub mod catalog;
pub mod config;
pub mod generator;
pub mod hex;
pub mod layout;
pub mod pools;
pub mod stats;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, Cell, HarborKind, MapSize, Resource, Terrain};
pub use catalog::{catalog_for, ConfigError, ExpansionCatalog};
pub use config::{GameConfig, BASE_EXPANSION};
pub use generator::{generate, generate_with_rng};
pub use hex::{hexes_within, CubeCoord};
pub use layout::board_layout;
pub use stats::{statistics, validate, Centrality, StatsReport, ValidationReport};
