//! Board data model: terrain, resources, harbors, cells, and the
//! generated map itself.
//!
//! A `Board` is the value the generator hands to its collaborators (the
//! renderer, the statistics display, the map service). It is constructed
//! in one shot by [`crate::generator`] and exposes read-only queries —
//! regenerating means building an entirely new `Board`, never mutating
//! one in place.

use crate::hex::CubeCoord;
use serde::{Deserialize, Serialize};

/// Resource types produced by terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    /// Produced by hills
    Brick,
    /// Produced by forest
    Lumber,
    /// Produced by pasture
    Wool,
    /// Produced by fields
    Grain,
    /// Produced by mountains
    Ore,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Brick,
        Resource::Lumber,
        Resource::Wool,
        Resource::Grain,
        Resource::Ore,
    ];
}

/// Terrain kinds that can occupy a cell.
///
/// Each terrain produces at most one resource, derived 1:1 by
/// [`Terrain::resource`] — a cell stores only its terrain, so "two
/// resources on one cell" cannot be represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Brick quarries
    Hills,
    /// Lumber stands
    Forest,
    /// Wool herds
    Pasture,
    /// Grain farmland
    Fields,
    /// Ore veins
    Mountains,
    /// Produces nothing; the robber starts here
    Desert,
}

impl Terrain {
    /// All terrain kinds in canonical order
    pub const ALL: [Terrain; 6] = [
        Terrain::Hills,
        Terrain::Forest,
        Terrain::Pasture,
        Terrain::Fields,
        Terrain::Mountains,
        Terrain::Desert,
    ];

    /// The resource this terrain produces, if any.
    pub const fn resource(&self) -> Option<Resource> {
        match self {
            Terrain::Hills => Some(Resource::Brick),
            Terrain::Forest => Some(Resource::Lumber),
            Terrain::Pasture => Some(Resource::Wool),
            Terrain::Fields => Some(Resource::Grain),
            Terrain::Mountains => Some(Resource::Ore),
            Terrain::Desert => None,
        }
    }

    /// Whether cells of this terrain receive a numeric token.
    pub const fn is_resource_bearing(&self) -> bool {
        self.resource().is_some()
    }
}

/// Harbor types for maritime trading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarborKind {
    /// 3:1 trade any resource
    Generic,
    /// 2:1 trade for a specific resource
    Specific(Resource),
}

impl HarborKind {
    /// The exchange rate for this harbor
    pub fn rate(&self) -> u32 {
        match self {
            HarborKind::Generic => 3,
            HarborKind::Specific(_) => 2,
        }
    }
}

/// Presentational map-size hint.
///
/// Passed through from configuration to the rendered output; generation
/// never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MapSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A single populated cell of the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    /// Generation-scoped identifier; opaque, never reused across generations
    pub id: String,
    /// Position on the hex grid, unique within a board
    pub coord: CubeCoord,
    /// What this cell is made of
    pub terrain: Terrain,
    /// Numeric production token (2-12, never 7, never on desert)
    pub number: Option<u8>,
    /// Whether the robber starts on this cell
    pub has_robber: bool,
    /// Trade harbor on this cell, if it sits on the map edge
    pub harbor: Option<HarborKind>,
}

impl Cell {
    /// Create an unpopulated cell: terrain only, everything else assigned
    /// by later generation steps.
    pub(crate) fn new(id: String, coord: CubeCoord, terrain: Terrain) -> Self {
        Self {
            id,
            coord,
            terrain,
            number: None,
            has_robber: false,
            harbor: None,
        }
    }

    /// The resource this cell produces, if any.
    pub fn resource(&self) -> Option<Resource> {
        self.terrain.resource()
    }

    /// Whether this cell carries a numeric token once generated.
    pub fn is_resource_bearing(&self) -> bool {
        self.terrain.is_resource_bearing()
    }
}

/// A fully generated map.
///
/// Cell order carries no meaning; positions are pairwise distinct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    player_count: u8,
    map_size: MapSize,
    expansion: String,
}

impl Board {
    pub(crate) fn from_parts(
        cells: Vec<Cell>,
        player_count: u8,
        map_size: MapSize,
        expansion: String,
    ) -> Self {
        Self {
            cells,
            player_count,
            map_size,
            expansion,
        }
    }

    /// All cells of the map.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The player count this map was generated for.
    pub fn player_count(&self) -> u8 {
        self.player_count
    }

    /// The presentational size hint, passed through from configuration.
    pub fn map_size(&self) -> MapSize {
        self.map_size
    }

    /// The expansion key this map was generated from.
    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    /// Look up the cell at a coordinate.
    pub fn cell_at(&self, coord: CubeCoord) -> Option<&Cell> {
        self.cells.iter().find(|c| c.coord == coord)
    }

    /// Whether a coordinate is occupied by any cell.
    pub fn contains(&self, coord: CubeCoord) -> bool {
        self.cell_at(coord).is_some()
    }

    /// Cells whose terrain produces a resource.
    pub fn resource_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_resource_bearing())
    }

    /// Desert cells.
    pub fn desert_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.terrain == Terrain::Desert)
    }

    /// The cell holding the robber, if one was placed.
    pub fn robber_cell(&self) -> Option<&Cell> {
        self.cells.iter().find(|c| c.has_robber)
    }

    /// Cells carrying a harbor.
    pub fn harbor_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.harbor.is_some())
    }

    /// Whether a cell sits on the map edge (at least one neighbor
    /// coordinate is unoccupied).
    pub fn is_edge_cell(&self, cell: &Cell) -> bool {
        cell.coord.neighbors().iter().any(|n| !self.contains(*n))
    }
}
