//! Cube coordinate system for the hex grid.
//!
//! Every board position is addressed by a `CubeCoord`: three integers
//! (q, r, s) constrained by q + r + s = 0. Cube coordinates make the
//! operations the generator needs — neighbor enumeration, distance,
//! rotation, range queries — plain integer arithmetic with no special
//! cases, which is why we use them over offset coordinates.
//!
//! All functions here are total over the integers: no bounds checking,
//! no failure modes. Callers filter against the set of coordinates that
//! actually exist on a board.

use serde::{Deserialize, Serialize};

/// A position on the hex grid in cube coordinates.
///
/// The invariant q + r + s = 0 is maintained structurally: the only
/// public constructor takes (q, r) and derives s, so an unbalanced
/// triple cannot be built through the API. Value type, structural
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CubeCoord {
    /// Column axis (increases going east)
    pub q: i32,
    /// Row axis (increases going southeast)
    pub r: i32,
    /// Third axis, always -q - r
    pub s: i32,
}

impl CubeCoord {
    /// The board center.
    pub const ORIGIN: CubeCoord = CubeCoord::new(0, 0);

    /// The six unit direction vectors in clockwise order starting from East.
    pub const DIRECTIONS: [CubeCoord; 6] = [
        CubeCoord::new(1, 0),  // East
        CubeCoord::new(1, -1), // NorthEast
        CubeCoord::new(0, -1), // NorthWest
        CubeCoord::new(-1, 0), // West
        CubeCoord::new(-1, 1), // SouthWest
        CubeCoord::new(0, 1),  // SouthEast
    ];

    /// Create a coordinate from its two free axes; s is derived.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// The six adjacent coordinates in clockwise order starting from East.
    ///
    /// No bounds checking — some of these may lie off any given board.
    pub fn neighbors(&self) -> [CubeCoord; 6] {
        Self::DIRECTIONS.map(|d| self.translated(d))
    }

    /// Componentwise addition of an offset vector.
    pub const fn translated(&self, offset: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.q + offset.q, self.r + offset.r)
    }

    /// Componentwise scaling, used to push frame-extension cells out
    /// along a direction axis.
    pub const fn scaled(&self, factor: i32) -> CubeCoord {
        CubeCoord::new(self.q * factor, self.r * factor)
    }

    /// Distance to another coordinate in hex steps.
    pub fn distance_to(&self, other: &CubeCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s - other.s).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Rotate 60° around the origin: (q, r, s) → (-r, -s, -q).
    ///
    /// Applied once to every laid-out coordinate so the widest row of the
    /// hexagonal board runs top-to-bottom instead of left-to-right.
    pub const fn rotated(&self) -> CubeCoord {
        CubeCoord::new(-self.r, -self.s)
    }
}

/// All coordinates within `radius` steps of `center`, eagerly collected.
///
/// For radius R this yields exactly 3R² + 3R + 1 coordinates.
pub fn hexes_within(center: CubeCoord, radius: i32) -> Vec<CubeCoord> {
    let mut coords = Vec::with_capacity((3 * radius * radius + 3 * radius + 1) as usize);
    for dq in -radius..=radius {
        let lo = (-radius).max(-dq - radius);
        let hi = radius.min(-dq + radius);
        for dr in lo..=hi {
            coords.push(center.translated(CubeCoord::new(dq, dr)));
        }
    }
    coords
}
