//! Board coordinate layout per player count.
//!
//! The layout is fixed geometry: a radius-2 hexagon (19 cells) rotated so
//! its widest row runs top-to-bottom, and for 5-6 players an additional
//! six-cell frame, one cell beyond each corner of the hexagon along the
//! same axis (25 cells total). Everything downstream — terrain, numbers,
//! harbors — is assigned over the coordinate set produced here.

use crate::hex::{hexes_within, CubeCoord};

/// Radius of the core hexagonal board.
pub const BOARD_RADIUS: i32 = 2;

/// How far out the frame-extension cells sit along each direction axis.
const FRAME_DISTANCE: i32 = BOARD_RADIUS + 1;

/// The coordinate set the board occupies for a given player count.
///
/// 19 coordinates for up to 4 players, 25 for 5-6. Never contains
/// duplicates.
pub fn board_layout(player_count: u8) -> Vec<CubeCoord> {
    let mut coords: Vec<CubeCoord> = hexes_within(CubeCoord::ORIGIN, BOARD_RADIUS)
        .into_iter()
        .map(|c| c.rotated())
        .collect();

    if player_count > 4 {
        coords.extend(frame_extension());
    }

    coords
}

/// The six frame-extension coordinates for the 5-6 player board, one per
/// side of the rotated hexagon.
pub fn frame_extension() -> [CubeCoord; 6] {
    CubeCoord::DIRECTIONS.map(|d| d.scaled(FRAME_DISTANCE).rotated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_layout_has_19_distinct_coords() {
        let coords = board_layout(4);
        assert_eq!(coords.len(), 19);

        let unique: HashSet<_> = coords.iter().collect();
        assert_eq!(unique.len(), 19);
    }

    #[test]
    fn test_base_layout_fits_radius() {
        for coord in board_layout(3) {
            assert!(CubeCoord::ORIGIN.distance_to(&coord) <= BOARD_RADIUS as u32);
        }
    }

    #[test]
    fn test_extended_layout_has_25_distinct_coords() {
        for players in [5, 6] {
            let coords = board_layout(players);
            assert_eq!(coords.len(), 25);

            let unique: HashSet<_> = coords.iter().collect();
            assert_eq!(unique.len(), 25);
        }
    }

    #[test]
    fn test_frame_cells_touch_the_core_board() {
        let core: HashSet<_> = board_layout(4).into_iter().collect();
        for frame in frame_extension() {
            assert_eq!(CubeCoord::ORIGIN.distance_to(&frame), FRAME_DISTANCE as u32);
            // Each frame cell is adjacent to at least one core cell.
            assert!(
                frame.neighbors().iter().any(|n| core.contains(n)),
                "frame cell {:?} is detached from the board",
                frame
            );
        }
    }

    #[test]
    fn test_rotated_pattern_rows() {
        // The rotated radius-2 hexagon reads 3-4-5-4-3 down its rows.
        let coords = board_layout(4);
        let mut per_row: Vec<usize> = Vec::new();
        for r in -2..=2 {
            per_row.push(coords.iter().filter(|c| c.r == r).count());
        }
        assert_eq!(per_row, vec![3, 4, 5, 4, 3]);
    }
}
