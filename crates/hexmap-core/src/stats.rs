//! Descriptive statistics and post-generation sanity checks.
//!
//! Both operations are read-only views over an immutable [`Board`]:
//! calling them twice on the same map yields identical results. Neither
//! ever fails — `validate` reports violations as strings and leaves the
//! regenerate-or-accept decision to the caller.

use crate::board::{Board, HarborKind, Resource, Terrain};
use crate::hex::CubeCoord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How central the robber's starting cell sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Centrality {
    /// All six neighbor positions occupied
    Center,
    /// At least four neighbor positions occupied
    Edge,
    /// Fewer than four
    Corner,
}

/// Aggregate descriptive statistics for a generated map.
///
/// Entries are emitted in a fixed canonical order so two reports over
/// the same board compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Cells per terrain kind, in canonical terrain order; sums to the
    /// total cell count
    pub resource_balance: Vec<(Terrain, u32)>,
    /// Cells per numeric token, ascending
    pub number_counts: Vec<(u8, u32)>,
    /// Harbors per kind
    pub harbor_counts: Vec<(HarborKind, u32)>,
    /// Sum over numbered cells of the two-dice pip weight 6 - |7 - n|
    pub probability_spread: u32,
    /// Ordered adjacent pairs holding the same number (each unordered
    /// pair counts twice)
    pub adjacent_same_numbers: u32,
    /// Where the robber's cell sits, if a robber was placed
    pub robber_centrality: Option<Centrality>,
}

/// Soft validation outcome: a verdict plus human-readable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Ways two dice can roll a number; the weight of a token.
fn pip_weight(number: u8) -> u32 {
    (6 - (7 - number as i32).abs()) as u32
}

/// Compute aggregate statistics for a map.
pub fn statistics(board: &Board) -> StatsReport {
    let resource_balance = Terrain::ALL
        .iter()
        .map(|&terrain| {
            let count = board.cells().iter().filter(|c| c.terrain == terrain).count() as u32;
            (terrain, count)
        })
        .collect();

    let mut numbers: HashMap<u8, u32> = HashMap::new();
    for cell in board.cells() {
        if let Some(n) = cell.number {
            *numbers.entry(n).or_insert(0) += 1;
        }
    }
    let mut number_counts: Vec<(u8, u32)> = numbers.into_iter().collect();
    number_counts.sort_unstable();

    let harbors: Vec<HarborKind> = board.cells().iter().filter_map(|c| c.harbor).collect();
    let harbor_order = [
        HarborKind::Generic,
        HarborKind::Specific(Resource::Brick),
        HarborKind::Specific(Resource::Lumber),
        HarborKind::Specific(Resource::Wool),
        HarborKind::Specific(Resource::Grain),
        HarborKind::Specific(Resource::Ore),
    ];
    let harbor_counts = harbor_order
        .iter()
        .map(|&kind| {
            let count = harbors.iter().filter(|&&h| h == kind).count() as u32;
            (kind, count)
        })
        .collect();

    let probability_spread = board
        .cells()
        .iter()
        .filter_map(|c| c.number)
        .map(pip_weight)
        .sum();

    StatsReport {
        resource_balance,
        number_counts,
        harbor_counts,
        probability_spread,
        adjacent_same_numbers: adjacent_same_numbers(board),
        robber_centrality: robber_centrality(board),
    }
}

/// Count ordered adjacent pairs carrying the same token. Symmetric
/// pairs are counted once per direction.
fn adjacent_same_numbers(board: &Board) -> u32 {
    let by_coord: HashMap<CubeCoord, u8> = board
        .cells()
        .iter()
        .filter_map(|c| c.number.map(|n| (c.coord, n)))
        .collect();

    let mut pairs = 0;
    for (coord, number) in &by_coord {
        for neighbor in coord.neighbors() {
            if by_coord.get(&neighbor) == Some(number) {
                pairs += 1;
            }
        }
    }
    pairs
}

fn robber_centrality(board: &Board) -> Option<Centrality> {
    let robber = board.robber_cell()?;
    let occupied = robber
        .coord
        .neighbors()
        .iter()
        .filter(|n| board.contains(**n))
        .count();

    Some(match occupied {
        6 => Centrality::Center,
        4 | 5 => Centrality::Edge,
        _ => Centrality::Corner,
    })
}

/// Post-generation sanity checks. Never fails hard; the caller decides
/// whether a reported violation warrants regeneration.
pub fn validate(board: &Board) -> ValidationReport {
    let mut errors = Vec::new();

    let bearing = board.resource_cells().count();
    if bearing < 12 {
        errors.push(format!(
            "only {} resource-producing cells (expected at least 12)",
            bearing
        ));
    }

    let robbers = board.cells().iter().filter(|c| c.has_robber).count();
    if robbers != 1 {
        errors.push(format!("expected exactly 1 robber, found {}", robbers));
    }

    let distinct: HashSet<u8> = board.cells().iter().filter_map(|c| c.number).collect();
    if distinct.len() < 8 {
        errors.push(format!(
            "only {} distinct numbers on the map (expected at least 8)",
            distinct.len()
        ));
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
