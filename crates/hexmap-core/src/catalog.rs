//! Declarative tile inventory per expansion.
//!
//! The catalog is pure data: how many of each terrain, harbor, and
//! numeric token an expansion ships, and what the 5-6 player extension
//! adds on top. [`crate::pools`] expands these counts into the concrete
//! multisets the generator shuffles.
//!
//! Only the base game is registered. Looking up anything else is a hard
//! configuration error — the caller must not proceed with a partial or
//! defaulted inventory.

use crate::board::{HarborKind, Resource, Terrain};
use thiserror::Error;

/// Errors raised when resolving configuration against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown expansion '{0}'")]
    UnknownExpansion(String),
}

/// The full tile inventory for one expansion.
#[derive(Debug, Clone, Copy)]
pub struct ExpansionCatalog {
    /// Registry key
    pub key: &'static str,
    /// Base terrain counts
    pub terrain: &'static [(Terrain, usize)],
    /// Extra terrain when player count > 4
    pub terrain_extension: &'static [(Terrain, usize)],
    /// Base harbor counts
    pub harbors: &'static [(HarborKind, usize)],
    /// Extra harbors when player count > 4
    pub harbor_extension: &'static [(HarborKind, usize)],
    /// Canonical fixed number sequence for the standard policy
    pub standard_numbers: &'static [u8],
    /// Appended to the canonical sequence when player count > 4, then
    /// sliced to the resource-bearing cell count. Interleaved low/high so
    /// a partial slice boosts token counts from both ends of the
    /// probability curve.
    pub standard_numbers_extension: &'static [u8],
    /// Base cycle reshuffled by the random number policy
    pub number_cycle: &'static [u8],
    /// Joins the cycle when player count > 4
    pub number_cycle_extension: &'static [u8],
}

/// The base game: 19 tiles, 9 harbors, the classic number distribution,
/// plus the 5-6 player deltas (6 tiles, 2 harbors, tokens 2 and 12).
pub const BASE: ExpansionCatalog = ExpansionCatalog {
    key: "base",
    terrain: &[
        (Terrain::Hills, 3),
        (Terrain::Forest, 4),
        (Terrain::Pasture, 4),
        (Terrain::Fields, 4),
        (Terrain::Mountains, 3),
        (Terrain::Desert, 1),
    ],
    terrain_extension: &[
        (Terrain::Hills, 1),
        (Terrain::Forest, 1),
        (Terrain::Pasture, 1),
        (Terrain::Fields, 1),
        (Terrain::Mountains, 1),
        (Terrain::Desert, 1),
    ],
    harbors: &[
        (HarborKind::Generic, 4),
        (HarborKind::Specific(Resource::Brick), 1),
        (HarborKind::Specific(Resource::Lumber), 1),
        (HarborKind::Specific(Resource::Wool), 1),
        (HarborKind::Specific(Resource::Grain), 1),
        (HarborKind::Specific(Resource::Ore), 1),
    ],
    harbor_extension: &[
        (HarborKind::Generic, 1),
        (HarborKind::Specific(Resource::Wool), 1),
    ],
    standard_numbers: &[2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12],
    standard_numbers_extension: &[2, 12, 3, 11, 4, 10, 5, 9, 6, 8],
    number_cycle: &[3, 4, 5, 6, 8, 9, 10, 11],
    number_cycle_extension: &[2, 12],
};

/// Resolve an expansion key against the registry.
pub fn catalog_for(key: &str) -> Result<&'static ExpansionCatalog, ConfigError> {
    match key {
        "base" => Ok(&BASE),
        other => Err(ConfigError::UnknownExpansion(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(counts: &[(Terrain, usize)]) -> usize {
        counts.iter().map(|(_, n)| n).sum()
    }

    #[test]
    fn test_base_terrain_totals() {
        assert_eq!(total(BASE.terrain), 19);
        assert_eq!(total(BASE.terrain) + total(BASE.terrain_extension), 25);
    }

    #[test]
    fn test_base_harbor_totals() {
        let base: usize = BASE.harbors.iter().map(|(_, n)| n).sum();
        let ext: usize = BASE.harbor_extension.iter().map(|(_, n)| n).sum();
        assert_eq!(base, 9);
        assert_eq!(base + ext, 11);
    }

    #[test]
    fn test_standard_sequence_shape() {
        assert_eq!(BASE.standard_numbers.len(), 18);
        // 7 never appears on a token.
        assert!(!BASE.standard_numbers.contains(&7));
        assert!(!BASE.standard_numbers_extension.contains(&7));
        // 2 and 12 are in the canonical sequence exactly once each.
        assert_eq!(BASE.standard_numbers.iter().filter(|&&n| n == 2).count(), 1);
        assert_eq!(BASE.standard_numbers.iter().filter(|&&n| n == 12).count(), 1);
    }

    #[test]
    fn test_random_cycle_shape() {
        assert_eq!(BASE.number_cycle, &[3, 4, 5, 6, 8, 9, 10, 11]);
        assert_eq!(BASE.number_cycle_extension, &[2, 12]);
    }

    #[test]
    fn test_lookup() {
        assert_eq!(catalog_for("base").unwrap().key, "base");
        assert_eq!(
            catalog_for("seafarers").unwrap_err(),
            ConfigError::UnknownExpansion("seafarers".to_string())
        );
    }
}
