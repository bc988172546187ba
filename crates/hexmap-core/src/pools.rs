//! Tile pool builder: expands the declarative catalog into the concrete
//! multisets the assignment engine shuffles and distributes.

use crate::board::{HarborKind, Terrain};
use crate::catalog::ExpansionCatalog;
use rand::seq::SliceRandom;
use rand::Rng;

/// Expand counted entries into a flat multiset.
fn expand<T: Copy>(counts: &[(T, usize)]) -> Vec<T> {
    counts
        .iter()
        .flat_map(|&(item, count)| std::iter::repeat(item).take(count))
        .collect()
}

/// The terrain multiset for one generation: base inventory plus the
/// extension delta when the player count calls for it.
pub fn terrain_pool(catalog: &ExpansionCatalog, extended: bool) -> Vec<Terrain> {
    let mut pool = expand(catalog.terrain);
    if extended {
        pool.extend(expand(catalog.terrain_extension));
    }
    pool
}

/// The harbor multiset for one generation.
pub fn harbor_pool(catalog: &ExpansionCatalog, extended: bool) -> Vec<HarborKind> {
    let mut pool = expand(catalog.harbors);
    if extended {
        pool.extend(expand(catalog.harbor_extension));
    }
    pool
}

/// The numeric token sequence for one generation, at least `count`
/// entries long.
///
/// Standard policy: the canonical fixed sequence (plus extension tail
/// when extended) sliced to `count`. Random policy: reshuffle the base
/// cycle and concatenate until long enough, then truncate after a final
/// shuffle.
pub fn number_sequence<R: Rng>(
    catalog: &ExpansionCatalog,
    extended: bool,
    use_random_numbers: bool,
    count: usize,
    rng: &mut R,
) -> Vec<u8> {
    if use_random_numbers {
        random_sequence(catalog, extended, count, rng)
    } else {
        standard_sequence(catalog, extended, count)
    }
}

fn standard_sequence(catalog: &ExpansionCatalog, extended: bool, count: usize) -> Vec<u8> {
    let mut sequence = catalog.standard_numbers.to_vec();
    if extended {
        sequence.extend_from_slice(catalog.standard_numbers_extension);
    }
    sequence.truncate(count);
    sequence
}

fn random_sequence<R: Rng>(
    catalog: &ExpansionCatalog,
    extended: bool,
    count: usize,
    rng: &mut R,
) -> Vec<u8> {
    let mut cycle = catalog.number_cycle.to_vec();
    if extended {
        cycle.extend_from_slice(catalog.number_cycle_extension);
    }

    let mut sequence = Vec::with_capacity(count + cycle.len());
    while sequence.len() < count {
        cycle.shuffle(rng);
        sequence.extend_from_slice(&cycle);
    }
    sequence.shuffle(rng);
    sequence.truncate(count);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BASE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_terrain_pool_sizes() {
        assert_eq!(terrain_pool(&BASE, false).len(), 19);
        assert_eq!(terrain_pool(&BASE, true).len(), 25);
    }

    #[test]
    fn test_terrain_pool_counts() {
        let pool = terrain_pool(&BASE, false);
        let forests = pool.iter().filter(|&&t| t == Terrain::Forest).count();
        let deserts = pool.iter().filter(|&&t| t == Terrain::Desert).count();
        assert_eq!(forests, 4);
        assert_eq!(deserts, 1);

        let extended = terrain_pool(&BASE, true);
        let forests = extended.iter().filter(|&&t| t == Terrain::Forest).count();
        let deserts = extended.iter().filter(|&&t| t == Terrain::Desert).count();
        assert_eq!(forests, 5);
        assert_eq!(deserts, 2);
    }

    #[test]
    fn test_harbor_pool_sizes() {
        assert_eq!(harbor_pool(&BASE, false).len(), 9);
        assert_eq!(harbor_pool(&BASE, true).len(), 11);
    }

    #[test]
    fn test_standard_sequence_is_sliced_not_shuffled() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = number_sequence(&BASE, false, false, 18, &mut rng);
        assert_eq!(sequence, BASE.standard_numbers);

        let shorter = number_sequence(&BASE, false, false, 10, &mut rng);
        assert_eq!(shorter, &BASE.standard_numbers[..10]);
    }

    #[test]
    fn test_extended_standard_sequence_covers_23_cells() {
        let mut rng = StdRng::seed_from_u64(7);
        let sequence = number_sequence(&BASE, true, false, 23, &mut rng);
        assert_eq!(sequence.len(), 23);
        // The extension tail makes 2 and 12 appear twice.
        assert_eq!(sequence.iter().filter(|&&n| n == 2).count(), 2);
        assert_eq!(sequence.iter().filter(|&&n| n == 12).count(), 2);
    }

    #[test]
    fn test_random_sequence_length_and_membership() {
        let mut rng = StdRng::seed_from_u64(42);
        let sequence = number_sequence(&BASE, false, true, 18, &mut rng);
        assert_eq!(sequence.len(), 18);
        for n in &sequence {
            assert!(BASE.number_cycle.contains(n), "unexpected token {}", n);
        }
    }

    #[test]
    fn test_random_sequence_extended_admits_2_and_12() {
        let mut rng = StdRng::seed_from_u64(42);
        let sequence = number_sequence(&BASE, true, true, 23, &mut rng);
        assert_eq!(sequence.len(), 23);
        for n in &sequence {
            assert!(
                BASE.number_cycle.contains(n) || BASE.number_cycle_extension.contains(n),
                "unexpected token {}",
                n
            );
        }
    }
}
