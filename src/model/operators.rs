//! Mutation operators for triangle images.
//!
//! Strategies shape their search only through how often and how wide
//! they call [`mutate_triangle_image`]; there is no other per-call
//! perturbation primitive.
//!
//! # Operators
//!
//! - [`mutate_gene`]: redraw one gene uniformly inside its bandwidth window (O(1))
//! - [`mutate_triangle_image`]: pick one (triangle, gene) pair and mutate it (O(1))
//!
//! Crossover and growth live on [`Candidate`] itself
//! ([`Candidate::cross`], [`Candidate::expand`]).

use super::candidate::Candidate;
use super::triangle::GENE_COUNT;
use rand::Rng;

// ============================================================================
// Gene mutation
// ============================================================================

/// Replaces `gene` with a uniform draw from
/// `[max(0, gene - bandwidth), min(1, gene + bandwidth)]`.
///
/// A bandwidth of 1.0 or more makes the draw uniform over the whole unit
/// interval; a bandwidth of zero leaves the gene in place.
pub fn mutate_gene<R: Rng>(gene: &mut f32, bandwidth: f32, rng: &mut R) {
    let max = (*gene + bandwidth).min(1.0);
    let min = (*gene - bandwidth).max(0.0);
    *gene = (rng.random::<f32>() * (max - min) + min).clamp(min, max);
}

// ============================================================================
// Image mutation
// ============================================================================

/// Mutates exactly one gene of `candidate`.
///
/// The (triangle, gene) pair is drawn uniformly over the whole image.
/// With `forced = Some(i)` the triangle is pinned to `i` and only the gene
/// index is drawn. Empty candidates are left untouched.
///
/// # Panics
/// Panics if a forced triangle index is out of range.
pub fn mutate_triangle_image<R: Rng>(
    candidate: &mut Candidate,
    bandwidth: f32,
    forced: Option<usize>,
    rng: &mut R,
) {
    let n = candidate.len();
    if n == 0 {
        return;
    }

    let draw = rng.random_range(0..n * GENE_COUNT);
    let triangle = forced.unwrap_or(draw / GENE_COUNT);
    let gene = draw % GENE_COUNT;

    assert!(triangle < n, "forced triangle {triangle} beyond {n} triangles");
    mutate_gene(candidate.triangles_mut()[triangle].gene_mut(gene), bandwidth, rng);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Triangle;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_mutate_gene_stays_in_window(
            gene in 0.0f32..=1.0,
            bandwidth in 0.0f32..3.0,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(Some(seed));
            let mut g = gene;
            mutate_gene(&mut g, bandwidth, &mut rng);
            prop_assert!(g >= (gene - bandwidth).max(0.0));
            prop_assert!(g <= (gene + bandwidth).min(1.0));
            prop_assert!((0.0..=1.0).contains(&g));
        }

        #[test]
        fn prop_mutation_changes_at_most_one_gene(
            size in 1usize..12,
            bandwidth in 0.0f32..1.5,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(Some(seed));
            let mut c = Candidate::random(size, 0, 4, 4, &mut rng);
            let before: Vec<f32> = c.triangles().iter().flat_map(Triangle::genes).collect();
            mutate_triangle_image(&mut c, bandwidth, None, &mut rng);
            let after: Vec<f32> = c.triangles().iter().flat_map(Triangle::genes).collect();
            let changed = before.iter().zip(&after).filter(|(a, b)| a != b).count();
            prop_assert!(changed <= 1);
        }
    }

    #[test]
    fn test_zero_bandwidth_is_identity() {
        let mut rng = create_rng(Some(5));
        let mut g = 0.25f32;
        for _ in 0..100 {
            mutate_gene(&mut g, 0.0, &mut rng);
        }
        assert_eq!(g, 0.25);
    }

    #[test]
    fn test_forced_mutation_targets_one_triangle() {
        let mut rng = create_rng(Some(6));
        let mut c = Candidate::random(5, 0, 4, 4, &mut rng);
        let before: Vec<Triangle> = c.triangles().to_vec();
        for _ in 0..200 {
            mutate_triangle_image(&mut c, 1.0, Some(4), &mut rng);
        }
        assert_eq!(&c.triangles()[..4], &before[..4]);
        assert_ne!(c.triangles()[4], before[4]);
    }

    #[test]
    fn test_unforced_mutation_spreads() {
        let mut rng = create_rng(Some(7));
        let mut c = Candidate::random(4, 0, 4, 4, &mut rng);
        let before: Vec<Triangle> = c.triangles().to_vec();
        for _ in 0..400 {
            mutate_triangle_image(&mut c, 1.0, None, &mut rng);
        }
        for (old, new) in before.iter().zip(c.triangles()) {
            assert_ne!(old, new);
        }
    }

    #[test]
    fn test_empty_candidate_is_noop() {
        let mut rng = create_rng(Some(8));
        let mut c = Candidate::new(0, 0, 4, 4);
        mutate_triangle_image(&mut c, 1.0, None, &mut rng);
        assert!(c.is_empty());
    }

    #[test]
    #[should_panic(expected = "forced triangle")]
    fn test_forced_out_of_range_panics() {
        let mut rng = create_rng(Some(9));
        let mut c = Candidate::new(2, 0, 4, 4);
        mutate_triangle_image(&mut c, 1.0, Some(2), &mut rng);
    }
}
