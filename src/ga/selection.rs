//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Individual;
use crate::random::UnitRng;
use rand::Rng;

/// Tournament selection: draw `k` individuals uniformly with replacement and
/// return the index of the fittest.
///
/// A challenger replaces the current winner only when strictly fitter, so
/// ties go to the first one drawn. Consumes exactly `max(k, 1)` draws.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best_idx = rng.pick_index(n);
    for _ in 1..k.max(1) {
        let idx = rng.pick_index(n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
