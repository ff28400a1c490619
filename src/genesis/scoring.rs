//! Layout scoring.
//!
//! A layout is scored over the full rect set (caller obstacles followed by
//! decision blocks):
//!
//! ```text
//! penalty    = 2500 * colliding_pairs + 500 * out_of_bounds_blocks
//! travel     = mean over docks of distance to the nearest staging center
//! congestion = clamp(1.4 * occupied_area / yard_area + 0.6 * count / 50, 0, 1)
//! viscosity  = mu * (1 + 1.8 * congestion + 0.4 * count / 50)
//! reynolds   = rho * v * (1 - 0.55 * congestion) * travel / viscosity
//! fitness    = -travel - penalty + 250 * ln(reynolds)
//! ```
//!
//! Every factor of the Reynolds term is floored at [`EPSILON`]. The log keeps
//! the flow term from outweighing penalties: a single collision costs more
//! than any realistic Reynolds gain.
//!
//! Scoring is pure and never fails; degenerate inputs produce sentinels.

use super::geometry::{center_distance, overlaps};
use super::types::{BlockKind, GenesisConstraints, GenesisPhysics, LayoutMeta, Rect, YardSpec};

/// Charged once per pair of rects closer than the minimum clearance.
pub const OVERLAP_PENALTY: f64 = 2500.0;

/// Charged once per decision block that sticks out of the yard.
pub const BOUNDS_PENALTY: f64 = 500.0;

/// Travel estimate of a layout without any dock or without any staging area.
pub const NO_ROUTE_TRAVEL: f64 = 99_999.0;

/// Floor applied to every factor of the Reynolds ratio.
pub const EPSILON: f64 = 1e-6;

/// Weight of `ln(reynolds)` in the fitness.
pub const REYNOLDS_LOG_WEIGHT: f64 = 250.0;

/// Block count at which the complexity term reaches 1.
const COMPLEXITY_SCALE: f64 = 50.0;

/// Number of unordered pairs in `rects` that overlap under `clearance`.
pub fn colliding_pairs(rects: &[Rect], clearance: f64) -> usize {
    let mut count = 0;
    for (i, a) in rects.iter().enumerate() {
        for b in &rects[i + 1..] {
            if overlaps(a, b, clearance) {
                count += 1;
            }
        }
    }
    count
}

/// Pairwise collision penalty over the full rect set. O(n²).
pub fn overlap_penalty(rects: &[Rect], clearance: f64) -> f64 {
    colliding_pairs(rects, clearance) as f64 * OVERLAP_PENALTY
}

/// Out-of-bounds penalty over the decision blocks only.
pub fn bounds_penalty(yard: &YardSpec, blocks: &[Rect]) -> f64 {
    blocks.iter().filter(|b| !b.fits_in(yard)).count() as f64 * BOUNDS_PENALTY
}

/// Mean distance from each dock to its nearest staging area.
///
/// Returns [`NO_ROUTE_TRAVEL`] when there are no docks or no staging areas.
pub fn travel_estimate(rects: &[Rect]) -> f64 {
    let staging: Vec<&Rect> = rects
        .iter()
        .filter(|r| r.kind == BlockKind::Staging)
        .collect();
    if staging.is_empty() {
        return NO_ROUTE_TRAVEL;
    }

    let nearest: Vec<f64> = rects
        .iter()
        .filter(|r| r.kind == BlockKind::Dock)
        .map(|dock| {
            staging
                .iter()
                .map(|s| center_distance(dock, s))
                .fold(f64::INFINITY, f64::min)
        })
        .collect();
    if nearest.is_empty() {
        return NO_ROUTE_TRAVEL;
    }

    nearest.iter().sum::<f64>() / nearest.len() as f64
}

/// Block-count complexity term, `count / 50`.
pub fn complexity(rect_count: usize) -> f64 {
    rect_count as f64 / COMPLEXITY_SCALE
}

/// Occupied-area fraction blended with complexity, clamped to `[0, 1]`.
///
/// The yard area is floored at 1 so a degenerate yard saturates instead of
/// dividing by zero.
pub fn congestion_index(rects: &[Rect], yard: &YardSpec) -> f64 {
    let occupied: f64 = rects.iter().map(Rect::area).sum();
    let fill = occupied / yard.area().max(1.0);
    super::geometry::clamp(fill * 1.4 + complexity(rects.len()) * 0.6, 0.0, 1.0)
}

/// Base viscosity inflated by congestion and complexity.
pub fn viscosity_index(mu: f64, congestion: f64, complexity: f64) -> f64 {
    mu * (1.0 + 1.8 * congestion + 0.4 * complexity)
}

/// Reynolds-style flow ratio. Returns `(reynolds, viscosity)`.
///
/// Congestion slows the effective velocity and thickens the viscosity.
/// The base viscosity is floored at [`EPSILON`], so the reported viscosity
/// is never negative.
pub fn reynolds(
    physics: &GenesisPhysics,
    travel: f64,
    congestion: f64,
    complexity: f64,
) -> (f64, f64) {
    let v_eff = physics.v * (1.0 - 0.55 * congestion);
    let mu_eff = viscosity_index(physics.mu.max(EPSILON), congestion, complexity);
    let rho = physics.rho.max(EPSILON);
    let re = (rho * v_eff.max(EPSILON) * travel.max(EPSILON)) / mu_eff.max(EPSILON);
    (re, mu_eff)
}

/// Combines travel, penalties and the log-compressed Reynolds term.
pub fn fitness(travel: f64, penalty: f64, reynolds: f64) -> f64 {
    -travel - penalty + REYNOLDS_LOG_WEIGHT * reynolds.max(EPSILON).ln()
}

/// Scores one layout. `blocks` are the decision blocks; obstacles come from
/// `constraints` and are placed first in the combined set.
pub fn score_layout(
    yard: &YardSpec,
    physics: &GenesisPhysics,
    constraints: &GenesisConstraints,
    blocks: &[Rect],
) -> LayoutMeta {
    let all: Vec<Rect> = constraints
        .obstacles
        .iter()
        .chain(blocks)
        .cloned()
        .collect();

    let penalty = overlap_penalty(&all, constraints.min_clearance) + bounds_penalty(yard, blocks);

    let travel = travel_estimate(&all);
    let congestion = congestion_index(&all, yard);
    let (re, viscosity) = reynolds(physics, travel, congestion, complexity(all.len()));

    LayoutMeta {
        travel_meters_estimate: travel,
        congestion_index: congestion,
        viscosity_index: viscosity,
        reynolds: re,
        fitness: fitness(travel, penalty, re),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(id: &str, kind: BlockKind, x: f64, y: f64) -> Rect {
        let (w, h) = kind.nominal_size();
        Rect::new(id, kind, x, y, w, h)
    }

    fn physics() -> GenesisPhysics {
        GenesisPhysics::new(1.2, 9.5, 1.0)
    }

    #[test]
    fn test_colliding_pairs_counts_each_pair_once() {
        let rects = vec![
            rect("a", BlockKind::Staging, 0.0, 0.0),
            rect("b", BlockKind::Staging, 5.0, 5.0),
            rect("c", BlockKind::Staging, 8.0, 8.0),
            rect("d", BlockKind::Staging, 80.0, 80.0),
        ];
        // a-b, a-c, b-c
        assert_eq!(colliding_pairs(&rects, 0.0), 3);
        assert_eq!(overlap_penalty(&rects, 0.0), 3.0 * OVERLAP_PENALTY);
    }

    #[test]
    fn test_bounds_penalty_counts_blocks_outside() {
        let yard = YardSpec::new(50.0, 50.0);
        let blocks = vec![
            rect("in", BlockKind::Staging, 0.0, 0.0),
            rect("right", BlockKind::Staging, 45.0, 0.0),
            rect("below", BlockKind::Staging, 0.0, -1.0),
        ];
        assert_eq!(bounds_penalty(&yard, &blocks), 2.0 * BOUNDS_PENALTY);
    }

    #[test]
    fn test_travel_nearest_staging_mean() {
        // Dock 14x6 at (0,0): center (7,3).
        // Staging 10x10 at (2,8): center (7,13) -> distance 10.
        // Staging 10x10 at (100,100): far.
        // Dock at (40,0): center (47,3); nearest is (7,13) -> hypot(40,10).
        let rects = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("dock-1", BlockKind::Dock, 40.0, 0.0),
            rect("staging-0", BlockKind::Staging, 2.0, 8.0),
            rect("staging-1", BlockKind::Staging, 100.0, 100.0),
        ];
        let expected = (10.0 + 40.0f64.hypot(10.0)) / 2.0;
        assert!((travel_estimate(&rects) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_travel_sentinel_without_staging() {
        let rects = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("office-0", BlockKind::Office, 30.0, 30.0),
        ];
        assert_eq!(travel_estimate(&rects), NO_ROUTE_TRAVEL);
    }

    #[test]
    fn test_travel_sentinel_without_docks() {
        let rects = vec![rect("staging-0", BlockKind::Staging, 0.0, 0.0)];
        assert_eq!(travel_estimate(&rects), NO_ROUTE_TRAVEL);
        assert_eq!(travel_estimate(&[]), NO_ROUTE_TRAVEL);
    }

    #[test]
    fn test_congestion_formula() {
        let yard = YardSpec::new(100.0, 100.0);
        let rects = vec![
            rect("a", BlockKind::Staging, 0.0, 0.0),
            rect("b", BlockKind::Staging, 20.0, 0.0),
        ];
        // fill = 200 / 10000 = 0.02; complexity = 2/50 = 0.04
        let expected = 0.02 * 1.4 + 0.04 * 0.6;
        assert!((congestion_index(&rects, &yard) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_congestion_saturates() {
        let yard = YardSpec::new(10.0, 10.0);
        let rects: Vec<Rect> = (0..5)
            .map(|i| rect(&format!("s{i}"), BlockKind::Staging, 0.0, 0.0))
            .collect();
        assert_eq!(congestion_index(&rects, &yard), 1.0);
    }

    #[test]
    fn test_congestion_zero_area_yard() {
        let yard = YardSpec::new(0.0, 0.0);
        let rects = vec![rect("a", BlockKind::Staging, 0.0, 0.0)];
        let c = congestion_index(&rects, &yard);
        assert!(c.is_finite());
        assert_eq!(c, 1.0);
    }

    #[test]
    fn test_viscosity_formula() {
        let v = viscosity_index(2.0, 0.5, 0.25);
        assert!((v - 2.0 * (1.0 + 0.9 + 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_reynolds_formula() {
        let (re, mu) = reynolds(&physics(), 20.0, 0.5, 0.5);
        let v_eff = 9.5 * (1.0 - 0.275);
        let mu_eff = 1.0 * (1.0 + 0.9 + 0.2);
        assert!((mu - mu_eff).abs() < 1e-12);
        assert!((re - 1.2 * v_eff * 20.0 / mu_eff).abs() < 1e-9);
    }

    #[test]
    fn test_reynolds_floors_degenerate_physics() {
        let degenerate = GenesisPhysics::new(0.0, -3.0, 0.0);
        let (re, mu) = reynolds(&degenerate, 0.0, 0.0, 0.0);
        assert_eq!(mu, EPSILON);
        assert!(re.is_finite() && re > 0.0);
        // rho, v and travel floored to eps, mu floored to eps
        assert!((re - EPSILON * EPSILON).abs() < 1e-20);
    }

    #[test]
    fn test_negative_mu_keeps_viscosity_positive() {
        let negative = GenesisPhysics::new(1.2, 9.5, -1.0);
        let (re, mu) = reynolds(&negative, 20.0, 0.4, 0.2);
        assert!(mu > 0.0);
        assert!((mu - EPSILON * (1.0 + 0.72 + 0.08)).abs() < 1e-15);
        assert!(re.is_finite() && re > 0.0);
    }

    #[test]
    fn test_fitness_formula() {
        let f = fitness(12.0, 500.0, std::f64::consts::E);
        assert!((f - (-12.0 - 500.0 + 250.0)).abs() < 1e-9);
        assert!(fitness(0.0, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_single_overlap_outweighs_reynolds_gain() {
        let yard = YardSpec::new(200.0, 200.0);
        let constraints = GenesisConstraints::new(1, 1).with_office_count(0);
        // Clean layout, short travel.
        let clean = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("staging-0", BlockKind::Staging, 30.0, 0.0),
        ];
        // Colliding layout: touching is fine, but overlap is charged.
        let colliding = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("staging-0", BlockKind::Staging, 5.0, 0.0),
        ];
        let a = score_layout(&yard, &physics(), &constraints, &clean);
        let b = score_layout(&yard, &physics(), &constraints, &colliding);
        assert!(a.fitness > b.fitness);
        assert!(a.fitness - b.fitness > OVERLAP_PENALTY - 1000.0);
    }

    #[test]
    fn test_obstacles_collide_but_are_not_bounds_checked() {
        let yard = YardSpec::new(100.0, 100.0);
        let constraints = GenesisConstraints::new(1, 1)
            .with_office_count(0)
            .with_obstacle(Rect::new("wall", BlockKind::Obstacle, -5.0, 50.0, 10.0, 10.0));
        let blocks = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("staging-0", BlockKind::Staging, 20.0, 0.0),
        ];
        let base = score_layout(&yard, &physics(), &constraints, &blocks);

        let colliding = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 52.0),
            rect("staging-0", BlockKind::Staging, 20.0, 0.0),
        ];
        let hit = score_layout(&yard, &physics(), &constraints, &colliding);

        // The out-of-yard obstacle itself is never charged.
        let clean_constraints = GenesisConstraints {
            obstacles: Vec::new(),
            ..constraints.clone()
        };
        let no_obstacle = score_layout(&yard, &physics(), &clean_constraints, &blocks);
        assert!((base.fitness - no_obstacle.fitness).abs() < 300.0);
        assert!(base.fitness - hit.fitness > OVERLAP_PENALTY - 1000.0);
    }

    #[test]
    fn test_score_without_staging_uses_sentinel() {
        let yard = YardSpec::new(100.0, 100.0);
        let constraints = GenesisConstraints::new(2, 0);
        let blocks = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("dock-1", BlockKind::Dock, 50.0, 50.0),
            rect("office-0", BlockKind::Office, 20.0, 70.0),
        ];
        let meta = score_layout(&yard, &physics(), &constraints, &blocks);
        assert_eq!(meta.travel_meters_estimate, NO_ROUTE_TRAVEL);
        assert!(meta.fitness.is_finite());
    }

    #[test]
    fn test_meta_ranges() {
        let yard = YardSpec::new(60.0, 40.0);
        let constraints = GenesisConstraints::new(1, 1).with_min_clearance(2.0);
        let blocks = vec![
            rect("dock-0", BlockKind::Dock, 0.0, 0.0),
            rect("staging-0", BlockKind::Staging, 30.0, 20.0),
            rect("office-0", BlockKind::Office, 45.0, 0.0),
        ];
        let meta = score_layout(&yard, &physics(), &constraints, &blocks);
        assert!((0.0..=1.0).contains(&meta.congestion_index));
        assert!(meta.viscosity_index >= 0.0);
        assert!(meta.reynolds >= 0.0);
        assert!(meta.travel_meters_estimate > 0.0);
    }
}
