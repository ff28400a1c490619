//! Population operators for yard layouts.
//!
//! Blocks are identified by their `id` (`{kind}-{index}`), never by their
//! position in the block list. Crossover merges parents by id, so reordering
//! a parent's blocks does not change the child.
//!
//! # Draw order
//!
//! For seeded runs to reproduce, each operator consumes the generator in a
//! fixed order:
//!
//! - [`random_place`]: `x`, then `y`.
//! - [`crossover`]: one draw per block of parent A, in order.
//! - [`mutate`]: per block, a trigger draw; when triggered, `dx`, `dy`, a
//!   resize draw, and when resizing also `dw` then `dh`.

use super::geometry::{clamp, clamp_to_bounds};
use super::types::{BlockKind, GenesisConstraints, Rect, YardSpec};
use crate::random::UnitRng;
use rand::Rng;
use std::collections::HashMap;

/// Largest positional jitter applied by a mutation, per axis.
pub const POSITION_JITTER: f64 = 12.0;

/// Largest size jitter applied by a resizing mutation, per axis.
pub const SIZE_JITTER: f64 = 3.0;

/// Chance that a triggered mutation also resizes the block.
pub const RESIZE_PROBABILITY: f64 = 0.15;

/// Smallest side length a mutation may produce.
pub const MIN_SIDE: f64 = 4.0;

/// Largest side length a mutation may produce.
pub const MAX_SIDE: f64 = 22.0;

/// One template per required block, docks first, then staging, then offices.
///
/// Templates sit at the origin with the nominal size of their kind.
pub fn block_templates(constraints: &GenesisConstraints) -> Vec<Rect> {
    [
        (BlockKind::Dock, constraints.dock_count),
        (BlockKind::Staging, constraints.staging_count),
        (BlockKind::Office, constraints.office_count),
    ]
    .into_iter()
    .flat_map(|(kind, count)| {
        let (w, h) = kind.nominal_size();
        (0..count).map(move |i| Rect::new(format!("{kind}-{i}"), kind, 0.0, 0.0, w, h))
    })
    .collect()
}

/// Places `template` uniformly at random so that it fits in the yard.
///
/// Overlaps with other blocks are not avoided here; scoring penalizes them.
pub fn random_place<R: Rng>(rng: &mut R, yard: &YardSpec, template: &Rect) -> Rect {
    let x = rng.uniform(0.0, (yard.width - template.w).max(0.0));
    let y = rng.uniform(0.0, (yard.height - template.h).max(0.0));
    Rect {
        x,
        y,
        ..template.clone()
    }
}

/// Uniform crossover keyed by block id.
///
/// For each block of `a`, takes the block with the same id from `b` with
/// probability 0.5, otherwise keeps `a`'s. Ids missing from `b` always come
/// from `a`. The draw is consumed either way.
pub fn crossover<R: Rng>(rng: &mut R, a: &[Rect], b: &[Rect]) -> Vec<Rect> {
    let by_id: HashMap<&str, &Rect> = b.iter().map(|r| (r.id.as_str(), r)).collect();
    a.iter()
        .map(|block| {
            let take_b = rng.next_unit() < 0.5;
            match by_id.get(block.id.as_str()) {
                Some(&other) if take_b => other.clone(),
                _ => block.clone(),
            }
        })
        .collect()
}

/// Jitters each block independently with probability `rate`.
///
/// A triggered block moves by up to ±12 on each axis and, 15% of the time,
/// also changes size by up to ±3 per side, kept within `[4, 22]`. Moved
/// blocks are clamped back into the yard; untouched blocks are returned as
/// they were.
pub fn mutate<R: Rng>(rng: &mut R, yard: &YardSpec, blocks: &mut [Rect], rate: f64) {
    for block in blocks.iter_mut() {
        if rng.next_unit() > rate {
            continue;
        }
        let dx = rng.uniform(-POSITION_JITTER, POSITION_JITTER);
        let dy = rng.uniform(-POSITION_JITTER, POSITION_JITTER);
        if rng.next_unit() < RESIZE_PROBABILITY {
            block.w = clamp(block.w + rng.uniform(-SIZE_JITTER, SIZE_JITTER), MIN_SIDE, MAX_SIDE);
            block.h = clamp(block.h + rng.uniform(-SIZE_JITTER, SIZE_JITTER), MIN_SIDE, MAX_SIDE);
        }
        block.x += dx;
        block.y += dy;
        *block = clamp_to_bounds(yard, block);
    }
}
