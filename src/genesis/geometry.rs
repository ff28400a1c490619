//! Rectangle geometry: clearance-aware overlap, bounds clamping, distances.

use super::types::{Rect, YardSpec};

impl Rect {
    /// Center point `(cx, cy)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }

    /// Whether the rect lies fully inside the yard.
    pub fn fits_in(&self, yard: &YardSpec) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.w <= yard.width
            && self.y + self.h <= yard.height
    }
}

/// Separating-axis overlap test with a clearance margin.
///
/// Two rects are apart when, on either axis, one ends at least `clearance`
/// before the other starts. Touching edges with `clearance = 0` do not
/// overlap. Symmetric in `a` and `b`.
pub fn overlaps(a: &Rect, b: &Rect, clearance: f64) -> bool {
    !(a.x + a.w + clearance <= b.x
        || b.x + b.w + clearance <= a.x
        || a.y + a.h + clearance <= b.y
        || b.y + b.h + clearance <= a.y)
}

/// Moves `rect` so it lies inside `[0, width] × [0, height]`. Size is kept.
///
/// A rect wider (or taller) than the yard is unsupported input: it is
/// pinned to the origin on that axis and still hangs past the far edge.
/// Scoring then charges it the out-of-bounds penalty.
pub fn clamp_to_bounds(yard: &YardSpec, rect: &Rect) -> Rect {
    Rect {
        x: clamp_axis(rect.x, rect.w, yard.width),
        y: clamp_axis(rect.y, rect.h, yard.height),
        ..rect.clone()
    }
}

/// Start coordinate of a `size`-long span clamped into `[0, limit]`.
///
/// `(limit - size) + size` may round one ulp above `limit`; the start is
/// stepped down until the far edge is inside.
fn clamp_axis(pos: f64, size: f64, limit: f64) -> f64 {
    let mut p = clamp(pos, 0.0, (limit - size).max(0.0));
    while p > 0.0 && p + size > limit {
        p = f64::from_bits(p.to_bits() - 1);
    }
    p
}

/// Euclidean distance between rect centers.
pub fn center_distance(a: &Rect, b: &Rect) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    (ax - bx).hypot(ay - by)
}

/// `lo` wins over `hi` and nothing panics on NaN bounds, unlike `f64::clamp`.
pub(crate) fn clamp(n: f64, lo: f64, hi: f64) -> f64 {
    n.min(hi).max(lo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genesis::types::BlockKind;
    use proptest::prelude::*;

    fn block(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new("b", BlockKind::Staging, x, y, w, h)
    }

    #[test]
    fn test_identical_position_overlaps() {
        let a = block(5.0, 5.0, 10.0, 10.0);
        let b = block(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b, 0.0));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = block(0.0, 0.0, 10.0, 10.0);
        let right = block(10.0, 0.0, 10.0, 10.0);
        let above = block(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right, 0.0));
        assert!(!overlaps(&a, &above, 0.0));
    }

    #[test]
    fn test_clearance_turns_gap_into_overlap() {
        let a = block(0.0, 0.0, 10.0, 10.0);
        let b = block(11.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b, 1.0));
        assert!(overlaps(&a, &b, 2.0));
    }

    #[test]
    fn test_diagonal_separation() {
        let a = block(0.0, 0.0, 10.0, 10.0);
        let b = block(10.5, 10.5, 4.0, 4.0);
        assert!(!overlaps(&a, &b, 0.0));
        assert!(overlaps(&a, &b, 1.0));
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let yard = YardSpec::new(100.0, 50.0);
        let r = block(10.0, 20.0, 10.0, 10.0);
        assert_eq!(clamp_to_bounds(&yard, &r), r);
    }

    #[test]
    fn test_clamp_moves_back_inside() {
        let yard = YardSpec::new(100.0, 50.0);
        let r = clamp_to_bounds(&yard, &block(95.0, -3.0, 10.0, 10.0));
        assert_eq!((r.x, r.y, r.w, r.h), (90.0, 0.0, 10.0, 10.0));
        assert!(r.fits_in(&yard));
    }

    #[test]
    fn test_clamp_oversized_pins_to_origin() {
        let yard = YardSpec::new(8.0, 50.0);
        let r = clamp_to_bounds(&yard, &block(3.0, 5.0, 10.0, 10.0));
        assert_eq!(r.x, 0.0);
        assert_eq!(r.w, 10.0);
        assert!(!r.fits_in(&yard));
    }

    #[test]
    fn test_clamp_far_edge_does_not_round_past_yard() {
        let yard = YardSpec::new(30.698156151121612, 22.0);
        let r = clamp_to_bounds(&yard, &block(175.3192431059066, 0.0, 14.543411570771466, 6.0));
        assert!(r.x + r.w <= yard.width, "far edge {} past {}", r.x + r.w, yard.width);
        assert!(r.fits_in(&yard));
        assert!(yard.width - (r.x + r.w) < 1e-12);
    }

    #[test]
    fn test_center_distance() {
        let a = block(0.0, 0.0, 2.0, 2.0);
        let b = block(3.0, 4.0, 2.0, 2.0);
        assert!((center_distance(&a, &b) - 5.0).abs() < 1e-12);
        assert_eq!(center_distance(&a, &a), 0.0);
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(
            ax in -50.0..50.0f64, ay in -50.0..50.0f64, aw in 1.0..30.0f64, ah in 1.0..30.0f64,
            bx in -50.0..50.0f64, by in -50.0..50.0f64, bw in 1.0..30.0f64, bh in 1.0..30.0f64,
            clearance in 0.0..5.0f64,
        ) {
            let a = block(ax, ay, aw, ah);
            let b = block(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b, clearance), overlaps(&b, &a, clearance));
        }

        #[test]
        fn prop_overlap_monotone_in_clearance(
            ax in -50.0..50.0f64, ay in -50.0..50.0f64,
            bx in -50.0..50.0f64, by in -50.0..50.0f64,
            clearance in 0.0..5.0f64,
        ) {
            let a = block(ax, ay, 10.0, 10.0);
            let b = block(bx, by, 10.0, 10.0);
            if overlaps(&a, &b, 0.0) {
                prop_assert!(overlaps(&a, &b, clearance));
            }
        }

        #[test]
        fn prop_clamp_fits_when_rect_fits(
            x in -500.0..500.0f64, y in -500.0..500.0f64,
            w in 4.0..22.0f64, h in 4.0..22.0f64,
            width in 22.0..1000.0f64, height in 22.0..1000.0f64,
        ) {
            let yard = YardSpec::new(width, height);
            let r = clamp_to_bounds(&yard, &block(x, y, w, h));
            prop_assert!(r.fits_in(&yard));
            prop_assert_eq!((r.w, r.h), (w, h));
        }
    }
}
