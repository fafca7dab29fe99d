//! # Ear Clipping Triangulation
//!
//! Splits a simple planar polygon (convex or concave, no holes) into
//! triangles that reference the original vertex indices only.
//!
//! ## Algorithm
//!
//! 1. The shoelace area decides the ring order: counter-clockwise input is
//!    walked as given, anything else (clockwise or zero area) in reverse, so
//!    ears are always searched on a counter-clockwise ring.
//! 2. Consecutive triples `(u, v, w)` of the active ring are tested. `v` is an
//!    ear when the triangle turns left by more than [`EAR_AREA_EPSILON`] and
//!    no other active vertex lies strictly inside it.
//! 3. An ear is emitted and `v` is removed from the ring.
//! 4. Each step without an ear spends one unit of a `2 * nv` budget. When the
//!    budget runs out the polygon is not simple (or fully degenerate) and the
//!    triangles found so far are returned as emitted, without reversal.
//! 5. A completed list is reversed before returning, which makes every
//!    triangle clockwise in the input plane.

use config::constants::EAR_AREA_EPSILON;

use crate::core::Point2;

/// Triangulates a polygon given as an implicitly closed point list.
///
/// Returns a flat index list with stride 3. Fewer than three points yield an
/// empty list. Self-intersecting or degenerate outlines yield a partial (or
/// empty) list instead of an error; a partial list keeps emission order and
/// its triangles are counter-clockwise.
///
/// # Example
///
/// ```rust
/// use shape_mesh::{triangulate, Point2};
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(1.0, 0.0),
/// ];
/// assert_eq!(triangulate(&square).len(), 6);
/// ```
pub fn triangulate(points: &[Point2]) -> Vec<u32> {
    let n = points.len();
    let mut indices = Vec::with_capacity(n.saturating_sub(2) * 3);
    if n < 3 {
        return indices;
    }

    // Active ring of original indices, always counter-clockwise.
    let mut ring: Vec<usize> = if signed_area(points) > 0.0 {
        (0..n).collect()
    } else {
        (0..n).rev().collect()
    };

    let mut budget = 2 * ring.len();
    let mut v = ring.len() - 1;
    while ring.len() > 2 {
        if budget == 0 {
            tracing::warn!(
                points = n,
                remaining = ring.len(),
                triangles = indices.len() / 3,
                "ear search exhausted, polygon is probably not simple"
            );
            return indices;
        }
        budget -= 1;

        let nv = ring.len();
        let u = if v < nv { v } else { 0 };
        v = if u + 1 < nv { u + 1 } else { 0 };
        let w = if v + 1 < nv { v + 1 } else { 0 };

        if is_ear(points, &ring, u, v, w) {
            indices.extend([ring[u], ring[v], ring[w]].map(|i| i as u32));
            ring.remove(v);
            budget = 2 * ring.len();
        }
    }

    indices.reverse();
    indices
}

/// Signed area by the shoelace formula, positive for counter-clockwise
/// outlines.
pub fn signed_area(points: &[Point2]) -> f64 {
    let Some(&last) = points.last() else {
        return 0.0;
    };
    let mut prev = last;
    let mut twice = 0.0;
    for &p in points {
        twice += prev.perp_dot(p);
        prev = p;
    }
    twice * 0.5
}

/// Tests whether ring position `v` is a clippable ear.
fn is_ear(points: &[Point2], ring: &[usize], u: usize, v: usize, w: usize) -> bool {
    let a = points[ring[u]];
    let b = points[ring[v]];
    let c = points[ring[w]];

    if (b - a).perp_dot(c - a) <= EAR_AREA_EPSILON {
        return false;
    }

    !ring
        .iter()
        .enumerate()
        .filter(|&(p, _)| p != u && p != v && p != w)
        .any(|(_, &i)| strictly_inside(a, b, c, points[i]))
}

/// True when `p` lies strictly inside the counter-clockwise triangle `abc`.
fn strictly_inside(a: Point2, b: Point2, c: Point2, p: Point2) -> bool {
    (c - b).perp_dot(p - b) > 0.0 && (a - c).perp_dot(p - c) > 0.0 && (b - a).perp_dot(p - a) > 0.0
}
