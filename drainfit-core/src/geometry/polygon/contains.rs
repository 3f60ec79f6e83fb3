use ordered_float::OrderedFloat;

use crate::r2::R2;

use super::{orient, segment_distance, Polygon};

impl Polygon {
    /// Whether `inner` lies entirely within `self`, allowing `tolerance` feet of slack.
    ///
    /// Every vertex and edge midpoint of `inner` must be inside `self` or within
    /// `tolerance` of its boundary, and no pair of edges may cross by more than
    /// `tolerance`. The boundary of `self` must also stay out of `inner`'s
    /// interior: a reflex corner, or a spike whose vertices all rest on `inner`'s
    /// edges, can cut into `inner` while every vertex of `inner` is inside.
    pub fn contains_polygon(&self, inner: &Polygon, tolerance: f64) -> bool {
        let within = |p: &R2<f64>| self.contains_point(p) || self.distance_to_boundary(p) <= tolerance;

        if !inner.vertices.iter().all(within) {
            return false;
        }
        if !inner.edges().all(|(a, b)| within(&((a + b) / 2.))) {
            return false;
        }
        for (a0, a1) in inner.edges() {
            if self.edges().any(|(b0, b1)| segments_cross(&a0, &a1, &b0, &b1, tolerance)) {
                return false;
            }
        }
        let clear_of_inner = |p: &R2<f64>| !inner.contains_point(p) || inner.distance_to_boundary(p) <= tolerance;
        if !self.vertices.iter().all(clear_of_inner) {
            return false;
        }
        self.edges().all(|(b0, b1)| {
            pieces(&b0, &b1, inner, tolerance)
                .windows(2)
                .all(|w| clear_of_inner(&(b0 + (b1 - b0) * ((w[0] + w[1]) / 2.))))
        })
    }
}

/// Parameters along `b0 → b1` where it meets `inner`'s boundary, with both
/// endpoints; between consecutive ones the segment is wholly inside or wholly
/// outside `inner`.
fn pieces(b0: &R2<f64>, b1: &R2<f64>, inner: &Polygon, tolerance: f64) -> Vec<f64> {
    let r = *b1 - *b0;
    let len2 = r.dot(&r);
    let mut ts = vec![0., 1.];
    if len2 == 0. {
        return ts;
    }
    // Inner vertices resting on the segment
    for q in &inner.vertices {
        let t = (*q - *b0).dot(&r) / len2;
        if t > 0. && t < 1. && segment_distance(q, b0, b1) <= tolerance {
            ts.push(t);
        }
    }
    // Inner edges crossing the segment
    for (a0, a1) in inner.edges() {
        let s = a1 - a0;
        let denom = r.cross(&s);
        if denom == 0. {
            continue;
        }
        let w = a0 - *b0;
        let t = w.cross(&s) / denom;
        let u = w.cross(&r) / denom;
        if (0. ..=1.).contains(&u) && t > 0. && t < 1. {
            ts.push(t);
        }
    }
    ts.sort_by_key(|t| OrderedFloat(*t));
    ts.dedup();
    ts
}

/// Proper crossing: each segment's endpoints lie strictly on opposite sides of
/// the other's line, each by more than `tolerance`.
fn segments_cross(a0: &R2<f64>, a1: &R2<f64>, b0: &R2<f64>, b1: &R2<f64>, tolerance: f64) -> bool {
    let la = (*a1 - *a0).norm();
    let lb = (*b1 - *b0).norm();
    if la == 0. || lb == 0. {
        return false;
    }
    // Signed distances to the other segment's supporting line
    let d1 = orient(b0, b1, a0) / lb;
    let d2 = orient(b0, b1, a1) / lb;
    let d3 = orient(a0, a1, b0) / la;
    let d4 = orient(a0, a1, b1) / la;
    let opposite = |u: f64, v: f64| (u > tolerance && v < -tolerance) || (u < -tolerance && v > tolerance);
    opposite(d1, d2) && opposite(d3, d4)
}
