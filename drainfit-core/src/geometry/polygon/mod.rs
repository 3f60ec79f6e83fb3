mod contains;
mod transforms;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{error::GeometryError, r2::R2};

/// Closed ring of vertices; closure is implicit (the last vertex is not a copy of the first).
///
/// Serializes as a JSON array of `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct Polygon {
    pub vertices: Vec<R2<f64>>,
}

impl From<Vec<R2<f64>>> for Polygon {
    fn from(vertices: Vec<R2<f64>>) -> Self {
        Polygon::new(vertices)
    }
}

impl From<Vec<(f64, f64)>> for Polygon {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Polygon::new(points.into_iter().map(R2::from).collect())
    }
}

impl From<Polygon> for Vec<(f64, f64)> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices.into_iter().map(<(f64, f64)>::from).collect()
    }
}

impl Polygon {
    /// Builds a ring, collapsing repeated consecutive vertices and dropping a
    /// trailing vertex that repeats the first (CAD rings are often stored closed).
    pub fn new(mut vertices: Vec<R2<f64>>) -> Self {
        vertices.dedup();
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Polygon { vertices }
    }

    /// Axis-aligned rectangle with lower-left corner `(x, y)`.
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Polygon::new(vec![
            R2 { x, y },
            R2 { x: x + width, y },
            R2 { x: x + width, y: y + height },
            R2 { x, y: y + height },
        ])
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (R2<f64>, R2<f64>)> + '_ {
        self.vertices.iter().copied().circular_tuple_windows()
    }

    /// Shoelace area; positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|(a, b)| a.cross(&b)).sum::<f64>() / 2.
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Area-weighted centroid. Fails when the ring has (near-)zero area.
    pub fn centroid(&self, area_eps: f64) -> Result<R2<f64>, GeometryError> {
        let signed_area = self.signed_area();
        let degenerate = GeometryError::DegenerateGeometry { area: signed_area.abs() };
        if signed_area.abs() <= area_eps || !signed_area.is_finite() {
            return Err(degenerate);
        }
        // Accumulate relative to the first vertex; far-from-origin rings lose
        // precision otherwise.
        let Some(&o) = self.vertices.first() else {
            return Err(degenerate);
        };
        let mut c = R2::zero();
        for (a, b) in self.edges() {
            let (a, b) = (a - o, b - o);
            let w = a.cross(&b);
            c = c + (a + b) * w;
        }
        Ok(o + c / (6. * signed_area))
    }

    /// Lower-left and upper-right corners of the bounding box.
    pub fn bounds(&self) -> (R2<f64>, R2<f64>) {
        let (min_x, max_x) = self.vertices.iter().map(|v| v.x).minmax().into_option().unwrap_or((0., 0.));
        let (min_y, max_y) = self.vertices.iter().map(|v| v.y).minmax().into_option().unwrap_or((0., 0.));
        (R2 { x: min_x, y: min_y }, R2 { x: max_x, y: max_y })
    }

    /// Check if a point is inside the polygon using ray casting algorithm.
    /// Casts a horizontal ray to the right and counts edge crossings.
    /// Points exactly on the boundary may land on either side; callers that care use `distance_to_boundary`.
    pub fn contains_point(&self, p: &R2<f64>) -> bool {
        let mut crossings = 0;
        for (v0, v1) in self.edges() {
            // Skip if edge is entirely above or below the ray
            let (y_min, y_max) = if v0.y < v1.y { (v0.y, v1.y) } else { (v1.y, v0.y) };
            if p.y < y_min || p.y >= y_max {
                continue;
            }
            let t = (p.y - v0.y) / (v1.y - v0.y);
            let x_crossing = v0.x + t * (v1.x - v0.x);
            if x_crossing > p.x {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    }

    /// Euclidean distance from `p` to the nearest point on the ring.
    pub fn distance_to_boundary(&self, p: &R2<f64>) -> f64 {
        self.edges()
            .map(|(a, b)| segment_distance(p, &a, &b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Indices of the first pair of edges that cross or touch, if any.
    ///
    /// Edge `i` runs from vertex `i` to vertex `i + 1`. Adjacent edges only
    /// count when they fold back onto each other (a zero-width spike).
    pub fn self_intersection(&self) -> Option<(usize, usize)> {
        let n = self.vertices.len();
        if n < 3 {
            return None;
        }
        let edge = |i: usize| (self.vertices[i], self.vertices[(i + 1) % n]);

        for i in 0..n {
            let (a0, a1) = edge(i);
            let (_, b1) = edge((i + 1) % n);
            // Adjacent edge i+1 shares a1; a spike doubles back along a0→a1
            let (u, v) = (a1 - a0, b1 - a1);
            if u.cross(&v) == 0. && u.dot(&v) < 0. {
                return Some((i, (i + 1) % n));
            }

            for j in (i + 2)..n {
                // Edge n-1 closes the ring onto edge 0
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (b0, b1) = edge(j);
                if segments_touch(&a0, &a1, &b0, &b1) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    pub fn is_self_intersecting(&self) -> bool {
        self.self_intersection().is_some()
    }

    /// Checks the ring invariants: at least 3 vertices, simple, non-degenerate.
    pub fn validate(&self, area_eps: f64) -> Result<(), GeometryError> {
        let distinct = self.vertices.iter().dedup().count();
        if self.vertices.len() < 3 || distinct < 3 {
            return Err(GeometryError::TooFewVertices(distinct));
        }
        if let Some(edges) = self.self_intersection() {
            return Err(GeometryError::SelfIntersecting { edges });
        }
        let area = self.area();
        if area <= area_eps || !area.is_finite() {
            return Err(GeometryError::DegenerateGeometry { area });
        }
        Ok(())
    }
}

fn orient(a: &R2<f64>, b: &R2<f64>, c: &R2<f64>) -> f64 {
    (*b - *a).cross(&(*c - *a))
}

fn on_segment(p: &R2<f64>, a: &R2<f64>, b: &R2<f64>) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segments share at least one point (proper crossing, or an endpoint lying on the other segment).
fn segments_touch(a0: &R2<f64>, a1: &R2<f64>, b0: &R2<f64>, b1: &R2<f64>) -> bool {
    let d1 = orient(b0, b1, a0);
    let d2 = orient(b0, b1, a1);
    let d3 = orient(a0, a1, b0);
    let d4 = orient(a0, a1, b1);

    if ((d1 > 0. && d2 < 0.) || (d1 < 0. && d2 > 0.)) && ((d3 > 0. && d4 < 0.) || (d3 < 0. && d4 > 0.)) {
        return true;
    }
    (d1 == 0. && on_segment(a0, b0, b1))
        || (d2 == 0. && on_segment(a1, b0, b1))
        || (d3 == 0. && on_segment(b0, a0, a1))
        || (d4 == 0. && on_segment(b1, a0, a1))
}

pub(crate) fn segment_distance(p: &R2<f64>, a: &R2<f64>, b: &R2<f64>) -> f64 {
    let ab = *b - *a;
    let len2 = ab.dot(&ab);
    if len2 == 0. {
        return (*p - *a).norm();
    }
    let t = ((*p - *a).dot(&ab) / len2).clamp(0., 1.);
    (*p - (*a + ab * t)).norm()
}

#[cfg(test)]
mod tests;
