use super::super::*;

fn triangle() -> Polygon {
    Polygon::new(vec![
        R2 { x: 0., y: 0. },
        R2 { x: 1., y: 0. },
        R2 { x: 0.5, y: 1. },
    ])
}

fn square() -> Polygon {
    Polygon::rect(0., 0., 1., 1.)
}

/// L-shape: 4×4 square with the upper-right 2×2 quadrant removed.
fn ell() -> Polygon {
    Polygon::new(vec![
        R2 { x: 0., y: 0. },
        R2 { x: 4., y: 0. },
        R2 { x: 4., y: 2. },
        R2 { x: 2., y: 2. },
        R2 { x: 2., y: 4. },
        R2 { x: 0., y: 4. },
    ])
}

#[test]
fn test_triangle_area() {
    let t = triangle();
    // Area of triangle with base 1 and height 1 = 0.5
    assert_relative_eq!(t.area(), 0.5, epsilon = 1e-10);
}

#[test]
fn test_area_ignores_orientation() {
    let mut cw = square();
    cw.vertices.reverse();
    assert_relative_eq!(cw.signed_area(), -1., epsilon = 1e-10);
    assert_relative_eq!(cw.area(), 1., epsilon = 1e-10);
}

#[test]
fn test_closed_ring_is_normalized() {
    let closed = Polygon::new(vec![
        R2 { x: 0., y: 0. },
        R2 { x: 1., y: 0. },
        R2 { x: 1., y: 0. },
        R2 { x: 1., y: 1. },
        R2 { x: 0., y: 0. },
    ]);
    assert_eq!(closed.num_vertices(), 3);
}

#[test]
fn test_centroid() {
    let c = triangle().centroid(1e-9).unwrap();
    assert_relative_eq!(c, R2 { x: 0.5, y: 1. / 3. }, epsilon = 1e-10);

    // Area-weighted, not the vertex average
    let c = ell().centroid(1e-9).unwrap();
    assert_relative_eq!(c, R2 { x: 5. / 3., y: 5. / 3. }, epsilon = 1e-10);
}

#[test]
fn test_centroid_far_from_origin() {
    let far = square().translate(1e7, -3e6);
    let c = far.centroid(1e-9).unwrap();
    assert_relative_eq!(c, R2 { x: 1e7 + 0.5, y: -3e6 + 0.5 }, epsilon = 1e-6);
}

#[test]
fn test_centroid_degenerate() {
    let flat = Polygon::new(vec![
        R2 { x: 0., y: 0. },
        R2 { x: 1., y: 0. },
        R2 { x: 2., y: 0. },
    ]);
    assert!(matches!(flat.centroid(1e-9), Err(GeometryError::DegenerateGeometry { .. })));
}

#[test]
fn test_rotate_about_centroid_keeps_centroid() {
    let l = ell();
    let c = l.centroid(1e-9).unwrap();
    for angle in [0., 17., 90., 135., 271.5] {
        let rotated = l.rotate(angle, c);
        assert_relative_eq!(rotated.centroid(1e-9).unwrap(), c, epsilon = 1e-9);
        assert_relative_eq!(rotated.area(), l.area(), epsilon = 1e-9);
    }
}

#[test]
fn test_rotate_origin_matters() {
    let s = square();
    let about_corner = s.rotate(90., R2 { x: 0., y: 0. });
    let about_center = s.rotate(90., R2 { x: 0.5, y: 0.5 });
    assert_relative_eq!(about_corner.vertices[1], R2 { x: 0., y: 1. }, epsilon = 1e-12);
    assert_relative_eq!(about_center.vertices[1], R2 { x: 1., y: 1. }, epsilon = 1e-12);
}

#[test]
fn test_translate() {
    let t = triangle().translate(1., 2.);
    assert_relative_eq!(t.vertices[0], R2 { x: 1., y: 2. }, epsilon = 1e-10);
    assert_relative_eq!(t.vertices[2], R2 { x: 1.5, y: 3. }, epsilon = 1e-10);
}

#[test]
fn test_bounds() {
    let (lo, hi) = ell().translate(-1., 3.).bounds();
    assert_eq!(lo, R2 { x: -1., y: 3. });
    assert_eq!(hi, R2 { x: 3., y: 7. });
}

#[test]
fn test_contains_point() {
    let l = ell();
    assert!(l.contains_point(&R2 { x: 1., y: 1. }));
    assert!(l.contains_point(&R2 { x: 1., y: 3. }));
    assert!(!l.contains_point(&R2 { x: 3., y: 3. }));
    assert!(!l.contains_point(&R2 { x: -1., y: 1. }));
}

#[test]
fn test_distance_to_boundary() {
    let s = square();
    assert_relative_eq!(s.distance_to_boundary(&R2 { x: 0.5, y: 0.5 }), 0.5, epsilon = 1e-12);
    assert_relative_eq!(s.distance_to_boundary(&R2 { x: 2., y: 1. }), 1., epsilon = 1e-12);
    assert_relative_eq!(s.distance_to_boundary(&R2 { x: 2., y: 2. }), 2f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_serde_pairs() {
    let p: Polygon = serde_json::from_str("[[0, 0], [2, 0], [2, 1], [0, 1], [0, 0]]").unwrap();
    assert_eq!(p, Polygon::rect(0., 0., 2., 1.));
    assert_eq!(serde_json::to_string(&p).unwrap(), "[[0.0,0.0],[2.0,0.0],[2.0,1.0],[0.0,1.0]]");
}
