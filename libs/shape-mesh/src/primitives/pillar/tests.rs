use std::collections::HashMap;

use super::*;
use crate::core::frame::Direction;
use approx::assert_relative_eq;

fn sample_triangle() -> Vec<Point2> {
    vec![Point2::new(0.0, 0.0), Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)]
}

/// Clockwise L with unequal arms, area 4 before normalization.
fn l_shape() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 2.0),
        Point2::new(1.0, 2.0),
        Point2::new(1.0, 1.0),
        Point2::new(3.0, 1.0),
        Point2::new(3.0, 0.0),
    ]
}

fn reversed(points: &[Point2]) -> Vec<Point2> {
    points.iter().rev().copied().collect()
}

type Key = [i64; 3];

fn weld(p: Point3) -> Key {
    (p * 1e9).round().as_i64vec3().to_array()
}

/// Every directed edge (by position) appears exactly once and its reverse
/// exactly once.
fn assert_closed(mesh: &Mesh) {
    let v = mesh.vertices();
    let mut edges: HashMap<(Key, Key), usize> = HashMap::new();
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| weld(v[i as usize]));
        for edge in [(a, b), (b, c), (c, a)] {
            *edges.entry(edge).or_default() += 1;
        }
    }
    for (&(a, b), &count) in &edges {
        assert_eq!(count, 1, "edge {a:?} -> {b:?} used {count} times");
        assert_eq!(edges.get(&(b, a)), Some(&1), "edge {a:?} -> {b:?} is open");
    }
}

/// Divergence-theorem volume; positive when all faces point outward.
fn signed_volume(mesh: &Mesh) -> f64 {
    let v = mesh.vertices();
    mesh.triangles()
        .iter()
        .map(|tri| {
            let [a, b, c] = tri.map(|i| v[i as usize]);
            a.dot(b.cross(c)) / 6.0
        })
        .sum()
}

#[test]
fn test_pillar_counts() {
    for polygon in [sample_triangle(), l_shape()] {
        let n = polygon.len();
        let mesh = pillar(&Direction::NegZ.frame(), &polygon);
        assert_eq!(mesh.vertex_count(), 4 * n);
        assert_eq!(mesh.triangle_count(), 2 * (n - 2) + 2 * n);
        assert_eq!(mesh.uvs().unwrap().len(), 4 * n);
        assert_eq!(mesh.normals().unwrap().len(), 4 * n);
        assert!(mesh.validate().is_ok());
    }
}

#[test]
fn test_pillar_triangle_layout() {
    let mesh = pillar(&Direction::NegZ.frame(), &sample_triangle());
    assert_eq!(
        mesh.indices(),
        vec![
            1, 2, 0, // front
            3, 5, 4, // back
            6, 9, 10, 6, 10, 7, //
            7, 10, 11, 7, 11, 8, //
            8, 11, 9, 8, 9, 6,
        ]
    );
}

#[test]
fn test_pillar_spans_unit_depth() {
    for direction in Direction::ALL {
        let frame = direction.frame();
        let mesh = pillar(&frame, &l_shape());
        let bounds = mesh.bounds();
        assert_relative_eq!(bounds.center().length(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.size().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.size().y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.size().z, 1.0, epsilon = 1e-12);

        let depth = frame.depth();
        let (front, back) = mesh.vertices().split_at(mesh.vertex_count() / 4);
        assert!(front.iter().all(|p| (p.dot(depth) - 0.5).abs() < 1e-12));
        assert!(back[..front.len()]
            .iter()
            .all(|p| (p.dot(depth) + 0.5).abs() < 1e-12));
    }
}

#[test]
fn test_pillar_is_closed_and_outward() {
    for direction in Direction::ALL {
        let frame = direction.frame();
        for polygon in [sample_triangle(), l_shape(), reversed(&l_shape())] {
            let mesh = pillar(&frame, &polygon);
            assert_closed(&mesh);
            assert!(signed_volume(&mesh) > 0.0, "{direction} faces inward");
        }
    }
}

#[test]
fn test_pillar_volume_matches_normalized_area() {
    // The L fills 4 of the 6 cells of its 3×2 box.
    let mesh = pillar(&Direction::PosX.frame(), &l_shape());
    assert_relative_eq!(signed_volume(&mesh), 4.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn test_pillar_normals() {
    let frame = Direction::NegY.frame();
    let n = l_shape().len();
    let mesh = pillar(&frame, &l_shape());
    let normals = mesh.normals().unwrap();
    let depth = frame.depth();

    for normal in &normals[..n] {
        assert!(normal.abs_diff_eq(depth, 1e-12));
    }
    for normal in &normals[n..2 * n] {
        assert!(normal.abs_diff_eq(-depth, 1e-12));
    }
    for normal in &normals[2 * n..] {
        assert_relative_eq!(normal.dot(depth), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normal.length(), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_pillar_uvs() {
    let polygon = l_shape();
    let n = polygon.len();
    let mesh = pillar(&Direction::NegZ.frame(), &polygon);
    let uvs = mesh.uvs().unwrap();

    let cap = stretch_to_rect(&polygon, Rect::UNIT);
    assert_eq!(&uvs[..n], cap.as_slice());
    assert_eq!(&uvs[n..2 * n], cap.as_slice());

    for i in 0..n {
        let u = i as f64 / n as f64;
        assert_relative_eq!(uvs[2 * n + i].x, u);
        assert_eq!(uvs[2 * n + i].y, 1.0);
        assert_relative_eq!(uvs[3 * n + i].x, u);
        assert_eq!(uvs[3 * n + i].y, 0.0);
    }
}

#[test]
fn test_pillar_is_deterministic() {
    let frame = Direction::PosY.frame();
    assert_eq!(pillar(&frame, &l_shape()), pillar(&frame, &l_shape()));
}

#[test]
fn test_collider_layout() {
    let polygon = sample_triangle();
    let mesh = pillar_for_collider(&Direction::NegZ.frame(), &polygon);
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.triangle_count(), 6);
    assert!(mesh.uvs().is_none());
    assert_eq!(mesh.normals().unwrap().len(), 6);
    assert_eq!(
        mesh.indices(),
        vec![0, 3, 4, 0, 4, 1, 1, 4, 5, 1, 5, 2, 2, 5, 3, 2, 3, 0]
    );
    assert!(mesh.validate().is_ok());
}

#[test]
fn test_collider_mirrors_walls_for_counter_clockwise_outline() {
    let polygon = reversed(&sample_triangle());
    assert!(signed_area(&polygon) > 0.0);
    let mesh = pillar_for_collider(&Direction::NegZ.frame(), &polygon);
    assert_eq!(
        mesh.indices(),
        vec![0, 4, 3, 0, 1, 4, 1, 5, 4, 1, 2, 5, 2, 3, 5, 2, 0, 3]
    );
}

#[test]
fn test_collider_matches_pillar_walls() {
    let frame = Direction::PosX.frame();
    for polygon in [l_shape(), reversed(&l_shape())] {
        let n = polygon.len();
        let solid = pillar(&frame, &polygon);
        let collider = pillar_for_collider(&frame, &polygon);

        assert_eq!(collider.vertices(), &solid.vertices()[2 * n..]);
        let walls = &solid.triangles()[2 * (n - 2)..];
        let shift = 2 * n as u32;
        let expected: Vec<[u32; 3]> = walls.iter().map(|t| t.map(|i| i - shift)).collect();
        assert_eq!(collider.triangles(), expected.as_slice());
    }
}

#[test]
fn test_collider_walls_face_outward() {
    let frame = Direction::NegZ.frame();
    for polygon in [l_shape(), reversed(&l_shape())] {
        let mesh = pillar_for_collider(&frame, &polygon);
        let v = mesh.vertices();
        let center = mesh.bounds().center();
        // The wall along the long bottom edge y = -0.5 must point to -Y.
        let bottom = mesh
            .triangles()
            .iter()
            .map(|tri| tri.map(|i| v[i as usize]))
            .find(|[a, b, c]| [a, b, c].iter().all(|p| (p.y + 0.5).abs() < 1e-12))
            .unwrap();
        let [a, b, c] = bottom;
        let facing = (b - a).cross(c - a);
        assert!(facing.y < 0.0);
        assert!(facing.dot(a - center) > 0.0);
    }
}
