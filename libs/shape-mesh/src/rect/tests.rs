use super::*;
use approx::assert_relative_eq;

fn star() -> Vec<Point2> {
    (0..10)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / 10.0;
            let radius = if i % 2 == 0 { 3.0 } else { 1.2 };
            Point2::new(7.0 + radius * angle.sin(), -2.0 + radius * angle.cos())
        })
        .collect()
}

#[test]
fn test_unit_rect_bounds_are_exact() {
    let uv = stretch_to_rect(&star(), Rect::UNIT);
    let (min, max) = extent(&uv);
    assert_eq!(min, Point2::ZERO);
    assert_eq!(max, Point2::ONE);
}

#[test]
fn test_centered_rect_bounds_are_exact() {
    let shape = stretch_to_rect(&star(), Rect::CENTERED_UNIT);
    let (min, max) = extent(&shape);
    assert_eq!(min, Point2::splat(-0.5));
    assert_eq!(max, Point2::splat(0.5));
}

#[test]
fn test_preserves_order_and_count() {
    let input = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 2.0),
        Point2::new(4.0, 2.0),
        Point2::new(4.0, 0.0),
    ];
    let out = stretch_to_rect(&input, Rect::UNIT);
    assert_eq!(
        out,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
        ]
    );
}

#[test]
fn test_non_uniform_target() {
    let rect = Rect::new(Point2::new(10.0, -1.0), Point2::new(2.0, 4.0));
    let out = stretch_to_rect(&[Point2::new(1.0, 1.0), Point2::new(2.0, 3.0), Point2::new(3.0, 2.0)], rect);
    assert_relative_eq!(out[0].x, 10.0);
    assert_relative_eq!(out[0].y, -1.0);
    assert_relative_eq!(out[1].x, 11.0);
    assert_relative_eq!(out[1].y, 3.0);
    assert_relative_eq!(out[2].x, 12.0);
    assert_relative_eq!(out[2].y, 1.0);
}

#[test]
fn test_zero_extent_is_non_finite() {
    let flat = [Point2::new(0.0, 1.0), Point2::new(2.0, 1.0), Point2::new(3.0, 1.0)];
    let out = stretch_to_rect(&flat, Rect::UNIT);
    assert_eq!(out.len(), 3);
    assert!(out.iter().any(|p| !p.is_finite()));
}

#[test]
fn test_empty_input() {
    assert!(stretch_to_rect(&[], Rect::UNIT).is_empty());
}

#[test]
fn test_check_polygon() {
    assert!(check_polygon(&star()).is_ok());

    let err = check_polygon(&[Point2::ZERO, Point2::ONE]).unwrap_err();
    assert!(err.to_string().contains("2 points"));

    let flat = [Point2::new(0.0, 1.0), Point2::new(2.0, 1.0), Point2::new(3.0, 1.0)];
    assert!(matches!(
        check_polygon(&flat),
        Err(MeshError::DegeneratePolygon { .. })
    ));

    let nan = [Point2::ZERO, Point2::new(f64::NAN, 1.0), Point2::ONE];
    assert!(check_polygon(&nan).is_err());
}
