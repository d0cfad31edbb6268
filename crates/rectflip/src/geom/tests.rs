use super::*;
use nalgebra::vector;

#[test]
fn from_bounds_places_corners() {
    let r = Rectangle::from_bounds(10.0, 20.0, 30.0, 50.0, 7);
    assert_eq!(r.bottom_left, vector![10.0, 20.0]);
    assert_eq!(r.bottom_right, vector![30.0, 20.0]);
    assert_eq!(r.top_left, vector![10.0, 50.0]);
    assert_eq!(r.top_right, vector![30.0, 50.0]);
    assert_eq!(r.label, 7);
    assert!((r.area() - 600.0).abs() < 1e-12);
    assert_eq!(r.edge(Side::Right), (vector![30.0, 20.0], vector![30.0, 50.0]));
    assert_eq!(r.edge(Side::Top), r.top_edge());
}

#[test]
fn validate_rejects_skewed_and_flat() {
    let cfg = RectCfg::default();
    assert!(Rectangle::from_bounds(0.0, 0.0, 50.0, 100.0, 1)
        .validate(&cfg)
        .is_ok());
    let flat = Rectangle::from_bounds(0.0, 10.0, 50.0, 10.0, 2);
    assert!(flat.validate(&cfg).is_err());
    let mut skew = Rectangle::from_bounds(0.0, 0.0, 50.0, 50.0, 3);
    skew.top_right.y = 49.0;
    assert!(skew.validate(&cfg).is_err());
    let outside = Rectangle::from_bounds(90.0, 0.0, 110.0, 10.0, 4);
    assert!(outside.validate(&cfg).is_err());
}

#[test]
fn tolerance_helpers() {
    let eps = RectCfg::default().eps;
    assert!(approx_eq(1.0, 1.0 + 1e-12, eps));
    assert!(!approx_eq(1.0, 1.0 + 1e-6, eps));
    assert!(points_eq(vector![100.0 / 3.0, 0.0], vector![33.333333333333336, 0.0], eps));
    // Touching at a single coordinate is not an overlap.
    assert!(!open_overlap(0.0, 50.0, 50.0, 100.0, eps));
    assert!(open_overlap(0.0, 50.0, 49.0, 100.0, eps));
    assert!(open_overlap(10.0, 20.0, 0.0, 100.0, eps));
}

#[test]
fn sides_pair_up() {
    for s in Side::ALL {
        assert_eq!(s.opposite().opposite(), s);
        assert_ne!(s.opposite(), s);
    }
    assert_eq!(Side::Left.opposite(), Side::Right);
}
