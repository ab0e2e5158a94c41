// File: crates/chart-core/tests/geometry.rs
// Purpose: Unit-circle projection and interpolation helpers.

use std::f64::consts::{FRAC_PI_2, PI};

use chart_core::geometry::{ratio_or_zero, Point};
use chart_core::lerp;

#[test]
fn from_angle_projects_on_unit_circle() {
    let p = Point::from_angle(0.0);
    assert_eq!(p, Point::new(1.0, 0.0));
    let p = Point::from_angle(-FRAC_PI_2);
    assert!(p.x.abs() < 1e-12 && (p.y + 1.0).abs() < 1e-12);
    for i in 0..16 {
        let p = Point::from_angle(i as f64 * PI / 8.0);
        assert!((p.distance(Point::ORIGIN) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn lerp_interpolates_and_extrapolates() {
    assert_eq!(lerp(100.0, 20.0, 0.0), 100.0);
    assert_eq!(lerp(100.0, 20.0, 0.5), 60.0);
    assert_eq!(lerp(100.0, 20.0, 1.5), -20.0);
    let p = Point::new(0.0, 0.0).lerp(Point::new(10.0, -4.0), 0.25);
    assert_eq!(p, Point::new(2.5, -1.0));
}

#[test]
fn ratio_or_zero_never_returns_nan() {
    assert_eq!(ratio_or_zero(5.0, 0.0), 0.0);
    assert_eq!(ratio_or_zero(0.0, 0.0), 0.0);
    assert_eq!(ratio_or_zero(1.0, f64::NAN), 0.0);
    assert_eq!(ratio_or_zero(3.0, 4.0), 0.75);
}

#[test]
fn points_format_as_svg_pairs() {
    assert_eq!(Point::new(0.0, -1.0).to_string(), "0 -1");
    assert_eq!(Point::new(12.5, 3.0).to_string(), "12.5 3");
}
