#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn shapes_approx_eq(a: &Shape, b: &Shape) -> bool {
    match (a, b) {
        (Shape::Rect(a), Shape::Rect(b)) => {
            approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y()) && approx_eq(a.width(), b.width()) && approx_eq(a.height(), b.height())
        }
        (Shape::Circle(a), Shape::Circle(b)) => {
            approx_eq(a.center().x, b.center().x) && approx_eq(a.center().y, b.center().y) && approx_eq(a.radius(), b.radius())
        }
        (Shape::Polygon(a), Shape::Polygon(b)) => {
            a.points().len() == b.points().len()
                && a.points().iter().zip(b.points()).all(|(p, q)| approx_eq(p.x, q.x) && approx_eq(p.y, q.y))
        }
        _ => false,
    }
}

fn rect() -> Shape {
    Shape::rect(10.0, 20.0, 300.0, 150.0).unwrap()
}

fn circle() -> Shape {
    Shape::circle(350.0, 250.0, 120.0).unwrap()
}

fn triangle() -> Shape {
    Shape::polygon(vec![Point::new(350.0, 80.0), Point::new(550.0, 420.0), Point::new(150.0, 420.0)]).unwrap()
}

// =============================================================
// Per-variant scaling
// =============================================================

#[test]
fn rect_scales_each_axis() {
    let s = scale_shape(&rect(), 2.0, 0.5);
    assert!(shapes_approx_eq(&s, &Shape::rect(20.0, 10.0, 600.0, 75.0).unwrap()));
}

#[test]
fn circle_center_per_axis_radius_by_min() {
    let s = scale_shape(&circle(), 0.5, 2.0);
    assert!(shapes_approx_eq(&s, &Shape::circle(175.0, 500.0, 60.0).unwrap()));
}

#[test]
fn polygon_scales_every_vertex() {
    let s = scale_shape(&triangle(), 0.5, 0.5);
    let expected = Shape::polygon(vec![Point::new(175.0, 40.0), Point::new(275.0, 210.0), Point::new(75.0, 210.0)]).unwrap();
    assert!(shapes_approx_eq(&s, &expected));
}

#[test]
fn identity_scale_is_noop() {
    for s in [rect(), circle(), triangle()] {
        assert_eq!(scale_shape(&s, 1.0, 1.0), s);
    }
}

#[test]
fn scaling_leaves_input_untouched() {
    let original = rect();
    let copy = original.clone();
    let _scaled = original.scaled(3.0, 3.0);
    assert_eq!(original, copy);
}

#[test]
fn negative_factor_mirrors_rect_with_positive_size() {
    let Shape::Rect(r) = scale_shape(&rect(), -1.0, 1.0) else {
        panic!("expected rect");
    };
    assert_eq!(r.x(), -310.0);
    assert_eq!(r.width(), 300.0);
}

#[test]
fn negative_factor_keeps_radius_non_negative() {
    let Shape::Circle(c) = scale_shape(&circle(), -2.0, 3.0) else {
        panic!("expected circle");
    };
    assert_eq!(c.radius(), 240.0);
    assert_eq!(c.center().x, -700.0);
}

#[test]
fn zero_factor_collapses_without_error() {
    let Shape::Rect(r) = scale_shape(&rect(), 0.0, 1.0) else {
        panic!("expected rect");
    };
    assert_eq!(r.width(), 0.0);
}

// =============================================================
// Composition
// =============================================================

#[test]
fn rect_composition_non_uniform() {
    let twice = scale_shape(&scale_shape(&rect(), 2.0, 0.5), 0.75, 3.0);
    let once = scale_shape(&rect(), 1.5, 1.5);
    assert!(shapes_approx_eq(&twice, &once));
}

#[test]
fn polygon_composition_non_uniform() {
    let twice = scale_shape(&scale_shape(&triangle(), 1.2, 0.4), 0.5, 2.5);
    let once = scale_shape(&triangle(), 0.6, 1.0);
    assert!(shapes_approx_eq(&twice, &once));
}

#[test]
fn circle_composition_uniform() {
    let twice = scale_shape(&scale_shape(&circle(), 0.8, 0.8), 1.25, 1.25);
    let once = scale_shape(&circle(), 1.0, 1.0);
    assert!(shapes_approx_eq(&twice, &once));
}

#[test]
fn circle_composition_breaks_under_non_uniform_scaling() {
    // min(2, 0.5) * min(0.5, 2) = 0.25, but min(1, 1) = 1.
    let twice = scale_shape(&scale_shape(&circle(), 2.0, 0.5), 0.5, 2.0);
    let once = scale_shape(&circle(), 1.0, 1.0);
    assert!(!shapes_approx_eq(&twice, &once));
    let Shape::Circle(c) = twice else {
        panic!("expected circle");
    };
    assert!(approx_eq(c.radius(), 30.0));
    assert!(approx_eq(c.center().x, 350.0));
}

// =============================================================
// Finite factors
// =============================================================

#[test]
fn scaled_shapes_survive_a_json_round_trip() {
    for s in [rect(), circle(), triangle()] {
        let scaled = scale_shape(&s, 0.43, 0.428);
        let json = serde_json::to_string(&scaled).unwrap();
        let back: Shape = serde_json::from_str(&json).unwrap();
        assert!(shapes_approx_eq(&back, &scaled));
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "scale factors must be finite")]
fn infinite_factor_is_rejected_in_debug_builds() {
    let _scaled = scale_shape(&rect(), f64::INFINITY, 1.0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "scale factors must be finite")]
fn nan_factor_is_rejected_in_debug_builds() {
    let _scaled = rect().scaled(1.0, f64::NAN);
}
