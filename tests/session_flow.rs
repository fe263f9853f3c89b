//! End-to-end: load the demo catalog, fit a canvas, trace a shape, paint it.

use shapetrace::catalog::Catalog;
use shapetrace::config::TraceConfig;
use shapetrace::geometry::Point;
use shapetrace::layout::{self, CanvasSize};
use shapetrace::raster::{Stroke, StrokeLayer};
use shapetrace::session::TraceSession;
use shapetrace::zone::Zone;

const DEMO: &str = include_str!("../demos/shapes.json");

fn demo() -> Catalog {
    Catalog::from_json(DEMO).unwrap()
}

#[test]
fn demo_catalog_parses() {
    let catalog = demo();
    assert!(catalog.len() >= 3);
    let kinds: Vec<_> = catalog.entries().iter().map(|e| e.shape.kind()).collect();
    for kind in ["rect", "circle", "polygon"] {
        assert!(kinds.contains(&kind), "demo catalog lacks a {kind}");
    }
}

#[test]
fn demo_shapes_fit_reference_canvas() {
    let config = TraceConfig::default();
    let reference = config.canvas.reference();
    for entry in demo().entries() {
        let b = entry.shape.bounds();
        assert!(b.left >= 0.0 && b.top >= 0.0, "{} starts off-canvas", entry.id);
        assert!(b.right <= f64::from(reference.width), "{} overflows width", entry.id);
        assert!(b.bottom <= f64::from(reference.height), "{} overflows height", entry.id);
    }
}

#[test]
fn every_demo_shape_contains_its_center() {
    for entry in demo().entries() {
        let c = entry.shape.bounds().center();
        assert!(entry.shape.contains(c), "{} does not contain its bounds center", entry.id);
    }
}

#[test]
fn trace_circle_on_small_canvas() {
    let config = TraceConfig::default();
    let mut catalog = demo();
    let circle = catalog.select_id("circle").unwrap().shape.clone();

    // 382px container -> 350x250 canvas, half the reference.
    let canvas = layout::fit_canvas(382.0, &config.canvas);
    assert_eq!(canvas, CanvasSize::new(350, 250));

    let mut session = TraceSession::new(circle, canvas, config);
    let mut layer = StrokeLayer::new(canvas.width, canvas.height);

    // Scaled circle: center (175, 125), r = 75.
    let path = [
        Point::new(175.0, 125.0),
        Point::new(240.0, 125.0),
        // 15px past the outline: ~4mm
        Point::new(265.0, 125.0),
        // 75px past: ~20mm
        Point::new(325.0, 125.0),
        Point::new(200.0, 125.0),
    ];
    let mut stroke = Stroke::new(40.0).unwrap();
    let mut zones = Vec::new();
    for (i, p) in path.into_iter().enumerate() {
        stroke.push(p);
        let zone = if i == 0 { Some(session.pointer_down(p)) } else { session.pointer_move(p) };
        zones.push(zone.unwrap());
    }
    layer.push(stroke);
    let coverage = session.pointer_up(&layer).unwrap();

    assert_eq!(zones, [Zone::Inside, Zone::Inside, Zone::OutsideNear, Zone::OutsideFar, Zone::Inside]);
    let stats = session.stats();
    assert_eq!(stats.near_count, 1);
    assert_eq!(stats.far_count, 1);
    assert_eq!(stats.outline_crossings, 2);
    assert_eq!(stats.total_strokes, 1);
    assert!(coverage.painted_samples > 0);
    assert!(stats.coverage > 0 && stats.coverage < 100);
}

#[test]
fn flood_paint_reaches_full_coverage() {
    let config = TraceConfig::default();
    let catalog = demo();
    let canvas = config.canvas.reference();
    let mut session = TraceSession::new(catalog.current().shape.clone(), canvas, config);

    let mut layer = StrokeLayer::new(canvas.width, canvas.height);
    let mut stroke = Stroke::new(60.0).unwrap();
    // Serpentine over the whole canvas, rows 20px apart.
    for row in 0..=25_u32 {
        let y = f64::from(row * 20);
        let (from, to) = if row % 2 == 0 { (0.0, 700.0) } else { (700.0, 0.0) };
        stroke.push(Point::new(from, y));
        stroke.push(Point::new(to, y));
    }
    session.pointer_down(Point::new(0.0, 0.0));
    layer.push(stroke);
    session.pointer_up(&layer);
    assert_eq!(session.stats().coverage, 100);
}

#[test]
fn next_shape_starts_fresh() {
    let config = TraceConfig::default();
    let mut catalog = demo();
    let canvas = config.canvas.reference();
    let mut session = TraceSession::new(catalog.current().shape.clone(), canvas, config);
    session.pointer_down(Point::new(0.0, 0.0));
    session.pointer_up(&StrokeLayer::new(canvas.width, canvas.height));
    assert_eq!(session.stats().far_count, 1);

    let next = catalog.advance().shape.clone();
    session.change_shape(next);
    assert_eq!(session.stats().far_count, 0);
    assert_eq!(session.stats().total_strokes, 0);
}
