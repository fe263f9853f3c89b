use super::*;

// =============================================================
// PaintMode
// =============================================================

#[test]
fn composited_treats_near_white_as_background() {
    assert!(!PaintMode::Composited.is_paint([255, 255, 255, 255]));
    assert!(!PaintMode::Composited.is_paint([246, 250, 246, 255]));
}

#[test]
fn composited_counts_any_channel_at_threshold_as_paint() {
    assert!(PaintMode::Composited.is_paint([245, 255, 255, 255]));
    assert!(PaintMode::Composited.is_paint([255, 255, 0, 255]));
}

#[test]
fn transparent_is_never_paint() {
    assert!(!PaintMode::Composited.is_paint([0, 0, 255, 0]));
    assert!(!PaintMode::PaintLayer.is_paint([0, 0, 255, 0]));
}

#[test]
fn paint_layer_ignores_whiteness() {
    assert!(PaintMode::PaintLayer.is_paint([255, 255, 255, 1]));
}

#[test]
fn default_mode_is_composited() {
    assert_eq!(PaintMode::default(), PaintMode::Composited);
}

// =============================================================
// RgbaRaster
// =============================================================

#[test]
fn new_rejects_wrong_length() {
    let err = RgbaRaster::new(2, 2, vec![0; 15], PaintMode::PaintLayer).unwrap_err();
    assert_eq!(err, RasterError::SizeMismatch { width: 2, height: 2, expected: 16, actual: 15 });
}

#[test]
fn new_accepts_exact_length() {
    let r = RgbaRaster::new(3, 2, vec![0; 24], PaintMode::PaintLayer).unwrap();
    assert_eq!((r.width(), r.height()), (3, 2));
    assert_eq!(r.mode(), PaintMode::PaintLayer);
}

#[test]
fn blank_composited_is_unpainted_white() {
    let r = RgbaRaster::blank(4, 4, PaintMode::Composited);
    assert_eq!(r.pixel(1, 1), Some([255, 255, 255, 255]));
    assert!(!r.is_painted(1, 1));
}

#[test]
fn blank_layer_is_transparent() {
    let r = RgbaRaster::blank(4, 4, PaintMode::PaintLayer);
    assert_eq!(r.pixel(3, 3), Some([0, 0, 0, 0]));
    assert!(!r.is_painted(3, 3));
}

#[test]
fn set_pixel_marks_paint() {
    let mut r = RgbaRaster::blank(4, 4, PaintMode::Composited);
    assert!(r.set_pixel(2, 1, [0, 0, 255, 255]));
    assert!(r.is_painted(2, 1));
    assert!(!r.is_painted(1, 2));
}

#[test]
fn set_pixel_out_of_range_is_rejected() {
    let mut r = RgbaRaster::blank(4, 4, PaintMode::Composited);
    assert!(!r.set_pixel(4, 0, [0, 0, 0, 255]));
    assert!(!r.set_pixel(0, 4, [0, 0, 0, 255]));
}

#[test]
fn out_of_range_pixel_is_unpainted() {
    let r = RgbaRaster::new(1, 1, vec![0, 0, 0, 255], PaintMode::PaintLayer).unwrap();
    assert!(r.is_painted(0, 0));
    assert!(!r.is_painted(1, 0));
    assert_eq!(r.pixel(0, 1), None);
}

#[test]
fn row_major_layout() {
    let mut data = vec![0; 2 * 2 * 4];
    // pixel (1, 0) is bytes 4..8; pixel (0, 1) is bytes 8..12
    data[7] = 255;
    let r = RgbaRaster::new(2, 2, data, PaintMode::PaintLayer).unwrap();
    assert!(r.is_painted(1, 0));
    assert!(!r.is_painted(0, 1));
}

#[test]
fn zero_sized_raster() {
    let r = RgbaRaster::blank(0, 0, PaintMode::Composited);
    assert!(!r.is_painted(0, 0));
}

// =============================================================
// Stroke / StrokeLayer
// =============================================================

fn stroke(brush: f64, pts: &[(f64, f64)]) -> Stroke {
    let mut s = Stroke::new(brush).unwrap();
    for &(x, y) in pts {
        s.push(Point::new(x, y));
    }
    s
}

#[test]
fn empty_stroke_covers_nothing() {
    assert!(!Stroke::new(10.0).unwrap().covers(Point::new(0.0, 0.0)));
}

#[test]
fn single_point_stroke_is_a_dot() {
    let s = stroke(10.0, &[(50.0, 50.0)]);
    assert!(s.covers(Point::new(54.0, 50.0)));
    assert!(s.covers(Point::new(50.0, 55.0)));
    assert!(!s.covers(Point::new(56.0, 50.0)));
}

#[test]
fn segment_covers_within_half_brush() {
    let s = stroke(8.0, &[(0.0, 10.0), (100.0, 10.0)]);
    assert!(s.covers(Point::new(50.0, 14.0)));
    assert!(!s.covers(Point::new(50.0, 14.5)));
}

#[test]
fn segment_ends_are_rounded() {
    let s = stroke(8.0, &[(0.0, 10.0), (100.0, 10.0)]);
    assert!(s.covers(Point::new(103.0, 10.0)));
    assert!(!s.covers(Point::new(105.0, 10.0)));
}

#[test]
fn layer_checks_every_stroke() {
    let mut layer = StrokeLayer::new(200, 200);
    layer.push(stroke(4.0, &[(10.0, 10.0), (20.0, 10.0)]));
    layer.push(stroke(4.0, &[(100.0, 100.0), (100.0, 150.0)]));
    assert!(layer.is_painted(15, 10));
    assert!(layer.is_painted(100, 120));
    assert!(!layer.is_painted(60, 60));
    assert_eq!(layer.strokes().len(), 2);
}

#[test]
fn layer_clips_to_its_size() {
    let mut layer = StrokeLayer::new(10, 10);
    layer.push(stroke(50.0, &[(5.0, 5.0)]));
    assert!(layer.is_painted(9, 9));
    assert!(!layer.is_painted(10, 5));
}

#[test]
fn layer_clear_removes_paint() {
    let mut layer = StrokeLayer::new(10, 10);
    layer.push(stroke(4.0, &[(5.0, 5.0)]));
    layer.clear();
    assert!(!layer.is_painted(5, 5));
}

#[test]
fn stroke_deserializes_from_point_objects() {
    let s: Stroke = serde_json::from_str(r#"{"brush_size":6,"points":[{"x":1,"y":2}]}"#).unwrap();
    assert_eq!(s.points(), [Point::new(1.0, 2.0)]);
    assert_eq!(s.brush_size(), 6.0);
}

#[test]
fn stroke_rejects_unusable_brush_sizes() {
    for brush in [0.0, -4.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(Stroke::new(brush), Err(RasterError::BrushSize(_))), "brush {brush}");
    }
}

#[test]
fn stroke_deserialization_validates_brush() {
    let err = serde_json::from_str::<Stroke>(r#"{"brush_size":-3,"points":[]}"#).unwrap_err();
    assert!(err.to_string().contains("brush size must be finite and positive"));
}
