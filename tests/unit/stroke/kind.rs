use super::*;
use crate::foundation::core::Rgba8;
use crate::rng::SeededRandom;
use crate::surface::PathStyle;

#[derive(Default)]
struct MockSurface {
    fills: Vec<PathStyle>,
}

impl PaintSurface for MockSurface {
    fn width(&self) -> u32 {
        100
    }

    fn height(&self) -> u32 {
        100
    }

    fn clear(&mut self, _color: Rgba8) {
        self.fills.clear();
    }

    fn fill_path(&mut self, _path: &BezPath, style: &PathStyle) {
        self.fills.push(*style);
    }

    fn flush(&mut self) {}
}

fn request(color: Option<Rgba8>) -> StrokeRequest {
    StrokeRequest {
        width: 2.0,
        color,
        from: Point::new(10.0, 10.0),
        to: Point::new(80.0, 40.0),
    }
}

#[test]
fn missing_color_is_a_silent_no_op_for_every_variant() {
    let mut rng = SeededRandom::new(1);
    for kind in [StrokeKind::Brush, StrokeKind::Pen, StrokeKind::Pencil] {
        let mut surface = MockSurface::default();
        kind.renderer().draw(&mut surface, &mut rng, &request(None));
        assert!(surface.fills.is_empty(), "{kind:?} drew without a color");
    }
}

#[test]
fn each_variant_paints_with_the_requested_color() {
    let mut rng = SeededRandom::new(2);
    for kind in [StrokeKind::Brush, StrokeKind::Pen, StrokeKind::Pencil] {
        let mut surface = MockSurface::default();
        kind.renderer()
            .draw(&mut surface, &mut rng, &request(Some(Rgba8::GREEN)));
        assert!(!surface.fills.is_empty());
        assert!(surface.fills.iter().all(|s| s.color == Rgba8::GREEN));
        assert!(surface.fills.iter().all(|s| s.opacity > 0.0 && s.opacity <= 1.0));
    }
}

#[test]
fn pencil_costs_twice_the_draw_calls() {
    assert_eq!(StrokeKind::Brush.renderer().cost_factor(), 1);
    assert_eq!(StrokeKind::Pen.renderer().cost_factor(), 1);
    assert_eq!(StrokeKind::Pencil.renderer().cost_factor(), 2);

    let mut rng = SeededRandom::new(3);
    let mut surface = MockSurface::default();
    Pencil.draw(&mut surface, &mut rng, &request(Some(Rgba8::RED)));
    assert_eq!(surface.fills.len(), 2);
}

#[test]
fn only_the_brush_casts_a_shadow() {
    let mut rng = SeededRandom::new(4);
    for (kind, shadowed) in [
        (StrokeKind::Brush, true),
        (StrokeKind::Pen, false),
        (StrokeKind::Pencil, false),
    ] {
        let mut surface = MockSurface::default();
        kind.renderer()
            .draw(&mut surface, &mut rng, &request(Some(Rgba8::RED)));
        assert!(surface.fills.iter().all(|s| s.shadow.is_some() == shadowed));
    }
}

#[test]
fn zero_length_strokes_draw_nothing() {
    let mut rng = SeededRandom::new(5);
    for kind in [StrokeKind::Brush, StrokeKind::Pen, StrokeKind::Pencil] {
        let mut surface = MockSurface::default();
        let req = StrokeRequest {
            width: 2.0,
            color: Some(Rgba8::RED),
            from: Point::new(5.0, 5.0),
            to: Point::new(5.0, 5.0),
        };
        kind.renderer().draw(&mut surface, &mut rng, &req);
        assert!(surface.fills.is_empty());
    }
}

#[test]
fn pen_width_tracks_the_nib_angle() {
    use std::f64::consts::{FRAC_PI_4, PI};

    // Parallel to the nib: minimum width. Perpendicular: full width.
    let parallel = Pen::nib_width_frac(FRAC_PI_4);
    let perpendicular = Pen::nib_width_frac(FRAC_PI_4 + PI / 2.0);
    assert!((parallel - 0.15).abs() < 1e-9);
    assert!((perpendicular - 1.0).abs() < 1e-9);
    assert!(Pen::nib_width_frac(0.3) > parallel);
    assert!(Pen::nib_width_frac(0.3) < perpendicular);
}

#[test]
fn ribbon_outline_is_closed_and_finite() {
    let center = kurbo::QuadBez::new(
        Point::new(0.0, 0.0),
        Point::new(5.0, 8.0),
        Point::new(10.0, 0.0),
    );
    let path = ribbon(center, 8, |t| 2.0 * (std::f64::consts::PI * t).sin());
    let elements = path.elements();
    assert!(matches!(elements.last(), Some(kurbo::PathEl::ClosePath)));
    for el in elements {
        for p in el_points(el) {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    // Degenerate centerline must still produce finite geometry.
    let flat = kurbo::QuadBez::new(Point::ZERO, Point::ZERO, Point::ZERO);
    let path = ribbon(flat, 4, |_| 1.0);
    for el in path.elements() {
        for p in el_points(el) {
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }
}

fn el_points(el: &kurbo::PathEl) -> Vec<Point> {
    match *el {
        kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => vec![p],
        kurbo::PathEl::QuadTo(a, b) => vec![a, b],
        kurbo::PathEl::CurveTo(a, b, c) => vec![a, b, c],
        kurbo::PathEl::ClosePath => vec![],
    }
}
