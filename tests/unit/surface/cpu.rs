use super::*;
use crate::foundation::core::{Point, Rgba8};
use crate::surface::Shadow;

fn unit_square(x: f64, y: f64, size: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(Point::new(x, y));
    path.line_to(Point::new(x + size, y));
    path.line_to(Point::new(x + size, y + size));
    path.line_to(Point::new(x, y + size));
    path.close_path();
    path
}

#[test]
fn new_surface_is_transparent() {
    let mut surface = CpuSurface::new(4, 3).unwrap();
    assert_eq!(surface.width(), 4);
    assert_eq!(surface.height(), 3);
    assert!(surface.pixels().iter().all(|&b| b == 0));
}

#[test]
fn oversized_dimensions_are_rejected() {
    assert!(CpuSurface::new(70_000, 10).is_err());
    assert!(CpuSurface::new(10, 70_000).is_err());
}

#[test]
fn clear_fills_every_pixel() {
    let mut surface = CpuSurface::new(4, 4).unwrap();
    surface.clear(Rgba8::WHITE);
    assert!(surface.pixels().iter().all(|&b| b == 255));

    surface.clear(Rgba8::TRANSPARENT);
    assert!(surface.pixels().iter().all(|&b| b == 0));
}

#[test]
fn fill_path_changes_pixels_after_flush() {
    let mut surface = CpuSurface::new(16, 16).unwrap();
    surface.clear(Rgba8::WHITE);
    surface.fill_path(&unit_square(4.0, 4.0, 8.0), &PathStyle::solid(Rgba8::RED));
    surface.flush();

    let pixels = surface.pixels();
    let non_white = pixels
        .chunks_exact(4)
        .filter(|px| px != &[255, 255, 255, 255])
        .count();
    assert!(non_white > 0, "fill left the surface all-background");
}

#[test]
fn transparent_styles_are_skipped() {
    let mut surface = CpuSurface::new(8, 8).unwrap();
    surface.clear(Rgba8::WHITE);
    surface.fill_path(
        &unit_square(1.0, 1.0, 6.0),
        &PathStyle {
            color: Rgba8::TRANSPARENT,
            opacity: 1.0,
            shadow: None,
        },
    );
    surface.fill_path(
        &unit_square(1.0, 1.0, 6.0),
        &PathStyle {
            color: Rgba8::RED,
            opacity: 0.0,
            shadow: None,
        },
    );
    surface.flush();
    assert!(surface.pixels().iter().all(|&b| b == 255));
}

#[test]
fn shadow_paints_outside_the_offset_path() {
    let mut surface = CpuSurface::new(16, 16).unwrap();
    surface.clear(Rgba8::WHITE);
    surface.fill_path(
        &unit_square(2.0, 2.0, 8.0),
        &PathStyle {
            color: Rgba8::RED,
            opacity: 1.0,
            shadow: Some(Shadow {
                offset: kurbo::Vec2::new(3.0, 3.0),
                blur: 1.0,
                color: Rgba8::GRAY,
            }),
        },
    );
    surface.flush();

    // Pixel at (12, 12) lies in the shadow band but outside the fill.
    let idx = (12 * 16 + 12) * 4;
    let px = &surface.pixels()[idx..idx + 4];
    assert_ne!(px, [255, 255, 255, 255], "shadow did not paint");
}

#[test]
fn batches_accumulate_across_flushes() {
    let mut surface = CpuSurface::new(16, 16).unwrap();
    surface.clear(Rgba8::WHITE);
    surface.fill_path(&unit_square(0.0, 0.0, 4.0), &PathStyle::solid(Rgba8::RED));
    surface.flush();
    surface.fill_path(&unit_square(10.0, 10.0, 4.0), &PathStyle::solid(Rgba8::BLUE));
    surface.flush();

    let pixels = surface.pixels();
    let sample = |x: usize, y: usize| {
        let idx = (y * 16 + x) * 4;
        [pixels[idx], pixels[idx + 1], pixels[idx + 2], pixels[idx + 3]]
    };
    // The first batch must survive the second flush.
    assert_eq!(sample(1, 1), [255, 0, 0, 255]);
    assert_eq!(sample(12, 12), [0, 0, 255, 255]);
    assert_eq!(sample(7, 7), [255, 255, 255, 255]);
}

#[test]
fn to_image_matches_surface_dimensions() {
    let mut surface = CpuSurface::new(6, 5).unwrap();
    surface.clear(Rgba8::BLACK);
    let img = surface.to_image().unwrap();
    assert_eq!((img.width(), img.height()), (6, 5));
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}
