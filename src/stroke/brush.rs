use std::f64::consts::PI;

use kurbo::QuadBez;

use crate::rng::RandomSource;
use crate::stroke::{StrokeRenderer, StrokeRequest, jitter, ribbon};
use crate::surface::{PaintSurface, PathStyle, Shadow};

/// Maximum sideways bow of the centerline, as a fraction of segment length.
const MAX_BOW: f64 = 0.15;

const RIBBON_SAMPLES: usize = 16;

/// Soft brush stroke.
///
/// A filled, tapered shape along a gently curved centerline: width follows a
/// sine envelope (pointed at both ends, widest at the midpoint), and width
/// and opacity are randomized per call to simulate pressure variation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Brush;

impl StrokeRenderer for Brush {
    fn draw(
        &self,
        surface: &mut dyn PaintSurface,
        rng: &mut dyn RandomSource,
        req: &StrokeRequest,
    ) {
        let Some(color) = req.color else { return };

        let span = req.to - req.from;
        let len = span.hypot();
        if len < 1e-9 {
            return;
        }

        // Bow the centerline sideways by up to 15% of the segment length.
        let normal = kurbo::Vec2::new(-span.y, span.x) / len;
        let mid = req.from.midpoint(req.to);
        let control = mid + normal * jitter(rng, MAX_BOW * len);

        let width = req.width * (0.55 + 0.45 * rng.next_unit());
        let opacity = (0.55 + 0.40 * rng.next_unit()) as f32;

        let center = QuadBez::new(req.from, control, req.to);
        let path = ribbon(center, RIBBON_SAMPLES, |t| 0.5 * width * (PI * t).sin());

        surface.fill_path(
            &path,
            &PathStyle {
                color,
                opacity,
                shadow: Some(Shadow::soft_gray()),
            },
        );
    }
}
