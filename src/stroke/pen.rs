use std::f64::consts::FRAC_PI_4;

use kurbo::QuadBez;

use crate::rng::RandomSource;
use crate::stroke::{StrokeRenderer, StrokeRequest, jitter, ribbon};
use crate::surface::{PaintSurface, PathStyle};

/// Conventional calligraphic nib angle.
const NIB_ANGLE: f64 = FRAC_PI_4;

/// Width floor for strokes running parallel to the nib.
const MIN_WIDTH_FRAC: f64 = 0.15;

const RIBBON_SAMPLES: usize = 12;

/// Fountain-pen stroke with a fixed-angle calligraphic nib.
///
/// Rendered width is a function of the angle between the stroke direction
/// and the nib: strokes nearly perpendicular to the nib get close to full
/// width, strokes nearly parallel get close to [`MIN_WIDTH_FRAC`]. Opacity
/// is high and nearly constant to mimic ink flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pen;

impl Pen {
    /// Width multiplier for a stroke in direction `angle` (radians).
    pub(crate) fn nib_width_frac(angle: f64) -> f64 {
        let cross = (angle - NIB_ANGLE).sin().abs();
        MIN_WIDTH_FRAC + (1.0 - MIN_WIDTH_FRAC) * cross
    }
}

impl StrokeRenderer for Pen {
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

        let width = req.width * Self::nib_width_frac(span.y.atan2(span.x));
        let opacity = (0.80 + 0.15 * rng.next_unit()) as f32;

        // Very subtle curvature for a natural hand feel.
        let normal = kurbo::Vec2::new(-span.y, span.x) / len;
        let mid = req.from.midpoint(req.to);
        let control = mid + normal * jitter(rng, 0.5 * req.width);

        let center = QuadBez::new(req.from, control, req.to);
        let path = ribbon(center, RIBBON_SAMPLES, |_| 0.5 * width);

        surface.fill_path(
            &path,
            &PathStyle {
                color,
                opacity,
                shadow: None,
            },
        );
    }
}
