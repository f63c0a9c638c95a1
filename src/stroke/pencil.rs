use kurbo::QuadBez;

use crate::foundation::core::{Point, Vec2};
use crate::rng::RandomSource;
use crate::stroke::{StrokeRenderer, StrokeRequest, jitter, ribbon};
use crate::surface::{PaintSurface, PathStyle};

const SUB_STROKES: u32 = 2;

const RIBBON_SAMPLES: usize = 12;

/// Rough pencil stroke.
///
/// Two independently jittered, low-opacity curved sub-strokes approximate
/// graphite grain. This costs roughly twice the draw calls of the other
/// variants; callers targeting a fixed time budget should halve their batch
/// size while this variant is active.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pencil;

impl StrokeRenderer for Pencil {
    fn draw(
        &self,
        surface: &mut dyn PaintSurface,
        rng: &mut dyn RandomSource,
        req: &StrokeRequest,
    ) {
        let Some(color) = req.color else { return };

        let span = req.to - req.from;
        if span.hypot() < 1e-9 {
            return;
        }

        for _ in 0..SUB_STROKES {
            let endpoint_jitter = 0.25 * req.width;
            let from = offset(req.from, rng, endpoint_jitter);
            let to = offset(req.to, rng, endpoint_jitter);
            let control = offset(from.midpoint(to), rng, req.width);

            let envelope = 0.7 + 0.3 * rng.next_unit();
            let width = req.width * (0.25 + 0.45 * envelope);
            let opacity = (0.30 + 0.35 * rng.next_unit()) as f32;

            let center = QuadBez::new(from, control, to);
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

    fn cost_factor(&self) -> u32 {
        SUB_STROKES
    }
}

fn offset(p: Point, rng: &mut dyn RandomSource, scale: f64) -> Point {
    p + Vec2::new(jitter(rng, scale), jitter(rng, scale))
}
